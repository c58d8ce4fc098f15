//! Transient banner shown after failed requests and sync runs.
//!
//! DESIGN
//! ======
//! A single slot: a new notice replaces the current one. Each notice carries
//! a sequence number so the auto-dismiss timer of an older notice cannot
//! clear a newer one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use roster::ApiError;

/// Milliseconds a notice stays visible.
pub const NOTICE_TIMEOUT_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "notice notice--info",
            Self::Success => "notice notice--success",
            Self::Error => "notice notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub current: Option<Notice>,
    next_seq: u64,
}

impl NoticeState {
    /// Show `text`, returning the sequence number to dismiss it with.
    pub fn show(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.current = Some(Notice { seq, kind, text: text.into() });
        seq
    }

    /// Show a failed request. Transport failures get a connection hint.
    pub fn show_error(&mut self, error: &ApiError) -> u64 {
        let text = if error.is_network() {
            format!("{error}. Check your connection and try again.")
        } else {
            error.to_string()
        };
        self.show(NoticeKind::Error, text)
    }

    /// Clear the notice if it is still the one identified by `seq`.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.seq == seq) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
