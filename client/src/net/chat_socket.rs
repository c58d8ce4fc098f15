//! Live chat websocket for the communication hub.
//!
//! One socket per selected conversation: `{ws_base}/ws/chat/{event}/?token=`.
//! Incoming text frames are applied to the page's `MessageFeed`; outgoing
//! messages go through an unbounded channel. Dropping the `ChatSender` ends
//! the send loop, which closes the socket. There is no reconnect.
//!
//! ERROR HANDLING
//! ==============
//! Open and receive failures are logged and end the loop. The sender then
//! reports itself closed and the page falls back to the REST endpoint.

#[cfg(test)]
#[path = "chat_socket_test.rs"]
mod chat_socket_test;

use leptos::prelude::*;
use roster::chat::MessageFeed;

/// Outgoing half of an open chat socket. The default value is closed.
#[derive(Clone, Debug, Default)]
pub struct ChatSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl ChatSender {
    /// True while the socket task is still accepting frames.
    pub fn is_open(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.tx.as_ref().is_some_and(|tx| !tx.is_closed())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    /// Queue a chat message for `conversation_id`. Returns `false` when the
    /// socket is not open, so the caller can POST instead.
    pub fn send_chat(&self, conversation_id: i64, text: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(tx) = self.tx.as_ref() else {
                return false;
            };
            let frame = roster::chat::outgoing_chat_text(conversation_id, text);
            tx.unbounded_send(frame).is_ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (conversation_id, text);
            false
        }
    }
}

/// Open the event chat socket and feed incoming messages into `feed`.
pub fn open_chat_socket(event_id: i64, token: &str, feed: RwSignal<MessageFeed>) -> ChatSender {
    #[cfg(feature = "hydrate")]
    {
        let url = roster::endpoints::chat_socket(&crate::config::socket_base(), event_id, token);
        let (tx, rx) = futures::channel::mpsc::unbounded::<String>();
        leptos::task::spawn_local(async move {
            match run_socket(&url, feed, rx).await {
                Ok(()) => leptos::logging::log!("chat socket for event {event_id} closed"),
                Err(e) => leptos::logging::warn!("chat socket for event {event_id} failed: {e}"),
            }
        });
        ChatSender { tx: Some(tx) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (event_id, token, feed);
        ChatSender::default()
    }
}

#[cfg(feature = "hydrate")]
async fn run_socket(
    url: &str,
    feed: RwSignal<MessageFeed>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    let send_task = async {
        while let Some(text) = rx.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if feed.try_update(|f| f.apply_socket_text(&text)).is_none() {
                        break;
                    }
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("chat socket recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    Ok(())
}
