#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn default_sender_is_closed() {
    let sender = ChatSender::default();
    assert!(!sender.is_open());
}

#[test]
fn closed_sender_refuses_chat_so_caller_posts() {
    let sender = ChatSender::default();
    assert!(!sender.send_chat(3, "hello"));
}
