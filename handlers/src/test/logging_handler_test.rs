//! Unit tests for LoggingHandler.

use chrono::Utc;
use relayup_core::{Chat, ChatKind, Handler, HandlerResponse, Message, User};
use crate::LoggingHandler;

fn sample_message(content: &str) -> Message {
    Message {
        id: "msg-1".to_string(),
        user: User {
            id: 1,
            username: None,
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 123,
            kind: ChatKind::Private,
        },
        content: content.to_string(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_logging_handler_before_continues() {
    let h = LoggingHandler;
    let result = h.before(&sample_message("hello")).await;
    assert!(result.unwrap());
}

#[tokio::test]
async fn test_logging_handler_handle_passes_through() {
    let h = LoggingHandler;
    let result = h.handle(&sample_message("/start@RelayUpBot")).await.unwrap();
    assert_eq!(result, HandlerResponse::Continue);
}

#[tokio::test]
async fn test_logging_handler_after_ok() {
    let h = LoggingHandler;
    let response = HandlerResponse::Reply("hi".to_string());
    assert!(h.after(&sample_message("hello"), &response).await.is_ok());
}
