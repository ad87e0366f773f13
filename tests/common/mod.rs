#![allow(dead_code)]

use std::sync::{Mutex, Once};

use async_trait::async_trait;
use axum::{Json, Router, http::StatusCode, routing::get};
use qqbot::services::reply::{ReplyError, ReplySender};
use serde_json::Value;
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("qqbot=debug")
            .with_test_writer()
            .init();
    });
}

/// Spawns the application on a random port.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app() -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, qqbot::app()).await.unwrap();
    });

    format!("http://127.0.0.1:{port}")
}

/// Spawns a fake Minecraft status API answering `GET /status` with `status` and `body`.
///
/// Returned address has no trailing slash.
pub async fn spawn_status_server(status: StatusCode, body: Value) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    let router = Router::new().route(
        "/status",
        get(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://127.0.0.1:{port}")
}

/// Address on which nothing is listening.
pub async fn unreachable_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentReply {
    pub group_openid: String,
    pub msg_id: String,
    pub content: String,
}

/// Stores replies instead of delivering them, optionally failing every send.
#[derive(Debug, Default)]
pub struct RecordingReplier {
    sent: Mutex<Vec<SentReply>>,
    fail: bool,
}

impl RecordingReplier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<SentReply> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl ReplySender for RecordingReplier {
    async fn send_group_message(
        &self,
        group_openid: &str,
        msg_id: &str,
        content: &str,
    ) -> Result<(), ReplyError> {
        self.sent.lock().unwrap().push(SentReply {
            group_openid: group_openid.to_string(),
            msg_id: msg_id.to_string(),
            content: content.to_string(),
        });

        if self.fail {
            return Err(ReplyError::SendFailed("gateway unavailable".to_string()));
        }
        Ok(())
    }
}
