//! # Bot Message Types
//!
//! Inbound group messages and the status document reported by the
//! Minecraft server plugin.

use serde::{Deserialize, Serialize};

/// A group message that mentions the bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMessage {
    /// Message id, echoed back so the reply is threaded as a passive reply
    pub id: String,
    /// Opaque id of the group the message was posted in
    pub group_openid: String,
    pub content: String,
}

/// Response of `GET {MC_SERVER_URL}/status`.
///
/// Every field is optional; missing ones are rendered with a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    pub online_count: Option<u64>,
    pub server_uptime: Option<String>,
    /// Free-form listing of online players
    pub details: Option<String>,
    /// Pre-rendered daily online-time ranking
    pub daily_ranking: Option<String>,
}
