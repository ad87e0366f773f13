//! # Reply Delivery
//!
//! Seam between the command layer and whatever actually posts messages to a
//! QQ group. The gateway client lives outside this crate; [`LogReplier`]
//! stands in for it during development.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("Failed to send reply: {0}")]
    SendFailed(String),
}

#[async_trait]
pub trait ReplySender: Send + Sync {
    /// Posts `content` to the group as a passive reply to message `msg_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ReplyError::SendFailed`] if the message cannot be delivered.
    async fn send_group_message(
        &self,
        group_openid: &str,
        msg_id: &str,
        content: &str,
    ) -> Result<(), ReplyError>;
}

/// Logs replies instead of delivering them.
pub struct LogReplier;

#[async_trait]
impl ReplySender for LogReplier {
    #[instrument(skip(self, content))]
    async fn send_group_message(
        &self,
        group_openid: &str,
        msg_id: &str,
        content: &str,
    ) -> Result<(), ReplyError> {
        info!(%content, "Mock group reply");
        Ok(())
    }
}
