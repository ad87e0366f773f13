//! # Command Service
//!
//! Answers group `@` messages: recognizes a [`BotCommand`], queries the
//! Minecraft server status and posts the rendered reply.

use std::sync::Arc;

use tracing::{debug, error, info, instrument};

use super::reply::ReplySender;
use super::server_status::StatusClient;
use crate::config::AppConfig;
use crate::models::{BotCommand, GroupMessage, ServerStatus};
use crate::utils::constant::{NO_DETAILS, NO_RANKING, UNKNOWN_UPTIME};

pub struct CommandService {
    server_name: String,
    status_client: StatusClient,
    replier: Arc<dyn ReplySender>,
}

impl CommandService {
    pub fn new(
        server_name: impl Into<String>,
        status_client: StatusClient,
        replier: Arc<dyn ReplySender>,
    ) -> Self {
        Self {
            server_name: server_name.into(),
            status_client,
            replier,
        }
    }

    /// Builds the service from `SERVER_NAME` and `MC_SERVER_URL`.
    pub fn from_config(config: &AppConfig, replier: Arc<dyn ReplySender>) -> Self {
        Self::new(
            config.server_name.clone(),
            StatusClient::new(&config.mc_server_url),
            replier,
        )
    }

    /// Renders the reply for `command`. `None` status means the server could not be reached.
    pub fn render_reply(
        server_name: &str,
        command: BotCommand,
        status: Option<&ServerStatus>,
    ) -> String {
        let Some(status) = status else {
            return format!("[{server_name}] 服务器当前可能已离线");
        };

        match command {
            BotCommand::ServerStatus => format!(
                "[{server_name}] 在线人数: {}\n服务器已运行: {}\n在线玩家详情: {}",
                status.online_count.unwrap_or(0),
                status.server_uptime.as_deref().unwrap_or(UNKNOWN_UPTIME),
                status.details.as_deref().unwrap_or(NO_DETAILS),
            ),
            BotCommand::DailyRanking => format!(
                "[{server_name}]\n{}",
                status.daily_ranking.as_deref().unwrap_or(NO_RANKING)
            ),
        }
    }

    /// Handles one group message that mentions the bot.
    ///
    /// Returns the reply that was sent, or `None` when the message holds no
    /// command. A failed delivery is logged and still returns the reply text.
    #[instrument(skip_all, fields(group_openid = %message.group_openid, msg_id = %message.id))]
    pub async fn on_group_at_message(&self, message: &GroupMessage) -> Option<String> {
        let Some(command) = BotCommand::parse(&message.content) else {
            debug!("Message contains no command");
            return None;
        };

        let status = self.status_client.fetch().await;
        let reply = Self::render_reply(&self.server_name, command, status.as_ref());

        match self
            .replier
            .send_group_message(&message.group_openid, &message.id, &reply)
            .await
        {
            Ok(()) => info!(?command, "Reply sent"),
            Err(e) => error!(error = %e, ?command, "Failed to send reply"),
        }

        Some(reply)
    }
}
