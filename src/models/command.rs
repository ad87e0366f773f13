use crate::utils::constant::{CMD_DAILY_RANKING, CMD_SERVER_STATUS};

/// Commands the bot answers in group chats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    /// `/服务器人数` - online player count, uptime and player details
    ServerStatus,
    /// `/在线排行` - today's online-time ranking
    DailyRanking,
}

impl BotCommand {
    /// Finds a command anywhere in the message content.
    ///
    /// Mentions put the bot's handle in front of the text, so commands are
    /// matched as substrings. [`BotCommand::ServerStatus`] takes precedence
    /// when both appear.
    pub fn parse(content: &str) -> Option<Self> {
        if content.contains(CMD_SERVER_STATUS) {
            Some(BotCommand::ServerStatus)
        } else if content.contains(CMD_DAILY_RANKING) {
            Some(BotCommand::DailyRanking)
        } else {
            None
        }
    }
}
