mod bot;
mod command;
mod status;

pub use bot::{GroupMessage, ServerStatus};
pub use command::BotCommand;
pub use status::StatusBody;
