//! Command handler: routes recognized commands to the timer manager and fixed replies.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use timerbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};

use crate::commands::{parse_set_arg, Command};
use crate::timer::TimerManager;

pub const HELP_REPLY: &str =
    "🤷 /about: About developer\n/set <seconds>: to set reminder\n/unset: to unset reminder\n";
pub const ABOUT_REPLY: &str = "👨‍💻 Developed by \n@rubeecoder";
pub const INVALID_COMMAND_REPLY: &str = "Invalid Command. Press /help to learn more";

/// Greeting for /start; invites use of /set.
fn start_reply(first_name: &str) -> String {
    format!("Hello {} Use /set <seconds> to set a timer", first_name)
}

/// Handles all `/...` messages. Non-command text continues to the fallback handler.
pub struct CommandHandler {
    timers: Arc<TimerManager>,
}

impl CommandHandler {
    pub fn new(timers: Arc<TimerManager>) -> Self {
        Self { timers }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(command) = Command::parse(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };

        let reply = match command {
            Command::Start => {
                start_reply(message.user.first_name.as_deref().unwrap_or_default())
            }
            Command::Help => HELP_REPLY.to_string(),
            Command::About => ABOUT_REPLY.to_string(),
            Command::Set { arg } => match parse_set_arg(arg) {
                Ok(due_seconds) => {
                    self.timers
                        .set(&message.chat, Duration::from_secs(due_seconds))
                        .await
                }
                // Bad argument: reply with the parse error, no job is created or altered.
                Err(e) => e.to_string(),
            },
            Command::Unset => self.timers.unset(message.chat.id).await,
            Command::Unknown(token) => {
                info!(token = %token, "Unrecognized command");
                INVALID_COMMAND_REPLY.to_string()
            }
        };

        Ok(HandlerResponse::Reply(reply))
    }
}
