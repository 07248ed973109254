//! Wraps teloxide::Bot and implements [`timerbot_core::Bot`]. Production code sends
//! messages via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use timerbot_core::{Bot as CoreBot, Chat, Message, Result, TimerBotError};
use teloxide::{prelude::*, types::ChatId};

/// Thin wrapper around teloxide::Bot that implements the core Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| TimerBotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
