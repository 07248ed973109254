//! Fallback for plain text: the bot only speaks commands.

use async_trait::async_trait;
use timerbot_core::{Handler, HandlerError, HandlerResponse, Message, Result};

pub const FALLBACK_REPLY: &str =
    "Sorry I didn't understand your command. Press /help to learn more";

/// Terminal handler: replies to any remaining text message.
#[derive(Clone)]
pub struct FallbackHandler;

impl FallbackHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FallbackHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Handler for FallbackHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        // The runner filters non-text updates; an empty content here means the
        // chain was driven with a message that has nothing to answer.
        if message.content.trim().is_empty() {
            return Err(HandlerError::NoText.into());
        }
        Ok(HandlerResponse::Reply(FALLBACK_REPLY.to_string()))
    }
}
