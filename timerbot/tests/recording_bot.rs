//! Recording Bot double: captures sent messages instead of calling Telegram.
//! Included via `mod recording_bot;` from the integration test files.

use async_trait::async_trait;
use std::sync::Mutex;
use timerbot::{Bot, Chat, Message, Result};

/// Captures (chat_id, text) pairs for assertions.
pub struct RecordingBot {
    sent: Mutex<Vec<(i64, String)>>,
}

impl RecordingBot {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    /// All sent messages in order.
    #[allow(dead_code)]
    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }

    /// Messages sent to one chat, in order.
    #[allow(dead_code)]
    pub fn sent_to(&self, chat_id: i64) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| *id == chat_id)
            .map(|(_, text)| text.clone())
            .collect()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push((chat.id, text.to_string()));
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
