//! # Handler chain
//!
//! Runs a sequence of handlers. Each handler has optional before/handle/after: all before run
//! in order (any false stops the chain); then handle runs until Stop or Reply; then all after
//! run in reverse order with the final response.

use std::sync::Arc;
use timerbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, instrument};

/// Chain of handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs all before → handle until Stop/Reply → all after in reverse.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        for h in &self.handlers {
            if !h.before(message).await? {
                debug!(
                    handler = std::any::type_name_of_val(h.as_ref()),
                    "before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for h in &self.handlers {
            let response = h.handle(message).await?;
            debug!(
                handler = std::any::type_name_of_val(h.as_ref()),
                response = ?response,
                "Handler processed"
            );
            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue => {}
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(message, &final_response).await?;
        }

        Ok(final_response)
    }
}

impl Default for HandlerChain {
    fn default() -> Self {
        Self::new()
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs
