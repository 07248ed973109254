//! REPL runner: converts teloxide messages to core messages and dispatches them
//! through the handler chain. Replies from the chain go back out via the Bot trait.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use timerbot_core::{Bot as CoreBot, ToCoreMessage};
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramMessageWrapper;
use crate::chain::HandlerChain;
use crate::runner::dispatch;

/// Starts the REPL with the given teloxide Bot, HandlerChain and sender.
/// Each text message is converted to a core Message and dispatched in a spawned
/// task so the REPL returns immediately; non-text updates are ignored.
#[instrument(skip(bot, handler_chain, sender))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    sender: Arc<dyn CoreBot>,
) -> Result<()> {
    teloxide::repl(
        bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let chain = handler_chain.clone();
            let sender = sender.clone();

            async move {
                let Some(text) = msg.text() else {
                    debug!(chat_id = msg.chat.id.0, "Ignoring non-text update");
                    return Ok(());
                };

                let core_msg = TelegramMessageWrapper(&msg).to_core();
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_content = %text,
                    "Received message"
                );

                tokio::spawn(async move {
                    if let Err(e) = dispatch(&chain, &sender, &core_msg).await {
                        error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                    }
                });

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}
