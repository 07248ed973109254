//! Bot assembly and entry point.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use timerbot_core::{init_tracing, Bot as CoreBot, HandlerResponse, Message as CoreMessage};
use tracing::{info, instrument};

use crate::chain::HandlerChain;
use crate::components::{build_bot_components, build_handler_chain, BotComponents};
use crate::config::BotConfig;
use crate::telegram::run_repl;

/// Runs the chain for one message and sends any Reply back through `sender`.
pub async fn dispatch(
    chain: &HandlerChain,
    sender: &Arc<dyn CoreBot>,
    message: &CoreMessage,
) -> timerbot_core::Result<()> {
    match chain.handle(message).await? {
        HandlerResponse::Reply(reply) => sender.reply_to(message, &reply).await,
        _ => Ok(()),
    }
}

/// TimerBot: config, components and handler chain, assembled from config.
pub struct TimerBot {
    pub config: BotConfig,
    pub components: BotComponents,
    pub handler_chain: HandlerChain,
}

impl TimerBot {
    pub fn new(config: BotConfig) -> Self {
        let components = build_bot_components(&config);
        let handler_chain = build_handler_chain(components.timers.clone());
        Self {
            config,
            components,
            handler_chain,
        }
    }

    /// Drives the handler chain with a core Message and sends any reply
    /// (callable from tests without the REPL).
    pub async fn handle_core_message(&self, message: &CoreMessage) -> timerbot_core::Result<()> {
        dispatch(&self.handler_chain, &self.components.sender, message).await
    }
}

/// Main entry: validate config, init logging, build components, run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    if let Some(dir) = Path::new(&config.log_file).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    init_tracing(&config.log_file)?;

    let components = build_bot_components(&config);
    let handler_chain = build_handler_chain(components.timers.clone());

    info!("Timer bot starting");
    run_repl(components.teloxide_bot.clone(), handler_chain, components.sender.clone()).await
}
