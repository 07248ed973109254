//! Component factory: builds the teloxide bot, sender adapter, timer manager and
//! handler chain from config. Isolates assembly logic from the runner.

use std::sync::Arc;

use teloxide::prelude::*;
use timerbot_core::Bot as CoreBot;
use tracing::error;

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::handlers::{CommandHandler, FallbackHandler};
use crate::telegram::TelegramBotAdapter;
use crate::timer::{TimerManager, TokioScheduler};

/// Core dependencies for run_bot / TimerBot; produced by the component factory.
pub struct BotComponents {
    pub teloxide_bot: Bot,
    pub sender: Arc<dyn CoreBot>,
    pub timers: Arc<TimerManager>,
}

/// Builds BotComponents from config: teloxide bot (honoring the optional API URL
/// override), the Bot-trait adapter, and the timer manager wired to tokio scheduling.
pub fn build_bot_components(config: &BotConfig) -> BotComponents {
    let teloxide_bot = {
        let bot = Bot::new(config.bot_token.clone());
        if let Some(ref url_str) = config.telegram_api_url {
            match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            }
        } else {
            bot
        }
    };

    let sender: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let timers = Arc::new(TimerManager::new(Arc::new(TokioScheduler), sender.clone()));

    BotComponents {
        teloxide_bot,
        sender,
        timers,
    }
}

/// Builds the handler chain: commands first, free-text fallback last.
pub fn build_handler_chain(timers: Arc<TimerManager>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(CommandHandler::new(timers)))
        .add_handler(Arc::new(FallbackHandler::new()))
}
