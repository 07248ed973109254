//! Telegram layer: teloxide adapters, [`timerbot_core::Bot`] implementation, REPL runner.
//! Handles only Telegram connectivity; command and timer logic live above it.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::run_repl;
