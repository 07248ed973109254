//! # Timer bot application
//!
//! Telegram bot with per-chat one-shot reminder timers. Wires the handler chain,
//! command handlers and the timer manager; loads config from env and runs the
//! teloxide REPL. Core types (Handler, Bot, Message) come from timerbot-core.

pub mod chain;
pub mod cli;
pub mod commands;
pub mod components;
pub mod config;
pub mod handlers;
pub mod runner;
pub mod telegram;
pub mod timer;

pub use cli::{load_config, Cli, Commands};

// Re-export core so tests and downstream code use one path.
pub use timerbot_core::{
    init_tracing, Bot, Chat, Handler, HandlerError, HandlerResponse, Message, MessageDirection,
    Result, TimerBotError, ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;
pub use commands::{parse_set_arg, Command, SetArgError};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::BotConfig;
pub use handlers::{
    CommandHandler, FallbackHandler, ABOUT_REPLY, FALLBACK_REPLY, HELP_REPLY,
    INVALID_COMMAND_REPLY,
};
pub use runner::{dispatch, run_bot, TimerBot};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
pub use timer::{
    Scheduler, TimerManager, TokioScheduler, FIRE_MESSAGE, REPLACED_SUFFIX, SET_CONFIRMATION,
    UNSET_CONFIRMATION, UNSET_NO_TIMER,
};
