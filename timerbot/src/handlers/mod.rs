//! Handler implementations for the chain: command routing and free-text fallback.

mod command_handler;
mod fallback_handler;

pub use command_handler::{CommandHandler, ABOUT_REPLY, HELP_REPLY, INVALID_COMMAND_REPLY};
pub use fallback_handler::{FallbackHandler, FALLBACK_REPLY};
