//! # timerbot-core
//!
//! Core types and traits for the timer bot: [`Bot`], [`Handler`], message and user types,
//! and tracing initialization. Transport-agnostic; the teloxide layer lives in the app crate.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{HandlerError, Result, TimerBotError};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageDirection, ToCoreMessage, ToCoreUser, User,
};
