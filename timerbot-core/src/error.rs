use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimerBotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("No text in message")]
    NoText,
}

pub type Result<T> = std::result::Result<T, TimerBotError>;
