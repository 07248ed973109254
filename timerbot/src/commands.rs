//! Bot command parsing.
//!
//! Matching is exact and case-sensitive on the first whitespace-separated token
//! (`/SET` is not `/set`). Non-command text parses to `None` and falls through to
//! the fallback handler.

use thiserror::Error;

/// A parsed command token, with the `/set` argument still raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Start,
    Help,
    Set { arg: Option<&'a str> },
    Unset,
    About,
    /// Any other `/...` token.
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Parses the first token of `text`. Returns `None` when the text is not a command.
    pub fn parse(text: &'a str) -> Option<Self> {
        let mut parts = text.split_whitespace();
        let head = parts.next()?;
        if !head.starts_with('/') {
            return None;
        }
        Some(match head {
            "/start" => Command::Start,
            "/help" => Command::Help,
            "/set" => Command::Set { arg: parts.next() },
            "/unset" => Command::Unset,
            "/about" => Command::About,
            other => Command::Unknown(other),
        })
    }
}

/// Rejected `/set` argument; Display is the user-facing reply.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetArgError {
    /// Argument missing or not an integer.
    #[error("Usage: /set <seconds>")]
    Usage,
    /// Integer but negative.
    #[error("Sorry we can not go back to future!")]
    NegativeDelay,
}

/// Parses the `/set` delay argument into whole seconds.
/// Explicit result instead of exceptions: missing/non-numeric → Usage, negative → NegativeDelay.
pub fn parse_set_arg(arg: Option<&str>) -> Result<u64, SetArgError> {
    let raw = arg.ok_or(SetArgError::Usage)?;
    let due: i64 = raw.parse().map_err(|_| SetArgError::Usage)?;
    if due < 0 {
        return Err(SetArgError::NegativeDelay);
    }
    Ok(due as u64)
}
