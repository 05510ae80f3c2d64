//! Console error types.

use ringlock_session::{SessionError, StoryError};
use thiserror::Error;

/// Startup and runtime errors for the console.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable holds an invalid value.
    #[error("configuration error: {0}")]
    Config(String),

    /// The story could not be loaded.
    #[error(transparent)]
    Story(#[from] StoryError),

    /// The session could not be started.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Terminal I/O failed.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a typed line is not a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing was typed.
    #[error("empty line")]
    Empty,

    /// The first word is not a known command.
    #[error("unknown command {0:?}; type `help`")]
    Unknown(String),

    /// The command is known but its arguments are wrong.
    #[error("usage: {0}")]
    Usage(&'static str),
}
