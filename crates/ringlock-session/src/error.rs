//! Session construction errors.

use ringlock_core::error::DomainError;
use thiserror::Error;

use crate::story::StoryError;

/// Errors raised while starting a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The story cannot be played.
    #[error(transparent)]
    Story(#[from] StoryError),

    /// Setting up a puzzle failed.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
