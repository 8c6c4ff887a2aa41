//! Error types for the story engine.

use thiserror::Error;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while running a session.
#[derive(Debug, Error)]
pub enum StoryError {
    /// Input did not parse as an integer or is not on the current menu.
    ///
    /// The display text is the diagnostic shown to the user before the
    /// scene is rendered again.
    #[error("REMOTE LINK ERROR: USER INPUT INVALID. TRY AGAIN.")]
    InvalidChoice {
        /// The rejected input, trimmed.
        input: String,
    },

    /// The input stream ended before an ending was reached.
    #[error("remote link lost: input closed before the session ended")]
    InputClosed,

    /// A choice was submitted after the session reached an ending.
    #[error("the session has already ended")]
    SessionOver,

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoryError {
    /// Whether the session can carry on by prompting again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, StoryError::InvalidChoice { .. })
    }
}
