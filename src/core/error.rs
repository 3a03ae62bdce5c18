//! Domain-specific error types for prompt rendering.
//!
//! Almost every failure while rendering a prompt is absorbed locally and shows up as a
//! missing segment. [`PromptError`] only covers the few cases that cannot be degraded:
//! the working directory cannot be resolved, or the prompt cannot be written out.
//!
//! # Public API
//! - [`PromptError`]: Error enum for the non-recoverable failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, PromptError>`

use thiserror::Error;

/// Domain-specific error types for powerline-prompt
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Cannot resolve current directory: {source}")]
    CurrentDirectory { source: std::io::Error },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using PromptError
pub type Result<T> = std::result::Result<T, PromptError>;

impl PromptError {
    /// Create a current directory resolution error
    pub fn current_directory(source: std::io::Error) -> Self {
        Self::CurrentDirectory { source }
    }
}
