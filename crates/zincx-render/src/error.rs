//! Error types for the render crate.

use thiserror::Error;
use zincx_core::{ErrorCode, RenderMode};

/// Errors that can occur during rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A draw call was issued before the backend was initialized.
    #[error("backend not initialized; call initialize() before drawing")]
    NotInitialized,

    /// `initialize` was called on a backend that is already running.
    #[error("backend already initialized with mode {0}")]
    AlreadyInitialized(RenderMode),

    /// Writing to the backend's output failed.
    #[error("backend output failed: {0}")]
    Io(#[from] std::io::Error),

    /// A draw call had arguments the backend cannot render.
    #[error("invalid draw arguments: {0}")]
    InvalidArgument(String),

    /// A backend- or item-specific failure.
    #[error("{0}")]
    Backend(String),
}

impl RenderError {
    /// The framework error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotInitialized | Self::AlreadyInitialized(_) | Self::InvalidArgument(_) => {
                ErrorCode::InvalidArgument
            }
            Self::Io(_) | Self::Backend(_) => ErrorCode::ResourceNotFound,
        }
    }
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
