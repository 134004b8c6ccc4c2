//! Error types for ZincX.

use thiserror::Error;
use zincx_core::{ConfigError, ErrorCode};
use zincx_render::RenderError;

use crate::event_manager::DispatchFailure;
use crate::item::ItemId;
use crate::view::DrawFailure;

/// A boxed error returned by listener callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The return type of a listener callback.
pub type ListenerResult = std::result::Result<(), BoxError>;

/// Errors from item arena lookups.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemError {
    /// The id was never inserted or the item has been removed.
    #[error("item {0:?} not found in the arena")]
    NotFound(ItemId),
}

/// Errors from posting events.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventError {
    /// The event manager that owned the queue has been dropped.
    #[error("event queue closed: the event manager has been dropped")]
    QueueClosed,
}

/// The main error type for ZincX operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A backend operation failed.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An item lookup failed.
    #[error("item error: {0}")]
    Item(#[from] ItemError),

    /// Posting an event failed.
    #[error("event error: {0}")]
    Event(#[from] EventError),

    /// A dispatch pass completed with failures.
    #[error("dispatch completed with {} failure(s)", .0.len())]
    Dispatch(Vec<DispatchFailure>),

    /// A render pass completed with failures.
    #[error("render pass completed with {} failure(s)", .0.len())]
    RenderPass(Vec<DrawFailure>),
}

impl Error {
    /// The framework error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Config(err) => err.code(),
            Self::Render(err) => err.code(),
            Self::Item(_) => ErrorCode::ResourceNotFound,
            Self::Event(_) | Self::Dispatch(_) | Self::RenderPass(_) => ErrorCode::InvalidArgument,
        }
    }
}

/// A specialized Result type for ZincX operations.
pub type Result<T> = std::result::Result<T, Error>;
