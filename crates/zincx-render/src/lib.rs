//! Rendering backend abstraction for ZincX.
//!
//! This crate defines the drawing interface the rest of ZincX renders
//! through, together with the geometry value types it takes.
//!
//! - [`RenderBackend`]: the capability set every renderer implements
//! - [`BackendHandle`]: owns a backend and enforces `initialize` before drawing
//! - [`ConsoleBackend`]: text-mode stub that describes each call on a writer
//! - [`RecordingBackend`]: captures calls as [`DrawCommand`]s
//!
//! # Example
//!
//! ```
//! use zincx_core::{RenderMode, TextAlignment};
//! use zincx_render::{BackendHandle, Color, ConsoleBackend, Padding, Rect, RenderBackend};
//!
//! let mut handle = BackendHandle::new(ConsoleBackend::new(Vec::new()));
//! handle.initialize(RenderMode::Text)?;
//!
//! let frame = Rect::new(0, 0, 40, 10);
//! handle.draw_rect(frame, Color::WHITE)?;
//! handle.draw_text("Hello", frame.deflate(&Padding::uniform(1)), Color::WHITE, TextAlignment::Center)?;
//! assert_eq!(handle.stats().draw_calls, 2);
//! # Ok::<(), zincx_render::RenderError>(())
//! ```

mod backend;
pub mod capture;
mod console;
mod error;
mod handle;
mod types;

pub use backend::RenderBackend;
pub use capture::{CommandLog, DrawCommand, RecordingBackend};
pub use console::ConsoleBackend;
pub use error::{RenderError, RenderResult};
pub use handle::{BackendHandle, BackendState, FrameStats};
pub use types::{
    distance, lerp, Circle, Color, Line, Margin, Matrix, Padding, Point, Rect, Size, Vector2D,
};
