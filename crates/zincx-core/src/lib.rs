//! Core systems for ZincX.
//!
//! This crate provides the foundational pieces shared by every other ZincX crate:
//!
//! - **Enums**: The closed taxonomy of symbolic tags (render modes, widget
//!   states, event types, input devices, text alignment, ...)
//! - **Configuration**: TOML-backed [`Config`] with defaults for every field
//! - **Logging**: `tracing` targets, span helpers and the [`log`] free function
//! - **Errors**: Configuration errors and the framework-wide [`ErrorCode`]
//! - **Time**: [`ElapsedTimer`] for monotonic timestamps
//!
//! # Configuration Example
//!
//! ```
//! use zincx_core::{Config, RenderMode};
//!
//! let config = Config::from_toml_str(r#"
//! [window]
//! width = 640
//!
//! [render]
//! mode = "graphics16"
//! "#).unwrap();
//!
//! assert_eq!(config.window.width, 640);
//! assert_eq!(config.window.height, 600);
//! assert_eq!(config.render.mode, RenderMode::Graphics16);
//! ```

pub mod config;
pub mod enums;
mod error;
pub mod logging;
mod time;

pub use config::{Config, LoggingConfig, RenderConfig, WindowConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use enums::*;
pub use error::{ConfigError, ConfigResult};
pub use logging::{log, PerfSpan};
pub use time::ElapsedTimer;

#[doc(hidden)]
pub use tracing;
