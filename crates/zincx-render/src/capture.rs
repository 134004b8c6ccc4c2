//! A backend that records draw calls instead of rendering them.
//!
//! [`RecordingBackend`] captures every call as a [`DrawCommand`] in a shared
//! [`CommandLog`]. The log stays readable after the backend has been moved
//! into a view, which makes it the natural observation point for tests and
//! for replaying a frame elsewhere.
//!
//! ```
//! use zincx_render::{BackendHandle, Color, DrawCommand, Rect, RecordingBackend, RenderBackend};
//! use zincx_core::RenderMode;
//!
//! let (backend, log) = RecordingBackend::with_log();
//! let mut handle = BackendHandle::new(backend);
//! handle.initialize(RenderMode::Text).unwrap();
//! handle.fill_rect(Rect::new(1, 2, 3, 4), Color::RED).unwrap();
//!
//! assert_eq!(log.draw_commands(), vec![DrawCommand::FillRect {
//!     rect: Rect::new(1, 2, 3, 4),
//!     color: Color::RED,
//! }]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use zincx_core::{RenderMode, TextAlignment};

use crate::backend::RenderBackend;
use crate::error::{RenderError, RenderResult};
use crate::types::{Circle, Color, Line, Point, Rect, Size};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Initialize(RenderMode),
    FillRect {
        rect: Rect,
        color: Color,
    },
    DrawRect {
        rect: Rect,
        color: Color,
    },
    Line {
        line: Line,
        color: Color,
    },
    Circle {
        circle: Circle,
        color: Color,
        filled: bool,
    },
    Ellipse {
        center: Point,
        size: Size,
        color: Color,
        filled: bool,
    },
    Polygon {
        points: Vec<Point>,
        color: Color,
        filled: bool,
    },
    Text {
        text: String,
        bounds: Rect,
        color: Color,
        alignment: TextAlignment,
    },
}

impl DrawCommand {
    /// Whether this is a drawing call (anything but `Initialize`).
    pub fn is_draw(&self) -> bool {
        !matches!(self, Self::Initialize(_))
    }

    /// Replay this command against another backend.
    pub fn replay(&self, backend: &mut dyn RenderBackend) -> RenderResult<()> {
        match self {
            Self::Initialize(mode) => backend.initialize(*mode),
            Self::FillRect { rect, color } => backend.fill_rect(*rect, *color),
            Self::DrawRect { rect, color } => backend.draw_rect(*rect, *color),
            Self::Line { line, color } => backend.draw_line(*line, *color),
            Self::Circle {
                circle,
                color,
                filled,
            } => backend.draw_circle(*circle, *color, *filled),
            Self::Ellipse {
                center,
                size,
                color,
                filled,
            } => backend.draw_ellipse(*center, *size, *color, *filled),
            Self::Polygon {
                points,
                color,
                filled,
            } => backend.draw_polygon(points, *color, *filled),
            Self::Text {
                text,
                bounds,
                color,
                alignment,
            } => backend.draw_text(text, *bounds, *color, *alignment),
        }
    }
}

/// Shared, clonable view of the commands a [`RecordingBackend`] received.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    commands: Rc<RefCell<Vec<DrawCommand>>>,
}

impl CommandLog {
    /// All recorded commands, in call order.
    pub fn commands(&self) -> Vec<DrawCommand> {
        self.commands.borrow().clone()
    }

    /// Recorded commands excluding `Initialize`.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        self.commands
            .borrow()
            .iter()
            .filter(|c| c.is_draw())
            .cloned()
            .collect()
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.borrow().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.borrow().is_empty()
    }

    /// Forget all recorded commands.
    pub fn clear(&self) {
        self.commands.borrow_mut().clear();
    }

    fn push(&self, command: DrawCommand) {
        self.commands.borrow_mut().push(command);
    }
}

/// A backend that records calls into a [`CommandLog`].
#[derive(Debug, Default)]
pub struct RecordingBackend {
    log: CommandLog,
    fail_initialize: bool,
    fail_draws: bool,
}

impl RecordingBackend {
    /// Create a backend and the log it records into.
    ///
    /// `RecordingBackend::default()` gives a backend whose log is reachable
    /// only through [`log`](Self::log).
    pub fn with_log() -> (Self, CommandLog) {
        let backend = Self::default();
        let log = backend.log.clone();
        (backend, log)
    }

    /// A handle to the log this backend records into.
    pub fn log(&self) -> CommandLog {
        self.log.clone()
    }

    /// Make `initialize` fail (for exercising error paths).
    pub fn fail_initialize(&mut self, fail: bool) {
        self.fail_initialize = fail;
    }

    /// Make every draw call fail after recording it.
    pub fn fail_draws(&mut self, fail: bool) {
        self.fail_draws = fail;
    }

    fn record(&mut self, command: DrawCommand) -> RenderResult<()> {
        self.log.push(command);
        if self.fail_draws {
            return Err(RenderError::Backend("recording backend set to fail".into()));
        }
        Ok(())
    }
}

impl RenderBackend for RecordingBackend {
    fn name(&self) -> &str {
        "recording"
    }

    fn initialize(&mut self, mode: RenderMode) -> RenderResult<()> {
        if self.fail_initialize {
            return Err(RenderError::Backend("recording backend refused to initialize".into()));
        }
        self.log.push(DrawCommand::Initialize(mode));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()> {
        self.record(DrawCommand::FillRect { rect, color })
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()> {
        self.record(DrawCommand::DrawRect { rect, color })
    }

    fn draw_line(&mut self, line: Line, color: Color) -> RenderResult<()> {
        self.record(DrawCommand::Line { line, color })
    }

    fn draw_circle(&mut self, circle: Circle, color: Color, filled: bool) -> RenderResult<()> {
        self.record(DrawCommand::Circle {
            circle,
            color,
            filled,
        })
    }

    fn draw_ellipse(
        &mut self,
        center: Point,
        size: Size,
        color: Color,
        filled: bool,
    ) -> RenderResult<()> {
        self.record(DrawCommand::Ellipse {
            center,
            size,
            color,
            filled,
        })
    }

    fn draw_polygon(&mut self, points: &[Point], color: Color, filled: bool) -> RenderResult<()> {
        self.record(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
            filled,
        })
    }

    fn draw_text(
        &mut self,
        text: &str,
        bounds: Rect,
        color: Color,
        alignment: TextAlignment,
    ) -> RenderResult<()> {
        self.record(DrawCommand::Text {
            text: text.to_string(),
            bounds,
            color,
            alignment,
        })
    }
}
