//! Backend ownership and initialization ordering.

use zincx_core::{RenderMode, TextAlignment};

use crate::backend::RenderBackend;
use crate::error::{RenderError, RenderResult};
use crate::types::{Circle, Color, Line, Point, Rect, Size};

/// Initialization state of a backend session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendState {
    /// `initialize` has not been called yet; draw calls are rejected.
    Uninitialized,
    /// The backend is initialized with the given mode.
    Ready(RenderMode),
}

impl BackendState {
    /// Whether draw calls are accepted.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The active mode, if initialized.
    pub fn mode(&self) -> Option<RenderMode> {
        match self {
            Self::Ready(mode) => Some(*mode),
            Self::Uninitialized => None,
        }
    }
}

/// Statistics gathered from draw calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Number of draw calls forwarded to the backend.
    pub draw_calls: u32,
    /// Number of draw calls the backend reported as failed.
    pub failed_calls: u32,
}

/// Exclusive owner of a backend that enforces `Uninitialized -> Ready`.
///
/// `BackendHandle` itself implements [`RenderBackend`], forwarding every call
/// to the wrapped backend after checking the state:
///
/// - draw calls before [`initialize`](RenderBackend::initialize) fail with
///   [`RenderError::NotInitialized`] and never reach the backend
/// - a second `initialize` fails with [`RenderError::AlreadyInitialized`]
/// - if the backend's own `initialize` fails, the handle stays uninitialized
///
/// ```
/// use zincx_render::{BackendHandle, Color, ConsoleBackend, Rect, RenderBackend, RenderError};
/// use zincx_core::RenderMode;
///
/// let mut handle = BackendHandle::new(ConsoleBackend::new(Vec::new()));
/// let err = handle.fill_rect(Rect::new(0, 0, 1, 1), Color::RED).unwrap_err();
/// assert!(matches!(err, RenderError::NotInitialized));
///
/// handle.initialize(RenderMode::Text).unwrap();
/// handle.fill_rect(Rect::new(0, 0, 1, 1), Color::RED).unwrap();
/// ```
pub struct BackendHandle {
    backend: Box<dyn RenderBackend>,
    state: BackendState,
    stats: FrameStats,
}

impl BackendHandle {
    /// Take ownership of a backend. The handle starts uninitialized.
    pub fn new(backend: impl RenderBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            state: BackendState::Uninitialized,
            stats: FrameStats::default(),
        }
    }

    /// Current initialization state.
    pub fn state(&self) -> BackendState {
        self.state
    }

    /// Statistics since construction or the last [`reset_stats`](Self::reset_stats).
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Zero the statistics counters.
    pub fn reset_stats(&mut self) {
        self.stats = FrameStats::default();
    }

    /// Borrow the wrapped backend without state checks.
    pub fn backend(&self) -> &dyn RenderBackend {
        self.backend.as_ref()
    }

    fn ensure_ready(&self) -> RenderResult<()> {
        if self.state.is_ready() {
            Ok(())
        } else {
            tracing::warn!(
                target: "zincx_render",
                backend = self.backend.name(),
                "draw call rejected: backend not initialized"
            );
            Err(RenderError::NotInitialized)
        }
    }

    fn forward<F>(&mut self, op: F) -> RenderResult<()>
    where
        F: FnOnce(&mut dyn RenderBackend) -> RenderResult<()>,
    {
        self.ensure_ready()?;
        self.stats.draw_calls += 1;
        let result = op(self.backend.as_mut());
        if result.is_err() {
            self.stats.failed_calls += 1;
        }
        result
    }
}

impl std::fmt::Debug for BackendHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendHandle")
            .field("backend", &self.backend.name())
            .field("state", &self.state)
            .field("stats", &self.stats)
            .finish()
    }
}

impl RenderBackend for BackendHandle {
    fn name(&self) -> &str {
        self.backend.name()
    }

    fn initialize(&mut self, mode: RenderMode) -> RenderResult<()> {
        if let BackendState::Ready(current) = self.state {
            return Err(RenderError::AlreadyInitialized(current));
        }
        self.backend.initialize(mode)?;
        self.state = BackendState::Ready(mode);
        tracing::debug!(target: "zincx_render", backend = self.backend.name(), %mode, "backend initialized");
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()> {
        self.forward(|b| b.fill_rect(rect, color))
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()> {
        self.forward(|b| b.draw_rect(rect, color))
    }

    fn draw_line(&mut self, line: Line, color: Color) -> RenderResult<()> {
        self.forward(|b| b.draw_line(line, color))
    }

    fn draw_circle(&mut self, circle: Circle, color: Color, filled: bool) -> RenderResult<()> {
        self.forward(|b| b.draw_circle(circle, color, filled))
    }

    fn draw_ellipse(
        &mut self,
        center: Point,
        size: Size,
        color: Color,
        filled: bool,
    ) -> RenderResult<()> {
        self.forward(|b| b.draw_ellipse(center, size, color, filled))
    }

    fn draw_polygon(&mut self, points: &[Point], color: Color, filled: bool) -> RenderResult<()> {
        self.forward(|b| b.draw_polygon(points, color, filled))
    }

    fn draw_text(
        &mut self,
        text: &str,
        bounds: Rect,
        color: Color,
        alignment: TextAlignment,
    ) -> RenderResult<()> {
        self.forward(|b| b.draw_text(text, bounds, color, alignment))
    }
}
