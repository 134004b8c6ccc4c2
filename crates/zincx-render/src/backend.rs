//! The render backend abstraction.
//!
//! [`RenderBackend`] is the capability set every concrete renderer provides.
//! Drawable items only ever see `&mut dyn RenderBackend`, never a concrete
//! backend type, so the same item renders on the console stub, a recording
//! backend in tests, or a future GPU backend.
//!
//! # Lifecycle
//!
//! `initialize` must be called exactly once before any draw call. Raw
//! backends do not check this themselves; wrap them in a
//! [`BackendHandle`](crate::BackendHandle) to have the ordering enforced.

use zincx_core::{RenderMode, TextAlignment};

use crate::error::RenderResult;
use crate::types::{Circle, Color, Line, Point, Rect, Size};

/// The core 2D drawing interface.
///
/// All arguments are immutable value types. Implementations must handle every
/// [`RenderMode`] and every [`TextAlignment`]; match on them exhaustively.
pub trait RenderBackend {
    /// A short human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Prepare the backend for the given mode.
    fn initialize(&mut self, mode: RenderMode) -> RenderResult<()>;

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()>;

    /// Stroke the outline of a rectangle.
    fn draw_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()>;

    /// Draw a line segment.
    fn draw_line(&mut self, line: Line, color: Color) -> RenderResult<()>;

    /// Draw a circle, filled or outlined.
    fn draw_circle(&mut self, circle: Circle, color: Color, filled: bool) -> RenderResult<()>;

    /// Draw an axis-aligned ellipse centered at `center` with the given
    /// bounding `size`, filled or outlined.
    fn draw_ellipse(
        &mut self,
        center: Point,
        size: Size,
        color: Color,
        filled: bool,
    ) -> RenderResult<()>;

    /// Draw a closed polygon, filled or outlined.
    fn draw_polygon(&mut self, points: &[Point], color: Color, filled: bool) -> RenderResult<()>;

    /// Draw a string inside `bounds` with the given alignment.
    fn draw_text(
        &mut self,
        text: &str,
        bounds: Rect,
        color: Color,
        alignment: TextAlignment,
    ) -> RenderResult<()>;

    // =========================================================================
    // Conveniences
    // =========================================================================

    /// Fill a circle.
    #[inline]
    fn fill_circle(&mut self, circle: Circle, color: Color) -> RenderResult<()> {
        self.draw_circle(circle, color, true)
    }

    /// Fill an ellipse.
    #[inline]
    fn fill_ellipse(&mut self, center: Point, size: Size, color: Color) -> RenderResult<()> {
        self.draw_ellipse(center, size, color, true)
    }

    /// Fill a polygon.
    #[inline]
    fn fill_polygon(&mut self, points: &[Point], color: Color) -> RenderResult<()> {
        self.draw_polygon(points, color, true)
    }

    /// Draw text centered in `bounds`.
    #[inline]
    fn draw_text_centered(&mut self, text: &str, bounds: Rect, color: Color) -> RenderResult<()> {
        self.draw_text(text, bounds, color, TextAlignment::Center)
    }
}

impl<B: RenderBackend + ?Sized> RenderBackend for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn initialize(&mut self, mode: RenderMode) -> RenderResult<()> {
        (**self).initialize(mode)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()> {
        (**self).fill_rect(rect, color)
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()> {
        (**self).draw_rect(rect, color)
    }

    fn draw_line(&mut self, line: Line, color: Color) -> RenderResult<()> {
        (**self).draw_line(line, color)
    }

    fn draw_circle(&mut self, circle: Circle, color: Color, filled: bool) -> RenderResult<()> {
        (**self).draw_circle(circle, color, filled)
    }

    fn draw_ellipse(
        &mut self,
        center: Point,
        size: Size,
        color: Color,
        filled: bool,
    ) -> RenderResult<()> {
        (**self).draw_ellipse(center, size, color, filled)
    }

    fn draw_polygon(&mut self, points: &[Point], color: Color, filled: bool) -> RenderResult<()> {
        (**self).draw_polygon(points, color, filled)
    }

    fn draw_text(
        &mut self,
        text: &str,
        bounds: Rect,
        color: Color,
        alignment: TextAlignment,
    ) -> RenderResult<()> {
        (**self).draw_text(text, bounds, color, alignment)
    }
}
