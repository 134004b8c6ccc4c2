//! Text-mode console backend.
//!
//! [`ConsoleBackend`] is the reference stub: instead of rasterizing, it writes
//! one descriptive line per call to its writer (stdout by default). It never
//! fails except when the writer does.

use std::io::{self, Write};

use zincx_core::{RenderMode, TextAlignment};

use crate::backend::RenderBackend;
use crate::error::RenderResult;
use crate::types::{Circle, Color, Line, Point, Rect, Size};

/// A backend that describes each draw call as a line of text.
#[derive(Debug)]
pub struct ConsoleBackend<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleBackend<io::Stdout> {
    /// A console backend writing to standard output.
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsoleBackend<io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ConsoleBackend<W> {
    /// A console backend writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Borrow the underlying writer.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Consume the backend and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn filled_prefix(filled: bool) -> &'static str {
        if filled { "filled " } else { "" }
    }
}

struct Rgb(Color);

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.0.r, self.0.g, self.0.b)
    }
}

impl<W: Write> RenderBackend for ConsoleBackend<W> {
    fn name(&self) -> &str {
        "console"
    }

    fn initialize(&mut self, mode: RenderMode) -> RenderResult<()> {
        let description = match mode {
            RenderMode::Text => "Text",
            RenderMode::Graphics16 => "Graphics16",
            RenderMode::Vulkan => {
                tracing::warn!(target: "zincx_render", "Vulkan mode requested on the console backend");
                "Vulkan (not supported on console)"
            }
        };
        writeln!(self.out, "Console Graphics Backend Initialized with mode: {description}")?;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()> {
        writeln!(
            self.out,
            "Filling rect at {},{} with size {}x{} and color {}",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            Rgb(color)
        )?;
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> RenderResult<()> {
        writeln!(
            self.out,
            "Drawing rect outline at {},{} with size {}x{} and color {}",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            Rgb(color)
        )?;
        Ok(())
    }

    fn draw_line(&mut self, line: Line, color: Color) -> RenderResult<()> {
        writeln!(
            self.out,
            "Drawing line from ({},{}) to ({},{}) with color {}",
            line.start.x,
            line.start.y,
            line.end.x,
            line.end.y,
            Rgb(color)
        )?;
        Ok(())
    }

    fn draw_circle(&mut self, circle: Circle, color: Color, filled: bool) -> RenderResult<()> {
        writeln!(
            self.out,
            "Drawing {}circle at ({},{}) with radius {} and color {}",
            Self::filled_prefix(filled),
            circle.center.x,
            circle.center.y,
            circle.radius,
            Rgb(color)
        )?;
        Ok(())
    }

    fn draw_ellipse(
        &mut self,
        center: Point,
        size: Size,
        color: Color,
        filled: bool,
    ) -> RenderResult<()> {
        writeln!(
            self.out,
            "Drawing {}ellipse at ({},{}) with size {}x{} and color {}",
            Self::filled_prefix(filled),
            center.x,
            center.y,
            size.width,
            size.height,
            Rgb(color)
        )?;
        Ok(())
    }

    fn draw_polygon(&mut self, points: &[Point], color: Color, filled: bool) -> RenderResult<()> {
        writeln!(
            self.out,
            "Drawing {}polygon with {} points and color {}",
            Self::filled_prefix(filled),
            points.len(),
            Rgb(color)
        )?;
        for point in points {
            write!(self.out, "Point: ({},{}) ", point.x, point.y)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        bounds: Rect,
        color: Color,
        alignment: TextAlignment,
    ) -> RenderResult<()> {
        let aligned = match alignment {
            TextAlignment::Left => "Left",
            TextAlignment::Center => "Center",
            TextAlignment::Right => "Right",
            TextAlignment::Justified => "Justified",
        };
        writeln!(
            self.out,
            "Drawing text '{}' at bounds {},{} with size {}x{} and color {} aligned {}",
            text,
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            Rgb(color),
            aligned
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(backend: ConsoleBackend<Vec<u8>>) -> String {
        String::from_utf8(backend.into_inner()).unwrap()
    }

    #[test]
    fn test_initialize_every_mode() {
        for mode in RenderMode::ALL {
            let mut backend = ConsoleBackend::new(Vec::new());
            backend.initialize(mode).unwrap();
            let text = output(backend);
            assert!(text.starts_with("Console Graphics Backend Initialized with mode: "));
            assert!(text.contains(mode.as_str()));
        }
    }

    #[test]
    fn test_vulkan_marked_unsupported() {
        let mut backend = ConsoleBackend::new(Vec::new());
        backend.initialize(RenderMode::Vulkan).unwrap();
        assert!(output(backend).contains("Vulkan (not supported on console)"));
    }

    #[test]
    fn test_fill_rect_line() {
        let mut backend = ConsoleBackend::new(Vec::new());
        backend.fill_rect(Rect::new(1, 2, 30, 40), Color::rgb(10, 20, 30)).unwrap();
        assert_eq!(
            output(backend),
            "Filling rect at 1,2 with size 30x40 and color (10,20,30)\n"
        );
    }

    #[test]
    fn test_filled_and_outline_shapes() {
        let mut backend = ConsoleBackend::new(Vec::new());
        backend.fill_circle(Circle::new(Point::new(5, 6), 7), Color::RED).unwrap();
        backend.draw_ellipse(Point::new(1, 1), Size::new(8, 4), Color::BLUE, false).unwrap();
        let text = output(backend);
        assert!(text.contains("Drawing filled circle at (5,6) with radius 7 and color (255,0,0)"));
        assert!(text.contains("Drawing ellipse at (1,1) with size 8x4 and color (0,0,255)"));
    }

    #[test]
    fn test_polygon_lists_points() {
        let mut backend = ConsoleBackend::new(Vec::new());
        backend
            .draw_polygon(&[Point::new(0, 0), Point::new(4, 0), Point::new(2, 3)], Color::GREEN, false)
            .unwrap();
        let text = output(backend);
        assert!(text.starts_with("Drawing polygon with 3 points and color (0,255,0)\n"));
        assert!(text.contains("Point: (0,0) Point: (4,0) Point: (2,3) \n"));
    }

    #[test]
    fn test_text_every_alignment() {
        for alignment in TextAlignment::ALL {
            let mut backend = ConsoleBackend::new(Vec::new());
            backend.draw_text("label", Rect::new(0, 0, 10, 2), Color::WHITE, alignment).unwrap();
            let text = output(backend);
            assert!(text.starts_with("Drawing text 'label' at bounds 0,0 with size 10x2"));
            assert!(text.trim_end().ends_with(&format!("aligned {alignment}")));
        }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut backend = ConsoleBackend::new(Broken);
        let err = backend.draw_line(Line::default(), Color::BLACK).unwrap_err();
        assert!(matches!(err, crate::RenderError::Io(_)));
    }
}
