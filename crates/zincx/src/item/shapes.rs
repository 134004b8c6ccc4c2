//! Primitive shape items.

use zincx_render::{Circle, Color, Line, Point, Rect, RenderBackend, RenderResult};

use super::{GraphicsItem, ItemBase};

/// An axis-aligned rectangle with an optional fill and border.
#[derive(Debug, Clone, PartialEq)]
pub struct RectItem {
    base: ItemBase,
    fill: Option<Color>,
    border: Option<Color>,
}

impl RectItem {
    /// A rectangle with neither fill nor border; draws nothing until styled.
    pub fn new(rect: Rect) -> Self {
        Self {
            base: ItemBase::new(rect),
            fill: None,
            border: None,
        }
    }

    pub fn filled(rect: Rect, color: Color) -> Self {
        Self::new(rect).with_fill(color)
    }

    pub fn outlined(rect: Rect, color: Color) -> Self {
        Self::new(rect).with_border(color)
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn with_border(mut self, color: Color) -> Self {
        self.border = Some(color);
        self
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn border(&self) -> Option<Color> {
        self.border
    }
}

impl GraphicsItem for RectItem {
    fn base(&self) -> &ItemBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ItemBase {
        &mut self.base
    }

    fn draw(&self, backend: &mut dyn RenderBackend) -> RenderResult<()> {
        let rect = self.bounds();
        if let Some(fill) = self.fill {
            backend.fill_rect(rect, fill)?;
        }
        if let Some(border) = self.border {
            backend.draw_rect(rect, border)?;
        }
        Ok(())
    }
}

/// An ellipse inscribed in the item bounds.
///
/// Square bounds are drawn as a circle.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseItem {
    base: ItemBase,
    color: Color,
    filled: bool,
}

impl EllipseItem {
    pub fn new(rect: Rect, color: Color, filled: bool) -> Self {
        Self {
            base: ItemBase::new(rect),
            color,
            filled,
        }
    }

    /// A circle of `radius` around `center`.
    pub fn circle(center: Point, radius: i32, color: Color, filled: bool) -> Self {
        Self::new(Circle::new(center, radius).bounds(), color, filled)
    }
}

impl GraphicsItem for EllipseItem {
    fn base(&self) -> &ItemBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ItemBase {
        &mut self.base
    }

    fn draw(&self, backend: &mut dyn RenderBackend) -> RenderResult<()> {
        let bounds = self.bounds();
        if bounds.width == bounds.height {
            let circle = Circle::new(bounds.center(), bounds.width / 2);
            backend.draw_circle(circle, self.color, self.filled)
        } else {
            backend.draw_ellipse(bounds.center(), bounds.size(), self.color, self.filled)
        }
    }
}

/// A line segment. The item bounds span the two endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    base: ItemBase,
    line: Line,
    color: Color,
}

impl LineItem {
    pub fn new(start: Point, end: Point, color: Color) -> Self {
        let x = start.x.min(end.x);
        let y = start.y.min(end.y);
        let bounds = Rect::new(x, y, (end.x - start.x).abs(), (end.y - start.y).abs());
        Self {
            base: ItemBase::new(bounds),
            // Endpoints are kept relative to the item position.
            line: Line::new(start.offset(-x, -y), end.offset(-x, -y)),
            color,
        }
    }

    /// The segment in view coordinates.
    pub fn line(&self) -> Line {
        let origin = self.position();
        Line::new(
            self.line.start.offset(origin.x, origin.y),
            self.line.end.offset(origin.x, origin.y),
        )
    }
}

impl GraphicsItem for LineItem {
    fn base(&self) -> &ItemBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ItemBase {
        &mut self.base
    }

    fn draw(&self, backend: &mut dyn RenderBackend) -> RenderResult<()> {
        backend.draw_line(self.line(), self.color)
    }
}

/// A closed polygon whose points are relative to the item position.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonItem {
    base: ItemBase,
    points: Vec<Point>,
    color: Color,
    filled: bool,
}

impl PolygonItem {
    pub fn new(position: Point, points: Vec<Point>, color: Color, filled: bool) -> Self {
        let width = points.iter().map(|p| p.x).max().unwrap_or(0).max(0);
        let height = points.iter().map(|p| p.y).max().unwrap_or(0).max(0);
        Self {
            base: ItemBase::new(Rect::new(position.x, position.y, width, height)),
            points,
            color,
            filled,
        }
    }

    /// The vertices in view coordinates.
    pub fn points(&self) -> Vec<Point> {
        let origin = self.position();
        self.points
            .iter()
            .map(|p| p.offset(origin.x, origin.y))
            .collect()
    }
}

impl GraphicsItem for PolygonItem {
    fn base(&self) -> &ItemBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ItemBase {
        &mut self.base
    }

    fn draw(&self, backend: &mut dyn RenderBackend) -> RenderResult<()> {
        backend.draw_polygon(&self.points(), self.color, self.filled)
    }
}
