//! Basic geometry and color types for rendering.
//!
//! These are plain value types with public fields. Coordinates are integer
//! pixels (or character cells for text-mode backends).

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Offset the point by the given amount.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Convert to a float vector.
    #[inline]
    pub fn to_vec2(self) -> Vector2D {
        Vector2D::new(self.x as f32, self.y as f32)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

/// Space between an element's boundary and its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Padding {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Padding {
    /// Create padding with explicit sides.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same padding on every side.
    #[inline]
    pub const fn uniform(amount: i32) -> Self {
        Self::new(amount, amount, amount, amount)
    }

    /// Horizontal and vertical padding.
    #[inline]
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }
}

/// Space between an element and its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Margin {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Margin {
    /// Create a margin with explicit sides.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same margin on every side.
    #[inline]
    pub const fn uniform(amount: i32) -> Self {
        Self::new(amount, amount, amount, amount)
    }
}

/// A rectangle defined by its top-left corner and dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from an origin and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Dimensions.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge x coordinate (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Center point, rounded toward the origin.
    #[inline]
    pub const fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check if the rectangle is empty (zero or negative size).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Return a new rectangle reduced by `padding`.
    ///
    /// The origin moves by the left/top padding and the dimensions shrink by
    /// both sides. The result may have a negative size if the padding exceeds
    /// the rectangle.
    #[inline]
    pub const fn deflate(&self, padding: &Padding) -> Rect {
        Rect::new(
            self.x + padding.left,
            self.y + padding.top,
            self.width - padding.left - padding.right,
            self.height - padding.top - padding.bottom,
        )
    }

    /// Return a new rectangle grown by `margin`.
    #[inline]
    pub const fn inflate(&self, margin: &Margin) -> Rect {
        Rect::new(
            self.x - margin.left,
            self.y - margin.top,
            self.width + margin.left + margin.right,
            self.height + margin.top + margin.bottom,
        )
    }

    /// Offset the rectangle by the given amount.
    #[inline]
    pub const fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Compute the intersection of two rectangles.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if left < right && top < bottom {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }
}

/// A circle defined by a center point and a radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[inline]
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }

    /// Whether `point` lies inside or on the circle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        let dx = i64::from(point.x - self.center.x);
        let dy = i64::from(point.y - self.center.y);
        let r = i64::from(self.radius);
        dx * dx + dy * dy <= r * r
    }

    /// The square that bounds this circle.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.radius * 2,
            self.radius * 2,
        )
    }
}

/// A line segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Euclidean length of the segment.
    #[inline]
    pub fn length(&self) -> f32 {
        distance(self.start, self.end)
    }
}

/// An RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a color from RGBA components.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Return this color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors, `t` clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| lerp(f32::from(a), f32::from(b), t).round() as u8;
        Color::rgba(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Self = Self::rgb(192, 192, 192);
    pub const DARK_GRAY: Self = Self::rgb(64, 64, 64);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// A 2D float vector.
pub type Vector2D = glam::Vec2;

/// A 3x3 matrix for 2D affine transformations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix(pub glam::Mat3);

impl Matrix {
    /// The identity transform.
    pub const IDENTITY: Self = Self(glam::Mat3::IDENTITY);

    /// A translation.
    pub fn translation(tx: f32, ty: f32) -> Self {
        Self(glam::Mat3::from_translation(Vector2D::new(tx, ty)))
    }

    /// A scale about the origin.
    pub fn scale(sx: f32, sy: f32) -> Self {
        Self(glam::Mat3::from_scale(Vector2D::new(sx, sy)))
    }

    /// A rotation about the origin (angle in radians).
    pub fn rotation(angle: f32) -> Self {
        Self(glam::Mat3::from_angle(angle))
    }

    /// Apply `self` first, then `next`.
    pub fn then(self, next: Matrix) -> Self {
        Self(next.0 * self.0)
    }

    /// Transform a float point.
    pub fn transform_vec(&self, v: Vector2D) -> Vector2D {
        self.0.transform_point2(v)
    }

    /// Transform an integer point, rounding to the nearest pixel.
    pub fn transform_point(&self, point: Point) -> Point {
        let v = self.transform_vec(point.to_vec2());
        Point::new(v.x.round() as i32, v.y.round() as i32)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f32 {
    (b.to_vec2() - a.to_vec2()).length()
}
