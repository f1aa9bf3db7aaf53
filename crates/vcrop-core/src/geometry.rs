//! Integer geometry primitives.
//!
//! Everything here works in whole pixels with the origin at the top-left of
//! the owning surface. Right and bottom edges are exclusive.

pub use glam::IVec2 as Point;

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    /// Left to right (columns, widths)
    Horizontal,
    /// Top to bottom (rows, heights)
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub fn other(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Pick the component of a point that lies on this axis.
    pub fn of(self, point: Point) -> i32 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Extent along an axis.
    pub fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Replace the extent along an axis.
    pub fn set(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::Horizontal => self.width = value,
            Axis::Vertical => self.height = value,
        }
    }

    /// Check if either extent is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Clamp each extent into `[min, max]` independently.
    pub fn clamp(&self, min: Size, max: Size) -> Size {
        Size::new(
            self.width.max(min.width).min(max.width),
            self.height.max(min.height).min(max.height),
        )
    }

    /// Width divided by height, or `None` for a degenerate size.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.width as f64 / self.height as f64)
        }
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge (inclusive)
    pub x: i32,
    /// Top edge (inclusive)
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Create a rectangle from a top-left corner and a size.
    pub fn at(top_left: Point, size: Size) -> Self {
        Self::new(top_left.x, top_left.y, size.width, size.height)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Move the rectangle so its top-left corner sits at `point`.
    pub fn set_top_left(&mut self, point: Point) {
        self.x = point.x;
        self.y = point.y;
    }

    /// Get the center X coordinate.
    pub fn center_x(&self) -> f64 {
        self.x as f64 + self.width as f64 / 2.0
    }

    /// Get the center Y coordinate.
    pub fn center_y(&self) -> f64 {
        self.y as f64 + self.height as f64 / 2.0
    }

    /// Check if the rectangle has zero area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check if a point is inside the rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Grow (or shrink, for negative amounts) around the current center.
    ///
    /// The origin moves by half the change, truncated toward zero, so odd
    /// amounts leave the extra pixel on the right/bottom.
    pub fn inflate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x - dx / 2,
            self.y - dy / 2,
            self.width + dx,
            self.height + dy,
        )
    }

    /// Shrink by a uniform amount on every side.
    pub fn inset(&self, amount: i32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            self.width - 2 * amount,
            self.height - 2 * amount,
        )
    }

    /// Move the rectangle (without resizing) so it lies inside `bounds`.
    ///
    /// On an axis where the rectangle is larger than `bounds` it is centered
    /// on `bounds` instead.
    pub fn clamp_into(&self, bounds: &Rect) -> Rect {
        let x = if self.width >= bounds.width {
            bounds.x + bounds.width / 2 - self.width / 2
        } else if self.x < bounds.x {
            bounds.x
        } else if self.right() > bounds.right() {
            bounds.right() - self.width
        } else {
            self.x
        };

        let y = if self.height >= bounds.height {
            bounds.y + bounds.height / 2 - self.height / 2
        } else if self.y < bounds.y {
            bounds.y
        } else if self.bottom() > bounds.bottom() {
            bounds.bottom() - self.height
        } else {
            self.y
        };

        Rect::new(x, y, self.width, self.height)
    }

    /// Check that `inner` lies entirely within this rectangle.
    pub fn encloses(&self, inner: &Rect) -> bool {
        inner.x >= self.x
            && inner.y >= self.y
            && inner.right() <= self.right()
            && inner.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_excludes_far_edges() {
        let rect = Rect::new(10, 10, 20, 20);
        assert!(rect.contains(Point::new(10, 10)));
        assert!(rect.contains(Point::new(29, 29)));
        assert!(!rect.contains(Point::new(30, 15)));
        assert!(!rect.contains(Point::new(15, 30)));
        assert!(!rect.contains(Point::new(9, 15)));
    }

    #[test]
    fn test_inflate_keeps_center() {
        let rect = Rect::new(50, 50, 100, 100);
        let grown = rect.inflate(20, 10);
        assert_eq!(grown, Rect::new(40, 45, 120, 110));
        assert_eq!(grown.center_x(), rect.center_x());
        assert_eq!(grown.center_y(), rect.center_y());

        let shrunk = rect.inflate(-20, -20);
        assert_eq!(shrunk, Rect::new(60, 60, 80, 80));
    }

    #[test]
    fn test_inflate_odd_amount_truncates() {
        let rect = Rect::new(0, 0, 10, 10);
        assert_eq!(rect.inflate(5, -5), Rect::new(-2, 2, 15, 5));
    }

    #[test]
    fn test_encloses() {
        let outer = Rect::new(0, 0, 100, 100);
        assert!(outer.encloses(&Rect::new(10, 10, 90, 90)));
        assert!(outer.encloses(&outer));
        assert!(!outer.encloses(&Rect::new(10, 10, 91, 20)));
        assert!(!outer.encloses(&Rect::new(-1, 0, 10, 10)));
    }

    #[test]
    fn test_inset() {
        let rect = Rect::new(50, 50, 100, 100);
        assert_eq!(rect.inset(10), Rect::new(60, 60, 80, 80));
    }

    #[test]
    fn test_clamp_into_moves_inside() {
        let bounds = Rect::new(0, 0, 200, 200);
        assert_eq!(
            Rect::new(-10, 150, 50, 80).clamp_into(&bounds),
            Rect::new(0, 120, 50, 80)
        );
        assert_eq!(
            Rect::new(180, -5, 50, 50).clamp_into(&bounds),
            Rect::new(150, 0, 50, 50)
        );
        let inside = Rect::new(20, 20, 50, 50);
        assert_eq!(inside.clamp_into(&bounds), inside);
    }

    #[test]
    fn test_clamp_into_centers_oversized() {
        let bounds = Rect::new(0, 0, 100, 100);
        let clamped = Rect::new(300, 10, 140, 40).clamp_into(&bounds);
        assert_eq!(clamped, Rect::new(-20, 10, 140, 40));
    }

    #[test]
    fn test_size_clamp_and_axis_access() {
        let mut size = Size::new(10, 500);
        assert_eq!(
            size.clamp(Size::new(50, 50), Size::new(150, 150)),
            Size::new(50, 150)
        );
        size.set(Axis::Vertical, 40);
        assert_eq!(size.get(Axis::Vertical), 40);
        assert_eq!(size.get(Axis::Horizontal), 10);
        assert_eq!(Axis::Horizontal.other(), Axis::Vertical);
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(Size::new(1920, 1080).aspect_ratio(), Some(1920.0 / 1080.0));
        assert_eq!(Size::new(0, 1080).aspect_ratio(), None);
    }
}
