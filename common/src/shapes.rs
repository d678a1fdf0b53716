use rand::Rng;

/// Anything that can be placed in a spatial index by its axis-aligned bounds.
pub trait Bounded {
    fn bounding_rect(&self) -> Rect;
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };
    pub const ONE: Point = Point { x: 1, y: 1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn splat(value: i32) -> Self {
        Self { x: value, y: value }
    }

    /// Clamps each axis independently into `[min, max]`.
    pub fn clamp(self, min: Point, max: Point) -> Self {
        Self {
            x: self.x.max(min.x).min(max.x),
            y: self.y.max(min.y).min(max.y),
        }
    }

    /// Per-axis integer division, truncating toward zero. Divisors of zero
    /// are treated as one.
    pub fn div(self, divisor: Point) -> Self {
        Self {
            x: self.x / divisor.x.max(1),
            y: self.y / divisor.y.max(1),
        }
    }

    pub fn saturating_sub(self, other: Point) -> Self {
        Self {
            x: self.x.saturating_sub(other.x),
            y: self.y.saturating_sub(other.y),
        }
    }

    pub fn saturating_add(self, other: Point) -> Self {
        Self {
            x: self.x.saturating_add(other.x),
            y: self.y.saturating_add(other.y),
        }
    }
}

/// Half-open integer rectangle covering `[left, right) x [top, bottom)`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            left: x,
            top: y,
            right: x.saturating_add(width),
            bottom: y.saturating_add(height),
        }
    }

    pub fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        Self {
            left: top_left.x,
            top: top_left.y,
            right: bottom_right.x,
            bottom: bottom_right.y,
        }
    }

    /// Saturates at `i32::MAX` for rectangles wider than `i32` can hold.
    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn size(&self) -> Point {
        Point::new(self.width(), self.height())
    }

    /// Extent per axis, or `None` when it does not fit in `i32`.
    pub fn checked_size(&self) -> Option<Point> {
        Some(Point::new(
            self.right.checked_sub(self.left)?,
            self.bottom.checked_sub(self.top)?,
        ))
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right, self.top)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left, self.bottom)
    }

    /// Exclusive corner; lies just outside the rectangle.
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    /// The last point covered by the rectangle. Degenerate rectangles collapse
    /// onto their top-left corner.
    pub fn last_point(&self) -> Point {
        Point::new(
            self.right.saturating_sub(1).max(self.left),
            self.bottom.saturating_sub(1).max(self.top),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    pub fn translate(&self, offset: Point) -> Self {
        Self::from_corners(
            self.top_left().saturating_add(offset),
            self.bottom_right().saturating_add(offset),
        )
    }

    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    // Check that `inner` is fully contained in `self`
    pub fn contains_rect(&self, inner: &Rect) -> bool {
        self.left <= inner.left
            && self.right >= inner.right
            && self.top <= inner.top
            && self.bottom >= inner.bottom
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    pub fn expand_to_include(&mut self, other: &Rect) {
        self.left = self.left.min(other.left);
        self.top = self.top.min(other.top);
        self.right = self.right.max(other.right);
        self.bottom = self.bottom.max(other.bottom);
    }

    /// Picks a rectangle of at most `max_size` per axis that fits inside `self`.
    pub fn random_rect_inside<R: Rng>(&self, max_size: Point, rng: &mut R) -> Rect {
        let width = Self::safe_rand(rng, 1, max_size.x.min(self.width()));
        let height = Self::safe_rand(rng, 1, max_size.y.min(self.height()));
        let x = Self::safe_rand(rng, self.left, self.right - width);
        let y = Self::safe_rand(rng, self.top, self.bottom - height);
        Rect::new(x, y, width, height)
    }

    fn safe_rand<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl Bounded for Rect {
    fn bounding_rect(&self) -> Rect {
        *self
    }
}

impl<T: Bounded + ?Sized> Bounded for &T {
    fn bounding_rect(&self) -> Rect {
        (**self).bounding_rect()
    }
}
