//! Rect: The mutable remaining-area rectangle used during layout.

/// A rectangle defined by position and size, in caller coordinate units.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of the left edge.
    pub x: f64,
    /// Y coordinate of the top edge.
    pub y: f64,
    /// Width (non-negative).
    pub width: f64,
    /// Height (non-negative).
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle of the given size at the origin.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// The unit square at the origin.
    pub const UNIT: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Get the area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Get the shorter of the two sides.
    #[inline]
    pub fn side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Check if the rectangle has no interior.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Get the right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Consume a strip of the given width from the left edge.
    ///
    /// The origin advances and the width shrinks. The amount is clamped to
    /// the available width, so the rectangle never inverts.
    #[inline]
    pub fn take_left(&mut self, amount: f64) {
        let taken = amount.max(0.0).min(self.width.max(0.0));
        self.x += taken;
        self.width -= taken;
    }

    /// Consume a strip of the given height from the top edge.
    ///
    /// The origin advances and the height shrinks. The amount is clamped to
    /// the available height, so the rectangle never inverts.
    #[inline]
    pub fn take_top(&mut self, amount: f64) {
        let taken = amount.max(0.0).min(self.height.max(0.0));
        self.y += taken;
        self.height -= taken;
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}
