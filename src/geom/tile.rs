//! Tile: An emitted rectangle in corner form.

/// An axis-aligned rectangle in corner form, as handed to the emission
/// callback.
///
/// `(x0, y0)` is the top-left corner and `(x1, y1)` the bottom-right, in
/// the same coordinate units as the layout bounds. Corner form matches
/// what raster and terminal drawing code wants to consume directly.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Tile {
    /// Left edge.
    pub x0: f64,
    /// Top edge.
    pub y0: f64,
    /// Right edge.
    pub x1: f64,
    /// Bottom edge.
    pub y1: f64,
}

impl Tile {
    /// Create a new tile from its corners.
    #[inline]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Get the width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Get the height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Get the area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Check if the tile has no interior (a line or a point).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Aspect ratio as longer side over shorter side.
    ///
    /// Always at least 1.0 for a proper tile; degenerate tiles report
    /// infinity.
    pub fn aspect(&self) -> f64 {
        let width = self.width();
        let height = self.height();
        if width <= 0.0 || height <= 0.0 {
            return f64::INFINITY;
        }
        (width / height).max(height / width)
    }
}

impl std::fmt::Debug for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({}, {} -> {}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}
