//! Engine: The squarified layout traversal.
//!
//! Items are consumed in input order and grouped greedily into rows. Each
//! finished row is laid out as a strip along the shorter side of the
//! remaining rectangle, the rectangle shrinks by the strip's footprint,
//! and the traversal continues in what is left.

use crate::error::LayoutError;
use crate::geom::{Rect, Tile};

use super::item::Item;
use super::row::Row;

/// Relative tolerance for the weight-sum check in validation.
const SUM_TOLERANCE: f64 = 1e-6;

/// Squarified treemap layout over a borrowed list of weighted items.
///
/// The layout holds a reference to the items and nothing else: rendering
/// keeps its working state on the stack, so repeated calls yield identical
/// output and separate calls may run concurrently on the same value.
///
/// Items are processed in the given order. The classic look expects the
/// caller to sort by descending weight first; unsorted input still tiles
/// correctly, just with worse aspect ratios.
///
/// Weights are absolute areas in the units of the render bounds: a list
/// destined for [`Rect::UNIT`] should sum to 1.0, one destined for a
/// `6 x 4` canvas should sum to 24. [`Treemap::validate_within`] checks
/// this when failing fast is preferred over skewed geometry.
#[derive(Clone, Copy, Debug)]
pub struct Treemap<'a, T> {
    items: &'a [Item<T>],
}

impl<'a, T> Treemap<'a, T> {
    /// Create a layout over the given items.
    ///
    /// The slice is borrowed, not copied, and never reordered or mutated.
    #[inline]
    pub const fn new(items: &'a [Item<T>]) -> Self {
        Self { items }
    }

    /// The items this layout was built over.
    #[inline]
    pub const fn items(&self) -> &'a [Item<T>] {
        self.items
    }

    /// Lay the items out into the unit square.
    ///
    /// Equivalent to [`Treemap::render_within`] with [`Rect::UNIT`].
    pub fn render<F>(&self, emit: F)
    where
        F: FnMut(Tile, &T),
    {
        self.render_within(Rect::UNIT, emit);
    }

    /// Lay the items out into `bounds`, invoking `emit` once per item with
    /// the tile it was assigned, in input order.
    ///
    /// When the weights sum to the bounds area, the emitted tiles partition
    /// the bounds with no gaps and no overlaps, up to floating-point
    /// rounding, and each tile's area equals its item's weight. A short sum
    /// leaves an uncovered margin toward the far corner; an excess sum
    /// pushes tiles past it. Zero-weight items come out as zero-area tiles,
    /// and no input can provoke a division fault.
    pub fn render_within<F>(&self, bounds: Rect, mut emit: F)
    where
        F: FnMut(Tile, &T),
    {
        let mut remaining = bounds;
        let mut row = Row::new();
        let mut start = 0;

        for (index, item) in self.items.iter().enumerate() {
            if row.admits(item.weight, remaining.side()) {
                row.push(item.weight);
            } else {
                flush(&self.items[start..index], row.sum(), &mut remaining, &mut emit);
                start = index;
                row = Row::new();
                row.push(item.weight);
            }
        }
        flush(&self.items[start..], row.sum(), &mut remaining, &mut emit);
    }

    /// Check the items against the unit square.
    ///
    /// Equivalent to [`Treemap::validate_within`] with [`Rect::UNIT`].
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.validate_within(Rect::UNIT)
    }

    /// Check that every weight is finite and non-negative and that the
    /// total matches the area of `bounds` within a small relative
    /// tolerance.
    ///
    /// Rendering never requires this: degenerate input degrades to
    /// degenerate geometry instead of faulting. Validation is for callers
    /// who want a loud failure before drawing nonsense. An empty item list
    /// is always valid, mirroring the render contract of zero emissions.
    pub fn validate_within(&self, bounds: Rect) -> Result<(), LayoutError> {
        let mut total = 0.0;
        for (index, item) in self.items.iter().enumerate() {
            if !item.weight.is_finite() || item.weight < 0.0 {
                return Err(LayoutError::InvalidWeight { index, weight: item.weight });
            }
            total += item.weight;
        }
        if self.items.is_empty() {
            return Ok(());
        }

        let expected = bounds.area();
        let tolerance = SUM_TOLERANCE * expected.max(1.0);
        if (total - expected).abs() > tolerance {
            return Err(LayoutError::WeightSum { total, expected });
        }
        Ok(())
    }
}

/// Lay one finished row into the remaining rectangle as a strip along its
/// shorter side, then shrink the rectangle by the strip's footprint.
///
/// `area` is the row's weight sum. The guards keep zero-weight rows and
/// consumed rectangles on a safe path: they emit zero-area tiles at the
/// strip origin instead of dividing by zero.
fn flush<T, F>(run: &[Item<T>], area: f64, remaining: &mut Rect, emit: &mut F)
where
    F: FnMut(Tile, &T),
{
    if run.is_empty() {
        return;
    }

    if remaining.width > remaining.height {
        // Vertical strip on the left edge, items walking down.
        let strip = if area > 0.0 && remaining.height > 0.0 {
            area / remaining.height
        } else {
            0.0
        };
        let mut y = remaining.y;
        for item in run {
            let extent = if area > 0.0 {
                item.weight / area * remaining.height
            } else {
                0.0
            };
            emit(Tile::new(remaining.x, y, remaining.x + strip, y + extent), &item.label);
            y += extent;
        }
        remaining.take_left(strip);
    } else {
        // Horizontal strip on the top edge, items walking right.
        let strip = if area > 0.0 && remaining.width > 0.0 {
            area / remaining.width
        } else {
            0.0
        };
        let mut x = remaining.x;
        for item in run {
            let extent = if area > 0.0 {
                item.weight / area * remaining.width
            } else {
                0.0
            };
            emit(Tile::new(x, remaining.y, x + extent, remaining.y + strip), &item.label);
            x += extent;
        }
        remaining.take_top(strip);
    }
}
