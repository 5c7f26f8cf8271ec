//! Item: A weighted label supplied to the layout.

/// A layout input: an opaque label paired with a non-negative weight.
///
/// Labels pass through the layout untouched and come back out alongside
/// the emitted tile. Weights are absolute areas in the coordinate units of
/// the render bounds, so a list destined for the unit square should sum
/// to 1.0.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Item<T> {
    /// Caller payload, passed through unmodified.
    pub label: T,
    /// Area claimed by this item, in bounds units.
    pub weight: f64,
}

impl<T> Item<T> {
    /// Create a new item.
    #[inline]
    pub const fn new(label: T, weight: f64) -> Self {
        Self { label, weight }
    }
}

impl<T> From<(T, f64)> for Item<T> {
    #[inline]
    fn from((label, weight): (T, f64)) -> Self {
        Self::new(label, weight)
    }
}
