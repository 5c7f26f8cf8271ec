//! Row: Running statistics for the strip under construction.

/// Aggregate state of the row currently being accumulated.
///
/// The admit test needs only the weight sum and the two extremes, so the
/// row tracks those instead of holding items; the traversal re-slices its
/// input to recover the members when the row is flushed.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Row {
    len: usize,
    sum: f64,
    min: f64,
    max: f64,
}

impl Row {
    /// Create an empty row.
    pub(crate) const fn new() -> Self {
        Self { len: 0, sum: 0.0, min: 0.0, max: 0.0 }
    }

    /// Total weight accumulated so far.
    pub(crate) const fn sum(&self) -> f64 {
        self.sum
    }

    /// Fold one weight into the running statistics.
    pub(crate) fn push(&mut self, weight: f64) {
        if self.len == 0 {
            self.min = weight;
            self.max = weight;
        } else {
            self.min = self.min.min(weight);
            self.max = self.max.max(weight);
        }
        self.sum += weight;
        self.len += 1;
    }

    /// Decide whether a candidate weight joins this row.
    ///
    /// An empty row admits anything. Otherwise the candidate joins iff
    /// folding it in does not worsen the row's worst aspect ratio when
    /// laid across `side`. Ties admit, so an equal-ratio candidate extends
    /// the row instead of starting a new one.
    pub(crate) fn admits(&self, weight: f64, side: f64) -> bool {
        if self.len == 0 {
            return true;
        }
        let current = worst_ratio(self.sum, self.min, self.max, side);
        let folded = worst_ratio(
            self.sum + weight,
            self.min.min(weight),
            self.max.max(weight),
            side,
        );
        current >= folded
    }
}

/// Worst aspect ratio over the tiles of a strip with total weight `sum`,
/// lightest member `min` and heaviest member `max`, laid across a
/// perpendicular dimension `side`.
///
/// The two arms are the distortion of the heaviest tile (strip too thick)
/// and of the lightest (strip too thin). Non-positive inputs have no
/// meaningful ratio and report infinity; that makes a degenerate row admit
/// any candidate, and keeps zero-weight candidates out of live rows.
pub(crate) fn worst_ratio(sum: f64, min: f64, max: f64, side: f64) -> f64 {
    if sum <= 0.0 || min <= 0.0 || max <= 0.0 || side <= 0.0 {
        return f64::INFINITY;
    }
    let side2 = side * side;
    let sum2 = sum * sum;
    (side2 * max / sum2).max(sum2 / (side2 * min))
}
