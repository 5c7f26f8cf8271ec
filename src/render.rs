//! Render sinks: Capturing emitted tiles for inspection.
//!
//! The layout hands tiles to a plain `FnMut(Tile, &T)` callback and keeps
//! no record of them. Drawing code usually consumes tiles on the spot;
//! tests, benchmarks, and quality reports want them kept. [`Collector`] is
//! that keeper: point the callback at one and ask it questions afterwards.

use crate::geom::Tile;

/// A sink that records every emitted tile for later inspection.
///
/// Labels are not stored; callers who need them keep their own pairing,
/// typically by pushing `(tile, label)` tuples from the callback instead.
#[derive(Clone, Debug, Default)]
pub struct Collector {
    tiles: Vec<Tile>,
}

impl Collector {
    /// Create an empty collector.
    pub const fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// Record one tile.
    #[inline]
    pub fn record(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// The recorded tiles, in emission order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles recorded.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Total area of the recorded tiles.
    ///
    /// For a layout whose weights sum to the bounds area, this comes back
    /// equal to that area within floating-point rounding.
    pub fn covered_area(&self) -> f64 {
        self.tiles.iter().map(Tile::area).sum()
    }

    /// Worst aspect ratio over the recorded tiles.
    ///
    /// The headline quality number for a squarified layout: closer to 1.0
    /// is squarer. Degenerate tiles have no meaningful aspect and are
    /// skipped; with nothing (or only degenerates) recorded this reports
    /// 1.0.
    pub fn worst_aspect(&self) -> f64 {
        self.tiles
            .iter()
            .map(Tile::aspect)
            .filter(|aspect| aspect.is_finite())
            .fold(1.0, f64::max)
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Item, Treemap};
    use crate::geom::Rect;

    #[test]
    fn test_records_in_emission_order() {
        let mut sink = Collector::new();
        sink.record(Tile::new(0.0, 0.0, 1.0, 1.0));
        sink.record(Tile::new(1.0, 0.0, 2.0, 1.0));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.tiles()[1], Tile::new(1.0, 0.0, 2.0, 1.0));
    }

    #[test]
    fn test_covered_area_sums_tiles() {
        let mut sink = Collector::new();
        sink.record(Tile::new(0.0, 0.0, 2.0, 1.0));
        sink.record(Tile::new(2.0, 0.0, 3.0, 1.0));

        assert!((sink.covered_area() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_worst_aspect_ignores_degenerate_tiles() {
        let mut sink = Collector::new();
        sink.record(Tile::new(0.0, 0.0, 2.0, 1.0));
        sink.record(Tile::new(2.0, 0.0, 2.0, 1.0));

        assert_eq!(sink.worst_aspect(), 2.0);
    }

    #[test]
    fn test_empty_collector_reports_unit_aspect() {
        let sink = Collector::new();
        assert!(sink.is_empty());
        assert_eq!(sink.covered_area(), 0.0);
        assert_eq!(sink.worst_aspect(), 1.0);
    }

    #[test]
    fn test_worst_aspect_of_six_by_four_layout() {
        // 6,6,4,3,2,2,1 over 6x4: the squeezed unit tile at the far corner
        // is 0.6 wide by 5/3 tall, aspect 25/9.
        let items: Vec<Item<u32>> = [6.0, 6.0, 4.0, 3.0, 2.0, 2.0, 1.0]
            .into_iter()
            .enumerate()
            .map(|(index, weight)| Item::new(index as u32, weight))
            .collect();

        let mut sink = Collector::new();
        Treemap::new(&items).render_within(Rect::from_size(6.0, 4.0), |tile, _| {
            sink.record(tile);
        });

        assert_eq!(sink.len(), 7);
        assert!((sink.covered_area() - 24.0).abs() < 1e-9);
        assert!((sink.worst_aspect() - 25.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_clear_resets_the_record() {
        let mut sink = Collector::new();
        sink.record(Tile::new(0.0, 0.0, 1.0, 1.0));
        sink.clear();

        assert!(sink.is_empty());
        assert_eq!(sink.worst_aspect(), 1.0);
    }
}
