//! Layout benchmark: Measure full treemap traversals.
//!
//! Target: cost linear in item count, no allocation inside the traversal.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mosaic::{Collector, Item, Rect, Treemap};

/// Descending weights summing to 1.0, shaped like a power-law tail.
fn descending(n: usize) -> Vec<Item<usize>> {
    let raw: Vec<f64> = (0..n).map(|i| 1.0 / (i as f64 + 1.0)).collect();
    let total: f64 = raw.iter().sum();
    raw.into_iter()
        .enumerate()
        .map(|(i, weight)| Item::new(i, weight / total))
        .collect()
}

fn layout_descending(c: &mut Criterion) {
    for n in [10, 100, 1000] {
        let items = descending(n);
        let map = Treemap::new(&items);

        c.bench_function(&format!("layout_descending_{n}"), |b| {
            b.iter(|| {
                let mut emitted = 0usize;
                map.render(|tile, _| {
                    black_box(tile);
                    emitted += 1;
                });
                black_box(emitted)
            })
        });
    }
}

fn layout_equal_weights(c: &mut Criterion) {
    // Equal weights defeat the row heuristic's early flushes, the
    // worst case for row length.
    let items: Vec<Item<usize>> = (0..100).map(|i| Item::new(i, 0.01)).collect();
    let map = Treemap::new(&items);

    c.bench_function("layout_equal_100", |b| {
        b.iter(|| {
            let mut emitted = 0usize;
            map.render(|tile, _| {
                black_box(tile);
                emitted += 1;
            });
            black_box(emitted)
        })
    });
}

fn layout_into_collector(c: &mut Criterion) {
    let items = descending(100);
    let map = Treemap::new(&items);

    c.bench_function("layout_collect_100", |b| {
        b.iter(|| {
            let mut sink = Collector::new();
            map.render(|tile, _| sink.record(tile));
            black_box(sink.len())
        })
    });
}

fn layout_wide_bounds(c: &mut Criterion) {
    // A 16:9 canvas in absolute units exercises both strip orientations.
    let bounds = Rect::from_size(1920.0, 1080.0);
    let items: Vec<Item<usize>> = descending(100)
        .into_iter()
        .map(|item| Item::new(item.label, item.weight * bounds.area()))
        .collect();
    let map = Treemap::new(&items);

    c.bench_function("layout_wide_100", |b| {
        b.iter(|| {
            let mut emitted = 0usize;
            map.render_within(bounds, |tile, _| {
                black_box(tile);
                emitted += 1;
            });
            black_box(emitted)
        })
    });
}

criterion_group!(
    benches,
    layout_descending,
    layout_equal_weights,
    layout_into_collector,
    layout_wide_bounds,
);
criterion_main!(benches);
