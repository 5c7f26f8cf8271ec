//! # Mosaic
//!
//! A squarified treemap layout engine.
//!
//! Mosaic partitions a rectangle into tiles whose areas are proportional
//! to item weights, keeping each tile as close to square as the greedy
//! row heuristic allows (Bruls, Huizing and van Wijk's squarified
//! treemaps).
//!
//! ## Core Concepts
//!
//! - **Items in, tiles out**: a borrowed list of weighted labels becomes
//!   one callback invocation per item, in input order
//! - **Row building**: consecutive items accumulate into a row while the
//!   row's worst aspect ratio keeps improving
//! - **Shorter-side strips**: each finished row is laid out along the
//!   shorter side of the remaining rectangle, then the rectangle shrinks
//! - **Caller-owned meaning**: labels pass through untouched, and weights
//!   are absolute areas in the units of the render bounds
//!
//! ## Example
//!
//! ```rust
//! use mosaic::{Item, Treemap};
//!
//! let items = [
//!     Item::new("alpha", 0.5),
//!     Item::new("beta", 0.3),
//!     Item::new("gamma", 0.2),
//! ];
//!
//! Treemap::new(&items).render(|tile, label| {
//!     println!("{label}: {:.2} x {:.2}", tile.width(), tile.height());
//! });
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod geom;
pub mod layout;
pub mod render;
pub mod weights;

// Re-exports for convenience
pub use error::LayoutError;
pub use geom::{Rect, Tile};
pub use layout::{Item, Treemap};
pub use render::Collector;
