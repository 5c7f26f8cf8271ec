//! Geometry module: Rectangle primitives for treemap layout.
//!
//! Two rectangle forms with different jobs: [`Rect`] is origin plus size
//! and tracks the shrinking remaining area during a traversal; [`Tile`] is
//! the corner-form rectangle handed to the emission callback.

mod rect;
mod tile;

pub use rect::Rect;
pub use tile::Tile;
