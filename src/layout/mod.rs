//! Layout module: The squarified treemap traversal.
//!
//! Items are consumed in input order and grouped greedily into rows; each
//! finished row becomes a strip along the shorter side of the remaining
//! rectangle. Laying strips across the shorter side is what keeps tiles
//! close to square.

mod engine;
mod item;
mod row;

pub use engine::Treemap;
pub use item::Item;
