//! **wayfind-core**: geometry primitives for the *wayfind* crates.
//!
//! Hosts that describe their world as a rectangle of cells use [`Point`] and
//! [`Range`] to map cell positions onto the opaque node identifiers consumed
//! by `wayfind-paths`.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
