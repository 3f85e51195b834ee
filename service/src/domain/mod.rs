//! Domain definitions.

pub mod geo;
pub mod item;

pub use self::{geo::Coordinates, item::Item};
