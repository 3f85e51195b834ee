//! Read entities definitions.

pub mod item;

pub use self::item::Selection;
