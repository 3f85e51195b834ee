//! Marker types.

/// Marker type describing an entity becoming available.
#[derive(Clone, Copy, Debug)]
pub struct Availability;
