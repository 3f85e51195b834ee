//! [`Item`]-related read definitions.

use common::Price;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{geo, Coordinates, Item};

/// Result of selecting [`Item`]s out of a catalog snapshot.
#[derive(Clone, Debug, Serialize)]
pub struct Selection {
    /// Selected [`Item`]s, in catalog order.
    pub items: Vec<Item>,

    /// [`Coordinates`] of the selected [`Item`]s, index-aligned with
    /// `items`.
    pub locations: Vec<Coordinates>,

    /// [`Summary`] over the selected [`Item`]s.
    pub summary: Summary,
}

impl Selection {
    /// Creates a new [`Selection`] of the provided [`Item`]s.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        let locations =
            items.iter().map(|i| geo::resolve(&i.location)).collect();
        let summary = Summary::over(&items);
        Self {
            items,
            locations,
            summary,
        }
    }
}

/// Aggregates derived from a [`Selection`].
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Summary {
    /// Arithmetic mean of the per-day [`Price`]s of the selected [`Item`]s.
    ///
    /// [`Price::ZERO`] when the selection is empty.
    pub average_price_per_day: Price,

    /// Number of the selected [`Item`]s.
    pub item_count: usize,

    /// Total number of people the selected [`Item`]s accommodate.
    pub total_capacity: u32,
}

impl Summary {
    /// Computes a [`Summary`] over the provided [`Item`]s.
    #[must_use]
    pub fn over(items: &[Item]) -> Self {
        let item_count = items.len();
        let total_capacity =
            items.iter().map(|i| u32::from(i.capacity)).sum();
        let average_price_per_day = if item_count == 0 {
            Price::ZERO
        } else {
            let total = items.iter().map(|i| i.price_per_day).sum::<Decimal>();
            Price::new(total / Decimal::from(item_count))
                .unwrap_or(Price::ZERO)
        };
        Self {
            average_price_per_day,
            item_count,
            total_capacity,
        }
    }
}
