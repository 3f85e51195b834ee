//! In-process catalog [`Source`].

use std::sync::{Arc, OnceLock};

use common::{money::Price, Date};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::domain::{item, Item};

use super::{source, LoadSnapshot, Snapshot, Source};

/// [`Source`] owning the compiled-in catalog of [`Item`]s.
///
/// The catalog is fixed: no [`Item`] is ever created, updated or deleted at
/// runtime.
#[derive(Clone, Debug, Default)]
pub struct Fixture {
    /// [`Date`] the availability schedule of the catalog starts at.
    ///
    /// [`None`] means "today at the moment the snapshot is first built".
    base: Option<Date>,

    /// Memoized catalog [`Snapshot`].
    ///
    /// Shared between clones, so every handle observes the same fully
    /// initialized catalog.
    cache: Arc<OnceLock<Snapshot>>,
}

impl Fixture {
    /// Creates a new [`Fixture`] dating its availability schedule from
    /// today.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`Fixture`] dating its availability schedule from the
    /// provided [`Date`].
    #[must_use]
    pub fn starting(base: Date) -> Self {
        Self {
            base: Some(base),
            cache: Arc::default(),
        }
    }

    /// Returns the catalog [`Snapshot`] of this [`Fixture`].
    ///
    /// The snapshot is built once and memoized, so repeated calls return
    /// the identical data, in stable insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.cache
            .get_or_init(|| {
                seed(self.base.unwrap_or_else(Date::today)).into()
            })
            .clone()
    }
}

impl Source<LoadSnapshot> for Fixture {
    type Ok = Snapshot;
    type Err = Traced<source::Error>;

    async fn execute(
        &self,
        _: LoadSnapshot,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.snapshot())
    }
}

/// Single row of the compiled-in catalog data.
type Row = (
    u32,
    item::Category,
    &'static str,
    u32,
    &'static str,
    item::Capacity,
    Option<&'static str>,
);

/// Compiled-in catalog data, in insertion order.
static ROWS: &[Row] = &[
    (1, item::Category::Yacht, "Azimut 80", 15_000, "Mónaco", 12,
     Some("80-foot flybridge yacht with a crew of four")),
    (2, item::Category::Yacht, "Sunseeker 95", 20_000, "Miami", 14, None),
    (3, item::Category::Yacht, "Ferretti 920", 25_000, "Ibiza", 16, None),
    (4, item::Category::Mansion, "Villa Toscana", 8_000, "Toscana, Italia",
     20, Some("Renaissance estate surrounded by vineyards")),
    (5, item::Category::Mansion, "Mansión Beverly Hills", 12_000,
     "Los Ángeles, USA", 25, None),
    (6, item::Category::Mansion, "Palacio Madrid", 10_000, "Madrid, España",
     18, None),
    (7, item::Category::Mansion, "Villa Saint-Tropez", 15_000,
     "Saint-Tropez, Francia", 15, None),
    (8, item::Category::Vehicle, "Rolls-Royce Phantom", 2_000, "Dubai", 4,
     Some("Chauffeur available on request")),
    (9, item::Category::Vehicle, "Bentley Continental GT", 1_500, "Londres",
     4, None),
    (10, item::Category::Vehicle, "Ferrari SF90", 3_000, "Mónaco", 2, None),
    (11, item::Category::Vehicle, "Lamborghini Urus", 2_500, "Miami", 5,
     None),
    (12, item::Category::Vehicle, "Porsche 911 GT3", 2_000, "Stuttgart", 2,
     None),
    (13, item::Category::PrivateJet, "Gulfstream G650", 45_000,
     "Nueva York", 16, None),
    (14, item::Category::PrivateJet, "Bombardier Global 7500", 50_000,
     "Londres", 19, Some("Ultra-long-range, 17-hour endurance")),
    (15, item::Category::PrivateJet, "Dassault Falcon 8X", 40_000, "París",
     14, None),
];

/// Builds the fixed catalog, dating availability from `base`.
///
/// The `i`-th [`Item`] (by insertion order, zero-based) becomes free `i`
/// days after `base`.
fn seed(base: Date) -> Vec<Item> {
    (0u16..)
        .zip(ROWS)
        .map(|(offset, row)| build(row, base.plus_days(offset)))
        .collect()
}

/// Builds a single catalog [`Item`] out of its compiled-in [`Row`].
#[expect(unsafe_code, reason = "compiled-in data upholds the invariants")]
fn build(
    &(id, category, name, price, location, capacity, description): &Row,
    free_at: Date,
) -> Item {
    // SAFETY: `ROWS` only contains positive IDs, non-blank trimmed names,
    //         locations and descriptions, and non-negative prices.
    unsafe {
        Item {
            id: item::Id::new_unchecked(id),
            category,
            name: item::Name::new_unchecked(name),
            price_per_day: Price::new_unchecked(Decimal::from(price)),
            location: item::Location::new_unchecked(location),
            capacity,
            description: description
                .map(|d| item::Description::new_unchecked(d)),
            status: item::Status::Available,
            next_available_date: free_at.coerce(),
        }
    }
}

#[cfg(test)]
mod spec {
    use common::{Date, Handler as _};

    use crate::{domain::item, infra::load_snapshot};

    use super::Fixture;

    fn base() -> Date {
        Date::from_iso("2025-06-01").unwrap()
    }

    #[test]
    fn snapshot_is_memoized_and_stable() {
        let fixture = Fixture::starting(base());

        let first = fixture.snapshot();
        let second = fixture.snapshot();

        assert!(std::sync::Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 15);
    }

    #[test]
    fn clones_share_the_memoized_snapshot() {
        let fixture = Fixture::starting(base());
        let clone = fixture.clone();

        assert!(std::sync::Arc::ptr_eq(
            &fixture.snapshot(),
            &clone.snapshot(),
        ));
    }

    #[test]
    fn catalog_has_the_expected_composition() {
        let snapshot = Fixture::starting(base()).snapshot();

        let count = |category| {
            snapshot.iter().filter(|i| i.category == category).count()
        };
        assert_eq!(count(item::Category::Yacht), 3);
        assert_eq!(count(item::Category::Mansion), 4);
        assert_eq!(count(item::Category::Vehicle), 5);
        assert_eq!(count(item::Category::PrivateJet), 3);

        let mut ids =
            snapshot.iter().map(|i| u32::from(i.id)).collect::<Vec<_>>();
        ids.dedup();
        assert_eq!(ids, (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn descriptions_survive_seeding() {
        let snapshot = Fixture::starting(base()).snapshot();

        let described = snapshot
            .iter()
            .filter(|i| i.description.is_some())
            .map(|i| u32::from(i.id))
            .collect::<Vec<_>>();
        assert_eq!(described, [1, 4, 8, 14]);
    }

    #[test]
    fn availability_dates_are_staggered_from_base() {
        let snapshot = Fixture::starting(base()).snapshot();

        assert_eq!(
            snapshot[0].next_available_date,
            base().coerce(),
        );
        assert_eq!(
            snapshot[14].next_available_date,
            base().plus_days(14).coerce(),
        );
    }

    #[tokio::test]
    async fn loads_via_the_source_seam() {
        let fixture = Fixture::starting(base());

        let snapshot = fixture.execute(load_snapshot()).await.unwrap();

        assert_eq!(snapshot.len(), 15);
    }
}
