//! [`Query`] collection related to the available [`Item`]s.

use common::Date;
use tracerr::Traced;

use crate::{
    domain::{item, Item},
    infra::{load_snapshot, source, LoadSnapshot, Snapshot, Source},
    read, Service,
};

use super::Query;

/// [`Query`] selecting the available [`Item`]s matching a [`Filter`].
#[derive(Clone, Debug, Default)]
pub struct Available(pub Filter);

/// Criteria narrowing an [`Available`] selection.
///
/// All the present criteria must hold at once, in no particular order; an
/// absent criterion never filters anything out.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    /// Sole [`item::Category`] to select, if any.
    pub category: Option<item::Category>,

    /// [`Date`] the selected [`Item`]s must be free by already, if any.
    pub available_by: Option<Date>,

    /// Part of the [`item::Location`] text to search for, if any.
    pub location: Option<LocationNeedle>,
}

impl Filter {
    /// Indicates whether the provided [`Item`] satisfies this [`Filter`].
    ///
    /// [`item::Status::Unavailable`] [`Item`]s never match, whatever the
    /// criteria are.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        item.is_available()
            && self.category.map_or(true, |c| item.category == c)
            && self.available_by.map_or(true, |date| item.is_free_by(date))
            && self
                .location
                .as_ref()
                .map_or(true, |needle| needle.matches(&item.location))
    }
}

/// Case-insensitive needle to search [`item::Location`]s with.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct LocationNeedle(String);

impl LocationNeedle {
    /// Creates a new [`LocationNeedle`] out of the provided text.
    ///
    /// [`None`] is returned when the text is blank, as a blank needle
    /// cannot narrow anything.
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Option<Self> {
        let text = text.as_ref().trim();
        (!text.is_empty()).then(|| Self(text.to_owned()))
    }

    /// Returns the needle text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Indicates whether the provided [`item::Location`] contains this
    /// needle anywhere in its text, ignoring case.
    ///
    /// Case folding is Unicode-aware, so accented characters match their
    /// differently-cased forms.
    #[must_use]
    pub fn matches(&self, location: &item::Location) -> bool {
        let location: &str = location.as_ref();
        location.to_lowercase().contains(&self.0.to_lowercase())
    }
}

impl<Src> Query<Available> for Service<Src>
where
    Src: Source<LoadSnapshot, Ok = Snapshot, Err = Traced<source::Error>>
        + Sync,
{
    type Ok = read::item::Selection;
    type Err = Traced<source::Error>;

    async fn execute(
        &self,
        Available(filter): Available,
    ) -> Result<Self::Ok, Self::Err> {
        let snapshot = self
            .source()
            .execute(load_snapshot())
            .await
            .map_err(tracerr::wrap!())?;

        let items = snapshot
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect::<Vec<_>>();

        tracing::debug!(
            matched = items.len(),
            out_of = snapshot.len(),
            "selected available items",
        );

        Ok(read::item::Selection::new(items))
    }
}

#[cfg(test)]
mod spec {
    use common::{Date, Handler as _, Price};
    use rust_decimal::Decimal;

    use crate::{
        domain::item::{Category, Status},
        infra::Fixture,
        read::Selection,
        Service,
    };

    use super::{Available, Filter, LocationNeedle};

    fn base() -> Date {
        Date::from_iso("2025-06-01").unwrap()
    }

    fn service() -> Service<Fixture> {
        Service::new(Fixture::starting(base()))
    }

    async fn run(filter: Filter) -> Selection {
        service().execute(Available(filter)).await.unwrap()
    }

    #[tokio::test]
    async fn empty_filter_returns_the_whole_catalog() {
        let selection = run(Filter::default()).await;

        assert_eq!(selection.summary.item_count, 15);
    }

    #[tokio::test]
    async fn category_scenario_yachts() {
        let selection = run(Filter {
            category: Some(Category::Yacht),
            ..Filter::default()
        })
        .await;

        assert_eq!(selection.items.len(), 3);
        assert_eq!(selection.summary.item_count, 3);
        assert_eq!(selection.summary.total_capacity, 42);
        assert_eq!(
            selection.summary.average_price_per_day,
            Price::new(Decimal::from(20_000)).unwrap(),
        );
    }

    #[tokio::test]
    async fn absent_category_keeps_every_category() {
        let selection = run(Filter::default()).await;

        for category in [
            Category::Yacht,
            Category::Mansion,
            Category::Vehicle,
            Category::PrivateJet,
        ] {
            assert!(
                selection.items.iter().any(|i| i.category == category),
                "no `{category}` in the unfiltered selection",
            );
        }
    }

    #[tokio::test]
    async fn location_scenario_miami_is_case_insensitive() {
        let selection = run(Filter {
            location: LocationNeedle::new("miami"),
            ..Filter::default()
        })
        .await;

        assert_eq!(selection.items.len(), 2);
        assert!(selection
            .items
            .iter()
            .all(|i| AsRef::<str>::as_ref(&i.location) == "Miami"));
        assert!(selection
            .items
            .iter()
            .any(|i| i.category == Category::Yacht));
        assert!(selection
            .items
            .iter()
            .any(|i| i.category == Category::Vehicle));
    }

    #[tokio::test]
    async fn location_match_preserves_diacritics() {
        for needle in ["móna", "MÓNA"] {
            let selection = run(Filter {
                location: LocationNeedle::new(needle),
                ..Filter::default()
            })
            .await;

            assert_eq!(selection.items.len(), 2, "needle `{needle}`");
            assert!(selection
                .items
                .iter()
                .all(|i| AsRef::<str>::as_ref(&i.location) == "Mónaco"));
        }
    }

    #[tokio::test]
    async fn date_keeps_items_free_on_or_before_it() {
        // Items 1..=3 become free on June 1st, 2nd and 3rd.
        let selection = run(Filter {
            available_by: Some(Date::from_iso("2025-06-03").unwrap()),
            ..Filter::default()
        })
        .await;

        assert_eq!(selection.items.len(), 3);
        assert!(selection.items.iter().all(|i| i
            .is_free_by(Date::from_iso("2025-06-03").unwrap())));
    }

    #[tokio::test]
    async fn date_before_every_availability_yields_empty_selection() {
        let selection = run(Filter {
            available_by: Some(Date::from_iso("2025-05-31").unwrap()),
            ..Filter::default()
        })
        .await;

        assert!(selection.items.is_empty());
        assert_eq!(selection.summary.item_count, 0);
        assert_eq!(selection.summary.average_price_per_day, Price::ZERO);
    }

    #[tokio::test]
    async fn predicates_are_conjunctive() {
        let selection = run(Filter {
            category: Some(Category::Yacht),
            available_by: Some(Date::from_iso("2025-06-02").unwrap()),
            location: LocationNeedle::new("miami"),
        })
        .await;

        // Only "Sunseeker 95": a yacht, in Miami, free by June 2nd.
        assert_eq!(selection.items.len(), 1);
        assert_eq!(u32::from(selection.items[0].id), 2);
    }

    #[tokio::test]
    async fn only_available_items_are_ever_returned() {
        let selection = run(Filter::default()).await;

        assert!(selection
            .items
            .iter()
            .all(|i| i.status == Status::Available));

        let mut withdrawn = selection.items[0].clone();
        withdrawn.status = Status::Unavailable;
        assert!(!Filter::default().matches(&withdrawn));
    }

    #[tokio::test]
    async fn preserves_catalog_insertion_order() {
        let selection = run(Filter {
            location: LocationNeedle::new("o"),
            ..Filter::default()
        })
        .await;

        let ids = selection
            .items
            .iter()
            .map(|i| u32::from(i.id))
            .collect::<Vec<_>>();
        let mut sorted = ids.clone();
        sorted.sort_unstable();

        assert!(!ids.is_empty());
        assert_eq!(ids, sorted);
    }

    #[tokio::test]
    async fn filtering_is_idempotent() {
        let filter = Filter {
            category: Some(Category::Mansion),
            available_by: Some(Date::from_iso("2025-06-30").unwrap()),
            ..Filter::default()
        };

        let selection = run(filter.clone()).await;
        let refiltered = selection
            .items
            .iter()
            .filter(|i| filter.matches(i))
            .cloned()
            .collect::<Vec<_>>();

        assert_eq!(
            selection
                .items
                .iter()
                .map(|i| u32::from(i.id))
                .collect::<Vec<_>>(),
            refiltered.iter().map(|i| u32::from(i.id)).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn selection_future_is_send() {
        fn assert_send(_: impl Send) {}

        assert_send(service().execute(Available(Filter::default())));
    }

    #[test]
    fn blank_needle_is_rejected_at_construction() {
        assert!(LocationNeedle::new("").is_none());
        assert!(LocationNeedle::new("   ").is_none());
        assert!(LocationNeedle::new("miami").is_some());
    }
}
