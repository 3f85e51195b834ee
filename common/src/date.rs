//! Calendar date utilities.

use std::{cmp::Ordering, marker::PhantomData};

use derive_more::{Debug, Display, Error};
use time::{
    format_description::BorrowedFormatItem, macros::format_description,
};

/// Untyped calendar date.
pub type Date = DateOf;

/// ISO 8601 calendar date format (`YYYY-MM-DD`).
const ISO_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]");

/// UTC calendar date.
#[derive(Debug)]
pub struct DateOf<Of: ?Sized = ()> {
    /// Inner representation of the date.
    inner: time::Date,

    /// Type parameter describing the kind of date.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateOf<Of> {
    /// Creates a new [`Date`] representing the current date in UTC.
    #[must_use]
    pub fn today() -> Self {
        Self {
            inner: time::OffsetDateTime::now_utc().date(),
            _of: PhantomData,
        }
    }

    /// Creates a new [`Date`] from the provided ISO 8601 (`YYYY-MM-DD`)
    /// string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid ISO 8601 calendar date.
    /// Malformed input is never silently defaulted.
    pub fn from_iso(input: &str) -> Result<Self, ParseError> {
        time::Date::parse(input, ISO_FORMAT)
            .map(|inner| Self {
                inner,
                _of: PhantomData,
            })
            .map_err(ParseError::Parse)
    }

    /// Returns this [`Date`] as an ISO 8601 (`YYYY-MM-DD`) string.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn to_iso(&self) -> String {
        self.inner.format(ISO_FORMAT).unwrap_or_else(|e| {
            panic!("cannot format `Date` as ISO 8601: {e}")
        })
    }

    /// Returns this [`Date`] shifted forward by the provided number of days,
    /// saturating on calendar bounds.
    #[must_use]
    pub fn plus_days(self, days: u16) -> Self {
        Self {
            inner: self
                .inner
                .saturating_add(time::Duration::days(days.into())),
            _of: PhantomData,
        }
    }

    /// Coerces one kind of [`Date`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateOf<NewOf> {
        DateOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }
}

/// Error of parsing a [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ParseError {
    /// Failed to parse the string into a [`Date`].
    Parse(time::error::Parse),
}

impl<Of: ?Sized> Copy for DateOf<Of> {}
impl<Of: ?Sized> Clone for DateOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateOf<Of> {}
impl<Of: ?Sized> PartialEq for DateOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> From<time::Date> for DateOf<Of> {
    fn from(inner: time::Date) -> Self {
        Self {
            inner,
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> From<DateOf<Of>> for time::Date {
    fn from(date: DateOf<Of>) -> Self {
        date.inner
    }
}

pub mod serde {
    //! Module providing integration with [`serde`] crate.

    use super::DateOf;

    pub mod iso {
        //! Module providing serialization and deserialization of [`DateOf`]
        //! as an ISO 8601 (`YYYY-MM-DD`) string.

        use serde::{de::Error, Deserialize, Deserializer, Serializer};

        use super::DateOf;

        /// Serializes the [`DateOf`] as an ISO 8601 string.
        ///
        /// # Errors
        ///
        /// Never, in fact.
        pub fn serialize<Of, S>(
            date: &DateOf<Of>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            Of: ?Sized,
        {
            serializer.serialize_str(&date.to_iso())
        }

        /// Deserializes an ISO 8601 string into a [`DateOf`].
        ///
        /// # Errors
        ///
        /// Returns an error if the string is not a valid calendar date.
        pub fn deserialize<'de, D, Of>(
            deserializer: D,
        ) -> Result<DateOf<Of>, D::Error>
        where
            D: Deserializer<'de>,
            Of: ?Sized,
        {
            DateOf::from_iso(&String::deserialize(deserializer)?)
                .map_err(Error::custom)
        }
    }
}

#[cfg(test)]
mod spec {
    use super::Date;

    #[test]
    fn parses_iso_date() {
        let date = Date::from_iso("2025-06-15").unwrap();
        assert_eq!(date.to_iso(), "2025-06-15");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(Date::from_iso("not-a-date").is_err());
        assert!(Date::from_iso("15/06/2025").is_err());
        assert!(Date::from_iso("2025-6-15").is_err());
        assert!(Date::from_iso("2025-13-01").is_err());
        assert!(Date::from_iso("2025-02-30").is_err());
        assert!(Date::from_iso("").is_err());
    }

    #[test]
    fn compares_as_calendar_dates() {
        let earlier = Date::from_iso("2025-01-31").unwrap();
        let later = Date::from_iso("2025-02-01").unwrap();

        assert!(earlier < later);
        assert_eq!(earlier, Date::from_iso("2025-01-31").unwrap());
    }

    #[test]
    fn shifts_by_days() {
        let date = Date::from_iso("2025-12-30").unwrap();

        assert_eq!(date.plus_days(0), date);
        assert_eq!(date.plus_days(2).to_iso(), "2026-01-01");
    }
}
