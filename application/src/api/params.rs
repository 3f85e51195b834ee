//! [`Params`] definitions.

use common::{date, Date};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use service::query::items::{Filter, LocationNeedle};

/// Query parameters of the `GET /items/available` endpoint, round-trippable
/// through a URL query string.
///
/// Absent parameters restrict nothing, so a bare request returns the whole
/// available catalog.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Params {
    /// Category token to select, or [`ANY_CATEGORY`] for no category
    /// restriction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Part of the location text to search for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ubicacion: Option<String>,

    /// ISO `YYYY-MM-DD` date the items must be free by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<String>,
}

/// `category` token meaning "no category restriction".
pub const ANY_CATEGORY: &str = "ANY";

impl Params {
    /// Converts these [`Params`] into a [`Filter`].
    ///
    /// An absent or [`ANY_CATEGORY`] category and a blank location restrict
    /// nothing; a present `fecha_inicio` is validated strictly.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Category`] if `category` is not a known token.
    /// - [`ParseError::Date`] if `fecha_inicio` is not a valid calendar
    ///   date.
    pub fn into_filter(self) -> Result<Filter, ParseError> {
        let category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ANY_CATEGORY))
            .map(|c| {
                c.parse().map_err(|_| ParseError::Category(c.to_owned()))
            })
            .transpose()?;

        let available_by = self
            .fecha_inicio
            .as_deref()
            .map(Date::from_iso)
            .transpose()
            .map_err(ParseError::Date)?;

        let location = self.ubicacion.and_then(LocationNeedle::new);

        Ok(Filter {
            category,
            available_by,
            location,
        })
    }

    /// Builds [`Params`] echoing the provided [`Filter`], suitable for
    /// placing into a page URL.
    #[must_use]
    pub fn from_filter(filter: &Filter) -> Self {
        Self {
            category: filter.category.map(|c| c.to_string()),
            ubicacion: filter
                .location
                .as_ref()
                .map(|needle| needle.as_str().to_owned()),
            fecha_inicio: filter.available_by.map(|d| d.to_iso()),
        }
    }

    /// Fills the absent parameters with the URL-state defaults: any
    /// category, empty location, and tomorrow relative to the provided
    /// `today`.
    #[must_use]
    pub fn or_defaults(self, today: Date) -> Self {
        Self {
            category: self
                .category
                .or_else(|| Some(ANY_CATEGORY.to_owned())),
            ubicacion: self.ubicacion.or_else(|| Some(String::new())),
            fecha_inicio: self
                .fecha_inicio
                .or_else(|| Some(today.plus_days(1).to_iso())),
        }
    }
}

/// Error of converting [`Params`] into a [`Filter`].
#[derive(Debug, Display, Error)]
pub enum ParseError {
    /// `category` is not a known category token.
    #[display("unknown `category` token: {_0}")]
    Category(#[error(not(source))] String),

    /// `fecha_inicio` is not a valid ISO `YYYY-MM-DD` date.
    #[display("invalid `fecha_inicio`: {_0}")]
    Date(date::ParseError),
}
