//! [`Item`] definitions.

use std::str::FromStr;

use common::{define_kind, money::Price, unit, Date, DateOf};
use derive_more::{AsRef, Display, Into};
use serde::{Deserialize, Serialize};

/// Luxury item available for rent.
///
/// The serialized shape of an [`Item`] is both the `GET /items/available`
/// response item shape and the snapshot wire format a remote catalog source
/// consumes.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Item {
    /// ID of this [`Item`].
    pub id: Id,

    /// [`Category`] of this [`Item`].
    pub category: Category,

    /// [`Name`] of this [`Item`].
    pub name: Name,

    /// [`Price`] of renting this [`Item`] for one day.
    pub price_per_day: Price,

    /// [`Location`] this [`Item`] is stationed at.
    pub location: Location,

    /// Number of people this [`Item`] accommodates.
    pub capacity: Capacity,

    /// Optional [`Description`] of this [`Item`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,

    /// [`Status`] of this [`Item`].
    pub status: Status,

    /// [`Date`] when this [`Item`] becomes free for rent next.
    #[serde(with = "common::date::serde::iso")]
    pub next_available_date: NextAvailableDate,
}

impl Item {
    /// Indicates whether this [`Item`] may be offered for rent at all.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == Status::Available
    }

    /// Indicates whether this [`Item`] is already free by the provided
    /// [`Date`].
    #[must_use]
    pub fn is_free_by(&self, date: Date) -> bool {
        self.next_available_date <= date.coerce()
    }
}

/// ID of an [`Item`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(try_from = "u32")]
pub struct Id(u32);

impl Id {
    /// Creates a new [`Id`] if the provided `id` is positive.
    #[must_use]
    pub const fn new(id: u32) -> Option<Self> {
        if id > 0 {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Creates a new [`Id`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the provided `id` is positive.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(id: u32) -> Self {
        Self(id)
    }
}

impl TryFrom<u32> for Id {
    type Error = &'static str;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::new(id).ok_or("`Id` must be positive")
    }
}

/// Name of an [`Item`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[serde(try_from = "String")]
#[as_ref(forward)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

impl TryFrom<String> for Name {
    type Error = &'static str;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name).ok_or("invalid `Name`")
    }
}

/// Location an [`Item`] is stationed at, as a human-readable place name.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[serde(try_from = "String")]
#[as_ref(forward)]
pub struct Location(String);

impl Location {
    /// Creates a new [`Location`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `location` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    /// Creates a new [`Location`] if the given `location` is valid.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Option<Self> {
        let location = location.into();
        Self::check(&location).then_some(Self(location))
    }

    /// Checks whether the given `location` is a valid [`Location`].
    fn check(location: impl AsRef<str>) -> bool {
        let location = location.as_ref();
        location.trim() == location
            && !location.is_empty()
            && location.len() <= 512
    }
}

impl FromStr for Location {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Location`")
    }
}

impl TryFrom<String> for Location {
    type Error = &'static str;

    fn try_from(location: String) -> Result<Self, Self::Error> {
        Self::new(location).ok_or("invalid `Location`")
    }
}

/// Description of an [`Item`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[serde(try_from = "String")]
#[as_ref(forward)]
pub struct Description(String);

impl Description {
    /// Creates a new [`Description`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `description` matches the
    /// format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    /// Creates a new [`Description`] if the given `description` is valid.
    ///
    /// An empty description is represented as no description at all.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Option<Self> {
        let description = description.into();
        Self::check(&description).then_some(Self(description))
    }

    /// Checks whether the given `description` is a valid [`Description`].
    fn check(description: impl AsRef<str>) -> bool {
        let description = description.as_ref();
        description.trim() == description
            && !description.is_empty()
            && description.len() <= 2048
    }
}

impl FromStr for Description {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Description`")
    }
}

impl TryFrom<String> for Description {
    type Error = &'static str;

    fn try_from(description: String) -> Result<Self, Self::Error> {
        Self::new(description).ok_or("invalid `Description`")
    }
}

/// Number of people an [`Item`] accommodates.
pub type Capacity = u16;

define_kind! {
    #[doc = "Category of an [`Item`]."]
    enum Category {
        #[doc = "A luxury yacht."]
        Yacht = 1,

        #[doc = "An exclusive mansion."]
        Mansion = 2,

        #[doc = "A high-end vehicle."]
        Vehicle = 3,

        #[doc = "A private jet."]
        PrivateJet = 4,
    }
}

define_kind! {
    #[doc = "Rental status of an [`Item`]."]
    enum Status {
        #[doc = "The item may be offered for rent."]
        Available = 1,

        #[doc = "The item is withdrawn from the offering."]
        Unavailable = 2,
    }
}

/// [`Date`] when an [`Item`] becomes free for rent next.
pub type NextAvailableDate = DateOf<(Item, unit::Availability)>;

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::Date;

    use super::{Category, Id, Item, Location, Name, Status};

    #[test]
    fn id_must_be_positive() {
        assert!(Id::new(1).is_some());
        assert!(Id::new(0).is_none());
    }

    #[test]
    fn name_rejects_blank_and_padded_input() {
        assert!(Name::new("Azimut 80").is_some());
        assert!(Name::new("").is_none());
        assert!(Name::new("  ").is_none());
        assert!(Name::new(" Azimut 80").is_none());
    }

    #[test]
    fn category_tokens_are_screaming_snake_case() {
        assert_eq!(Category::Yacht.to_string(), "YACHT");
        assert_eq!(Category::PrivateJet.to_string(), "PRIVATE_JET");
        assert_eq!(Category::from_str("MANSION").unwrap(), Category::Mansion);
        assert_eq!(
            Category::from_str("PRIVATE_JET").unwrap(),
            Category::PrivateJet,
        );
        assert!(Category::from_str("Yate").is_err());
    }

    #[test]
    fn serializes_to_wire_shape() {
        let item = Item {
            id: Id::new(7).unwrap(),
            category: Category::PrivateJet,
            name: Name::new("Gulfstream G650").unwrap(),
            price_per_day: "45000".parse().unwrap(),
            location: Location::new("Nueva York").unwrap(),
            capacity: 16,
            description: None,
            status: Status::Available,
            next_available_date: Date::from_iso("2025-07-01")
                .unwrap()
                .coerce(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "category": "PRIVATE_JET",
                "name": "Gulfstream G650",
                "price_per_day": "45000",
                "location": "Nueva York",
                "capacity": 16,
                "status": "AVAILABLE",
                "next_available_date": "2025-07-01",
            }),
        );

        let decoded = serde_json::from_value::<Item>(json).unwrap();
        assert_eq!(decoded.name, item.name);
        assert_eq!(decoded.next_available_date, item.next_available_date);
    }

    #[test]
    fn deserialization_validates_fields() {
        let malformed = serde_json::json!({
            "id": 0,
            "category": "YACHT",
            "name": "Azimut 80",
            "price_per_day": "15000",
            "location": "Mónaco",
            "capacity": 12,
            "status": "AVAILABLE",
            "next_available_date": "2025-07-01",
        });

        assert!(serde_json::from_value::<Item>(malformed).is_err());
    }
}
