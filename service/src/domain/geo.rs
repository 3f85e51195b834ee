//! Geographic definitions.

use serde::Serialize;
use xxhash_rust::xxh3;

use super::item::Location;

/// Geographic coordinates of a [`Location`], in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coordinates {
    /// Latitude, degrees north.
    pub lat: f64,

    /// Longitude, degrees east.
    pub lon: f64,
}

/// Default map center the unknown [`Location`]s are placed around.
const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 40.0,
    lon: -3.0,
};

/// Known catalog [`Location`]s and their [`Coordinates`].
static TABLE: &[(&str, Coordinates)] = &[
    ("Mónaco", Coordinates { lat: 43.738, lon: 7.424 }),
    ("Miami", Coordinates { lat: 25.761, lon: -80.191 }),
    ("Ibiza", Coordinates { lat: 38.906, lon: 1.420 }),
    ("Toscana, Italia", Coordinates { lat: 43.771, lon: 11.254 }),
    ("Los Ángeles, USA", Coordinates { lat: 34.052, lon: -118.243 }),
    ("Madrid, España", Coordinates { lat: 40.416, lon: -3.703 }),
    ("Saint-Tropez, Francia", Coordinates { lat: 43.267, lon: 6.640 }),
    ("Dubai", Coordinates { lat: 25.204, lon: 55.270 }),
    ("Londres", Coordinates { lat: 51.507, lon: -0.127 }),
    ("Stuttgart", Coordinates { lat: 48.775, lon: 9.182 }),
    ("Nueva York", Coordinates { lat: 40.712, lon: -74.005 }),
    ("París", Coordinates { lat: 48.856, lon: 2.352 }),
];

/// Resolves the provided [`Location`] into its [`Coordinates`].
///
/// [`Location`]s absent from the known table resolve to a stable position
/// near [`DEFAULT_CENTER`]: the offset is derived from a hash of the
/// location text, so repeated lookups always land on the same point.
#[must_use]
pub fn resolve(location: &Location) -> Coordinates {
    let name: &str = location.as_ref();
    if let Some((_, coords)) =
        TABLE.iter().find(|(known, _)| *known == name)
    {
        return *coords;
    }

    let digest = xxh3::xxh3_128(name.as_bytes());
    #[expect(clippy::cast_possible_truncation, reason = "intentional split")]
    let (hi, lo) = ((digest >> 64) as u64, digest as u64);
    Coordinates {
        lat: DEFAULT_CENTER.lat + degree_offset(hi),
        lon: DEFAULT_CENTER.lon + degree_offset(lo),
    }
}

/// Maps a hash word onto a degree offset within `±1°`.
#[expect(clippy::cast_precision_loss, reason = "coarse jitter")]
fn degree_offset(word: u64) -> f64 {
    (word as f64 / u64::MAX as f64) * 2.0 - 1.0
}

#[cfg(test)]
mod spec {
    use super::{resolve, Coordinates, Location, DEFAULT_CENTER};

    fn location(name: &str) -> Location {
        Location::new(name).unwrap()
    }

    #[test]
    fn resolves_known_locations_from_the_table() {
        assert_eq!(
            resolve(&location("Mónaco")),
            Coordinates { lat: 43.738, lon: 7.424 },
        );
        assert_eq!(
            resolve(&location("Nueva York")),
            Coordinates { lat: 40.712, lon: -74.005 },
        );
    }

    #[test]
    fn unknown_location_falls_back_near_default_center() {
        let Coordinates { lat, lon } = resolve(&location("Atlantis"));

        assert!((lat - DEFAULT_CENTER.lat).abs() <= 1.0);
        assert!((lon - DEFAULT_CENTER.lon).abs() <= 1.0);
    }

    #[test]
    fn fallback_is_deterministic() {
        assert_eq!(
            resolve(&location("Atlantis")),
            resolve(&location("Atlantis")),
        );
        assert_ne!(
            resolve(&location("Atlantis")),
            resolve(&location("El Dorado")),
        );
    }
}
