//! Country coordinate resolution.
//!
//! Two historically divergent resolution policies exist for this data set:
//! a static ISO3 -> centroid table applied at normalization time, and
//! per-selection forward geocoding by country name. Exactly one is picked
//! at construction via [`CoordinateStrategy`]; they are never mixed at
//! runtime.

use crate::models::LngLat;
use ahash::AHashMap;

/// Approximate country centroids as (ISO3, longitude, latitude).
/// Codes absent from this table resolve to (0, 0).
const BUILTIN: &[(&str, f64, f64)] = &[
    ("ABW", -69.97, 12.52),
    ("AFG", 66.0, 33.0),
    ("AGO", 18.5, -12.5),
    ("ALB", 20.0, 41.0),
    ("ARE", 54.0, 24.0),
    ("ARG", -64.0, -34.0),
    ("ARM", 45.0, 40.0),
    ("AUS", 133.0, -27.0),
    ("AUT", 13.33, 47.33),
    ("AZE", 47.5, 40.5),
    ("BDI", 30.0, -3.5),
    ("BEN", 2.25, 9.5),
    ("BFA", -2.0, 13.0),
    ("BGD", 90.0, 24.0),
    ("BGR", 25.0, 43.0),
    ("BIH", 18.0, 44.0),
    ("BLR", 28.0, 53.0),
    ("BOL", -65.0, -17.0),
    ("BRA", -55.0, -10.0),
    ("BTN", 90.5, 27.5),
    ("BWA", 24.0, -22.0),
    ("CAF", 21.0, 7.0),
    ("CAN", -95.0, 60.0),
    ("CHE", 8.0, 47.0),
    ("CHL", -71.0, -30.0),
    ("CHN", 105.0, 35.0),
    ("CIV", -5.0, 8.0),
    ("CMR", 12.0, 6.0),
    ("COD", 25.0, 0.0),
    ("COG", 15.0, -1.0),
    ("COL", -72.0, 4.0),
    ("CRI", -84.0, 10.0),
    ("CUB", -77.5, 21.5),
    ("DEU", 9.0, 51.0),
    ("DJI", 43.0, 11.5),
    ("DOM", -70.66, 19.0),
    ("DZA", 3.0, 28.0),
    ("ECU", -77.5, -2.0),
    ("EGY", 30.0, 27.0),
    ("ERI", 39.0, 15.0),
    ("ESP", -4.0, 40.0),
    ("ETH", 38.0, 8.0),
    ("FRA", 2.0, 46.0),
    ("GAB", 11.75, -1.0),
    ("GBR", -2.0, 54.0),
    ("GEO", 43.5, 42.0),
    ("GHA", -2.0, 8.0),
    ("GIN", -10.0, 11.0),
    ("GMB", -15.5, 13.47),
    ("GNB", -15.0, 12.0),
    ("GRC", 22.0, 39.0),
    ("GTM", -90.25, 15.5),
    ("GUY", -59.0, 5.0),
    ("HND", -86.5, 15.0),
    ("HTI", -72.42, 19.0),
    ("IDN", 120.0, -5.0),
    ("IND", 77.0, 20.0),
    ("IRN", 53.0, 32.0),
    ("IRQ", 44.0, 33.0),
    ("ITA", 12.83, 42.83),
    ("JAM", -77.5, 18.25),
    ("JOR", 36.0, 31.0),
    ("JPN", 138.0, 36.0),
    ("KAZ", 68.0, 48.0),
    ("KEN", 38.0, 1.0),
    ("KGZ", 75.0, 41.0),
    ("KHM", 105.0, 13.0),
    ("LAO", 105.0, 18.0),
    ("LBN", 35.83, 33.83),
    ("LBR", -9.5, 6.5),
    ("LBY", 17.0, 25.0),
    ("LKA", 81.0, 7.0),
    ("LSO", 28.5, -29.5),
    ("MAR", -5.0, 32.0),
    ("MDG", 47.0, -20.0),
    ("MEX", -102.0, 23.0),
    ("MLI", -4.0, 17.0),
    ("MMR", 98.0, 22.0),
    ("MNG", 105.0, 46.0),
    ("MOZ", 35.0, -18.25),
    ("MRT", -12.0, 20.0),
    ("MWI", 34.0, -13.5),
    ("MYS", 112.5, 2.5),
    ("NAM", 17.0, -22.0),
    ("NER", 8.0, 16.0),
    ("NGA", 8.0, 10.0),
    ("NIC", -85.0, 13.0),
    ("NPL", 84.0, 28.0),
    ("PAK", 70.0, 30.0),
    ("PAN", -80.0, 9.0),
    ("PER", -76.0, -10.0),
    ("PHL", 122.0, 13.0),
    ("PNG", 147.0, -6.0),
    ("PRK", 127.0, 40.0),
    ("PRY", -58.0, -23.0),
    ("PSE", 35.25, 32.0),
    ("RUS", 100.0, 60.0),
    ("RWA", 30.0, -2.0),
    ("SAU", 45.0, 25.0),
    ("SDN", 30.0, 15.0),
    ("SEN", -14.0, 14.0),
    ("SLE", -11.5, 8.5),
    ("SLV", -88.91, 13.83),
    ("SOM", 49.0, 10.0),
    ("SSD", 30.0, 8.0),
    ("SWZ", 31.5, -26.5),
    ("SYR", 38.0, 35.0),
    ("TCD", 19.0, 15.0),
    ("TGO", 1.16, 8.0),
    ("THA", 100.0, 15.0),
    ("TJK", 71.0, 39.0),
    ("TKM", 60.0, 40.0),
    ("TLS", 125.5, -8.83),
    ("TUN", 9.0, 34.0),
    ("TUR", 35.0, 39.0),
    ("TZA", 35.0, -6.0),
    ("UGA", 32.0, 1.0),
    ("UKR", 32.0, 49.0),
    ("URY", -56.0, -33.0),
    ("USA", -97.0, 38.0),
    ("UZB", 64.0, 41.0),
    ("VEN", -66.0, 8.0),
    ("VNM", 106.0, 16.0),
    ("YEM", 48.0, 15.0),
    ("ZAF", 24.0, -29.0),
    ("ZMB", 30.0, -15.0),
    ("ZWE", 30.0, -20.0),
];

/// Immutable ISO3 -> coordinate lookup, constructed explicitly and passed
/// into the normalizer (no module-level mutable state).
#[derive(Debug, Clone)]
pub struct CoordinateIndex {
    entries: AHashMap<String, LngLat>,
}

impl CoordinateIndex {
    /// The built-in centroid table.
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN
                .iter()
                .map(|&(code, lng, lat)| (code.to_string(), LngLat::new(lng, lat))),
        )
    }

    /// Build an index from caller-supplied entries.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, LngLat)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Resolve a code; unmapped codes fall back to (0, 0).
    pub fn resolve(&self, iso3: &str) -> LngLat {
        self.entries.get(iso3).copied().unwrap_or_default()
    }

    pub fn contains(&self, iso3: &str) -> bool {
        self.entries.contains_key(iso3)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How country coordinates are resolved. One variant is configured per run
/// and applied consistently everywhere.
#[derive(Debug, Clone)]
pub enum CoordinateStrategy {
    /// Coordinates embedded at normalization time from an immutable index;
    /// the normalized set is sorted by display name.
    Static(CoordinateIndex),
    /// Records carry (0, 0); coordinates are resolved at selection time by
    /// the coordinator via geocoding. Source payload order is kept.
    Geocoded,
}
