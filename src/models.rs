use serde::{Deserialize, Serialize};

/// A longitude/latitude pair, in that order (the order the map collaborator
/// consumes). `(0, 0)` is the "unresolved" placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Whether this is still the unresolved placeholder.
    pub fn is_unresolved(&self) -> bool {
        self.lng == 0.0 && self.lat == 0.0
    }
}

/// Top-level country-list payload: `{ "body": { "countries": [ ... ] } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryListResponse {
    pub body: CountryListBody,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryListBody {
    #[serde(default)]
    pub countries: Vec<CountryEntry>,
}

/// Raw per-country entry as the API nests it.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryEntry {
    pub country: CountryIdent,
    #[serde(default)]
    pub income_group: IncomeGroup,
    #[serde(default)]
    pub population: Population,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryIdent {
    pub iso3: String,
    pub name: String,
}

/// The API serializes `level` as null for unclassified countries; accept it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncomeGroup {
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Population {
    pub number: Option<f64>,
}

/// Food-security payload for one country. Every branch on the path to the
/// FCS figure is optional upstream, so missing branches decode instead of
/// failing the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodSecurityResponse {
    #[serde(default)]
    pub body: FoodSecurityBody,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodSecurityBody {
    #[serde(default)]
    pub metrics: FoodSecurityMetrics,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodSecurityMetrics {
    #[serde(default)]
    pub fcs: Option<FcsMetric>,
}

/// Food Consumption Score block, surfaced verbatim from the source API.
#[derive(Debug, Clone, Deserialize)]
pub struct FcsMetric {
    pub people: Option<f64>,
    #[serde(default)]
    pub prevalence: Option<f64>,
}

impl FoodSecurityResponse {
    /// Nested people-affected figure, when the upstream reported one.
    pub fn fcs_people(&self) -> Option<f64> {
        self.body.metrics.fcs.as_ref().and_then(|m| m.people)
    }
}

/// Forward-geocoding payload: a `features` array whose first element's
/// geometry holds a `[lng, lat]` pair.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub features: Vec<GeocodeFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeFeature {
    pub geometry: GeocodeGeometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeGeometry {
    pub coordinates: [f64; 2],
}

impl GeocodeResponse {
    pub fn first_coordinates(&self) -> Option<LngLat> {
        self.features
            .first()
            .map(|f| LngLat::new(f.geometry.coordinates[0], f.geometry.coordinates[1]))
    }
}

/// Display-ready country record produced by the normalizer.
///
/// `population` is baked in at normalization time and never regenerated;
/// there is no parse-back. The full set is replaced wholesale on refetch,
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-3 code, uppercase, unique within a fetched set.
    pub iso3: String,
    pub name: String,
    pub coordinates: LngLat,
    pub income_group: String,
    /// Pre-formatted display string, e.g. "1.2M" or "105.8K".
    pub population: String,
}

impl Country {
    /// Label used by selection UIs, e.g. `"Aruba (ABW)"`.
    pub fn dropdown_label(&self) -> String {
        format!("{} ({})", self.name, self.iso3)
    }
}

/// Error returned when a string fails ISO3 validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ISO3 country code: {0:?}")]
pub struct InvalidCode(pub String);

/// Validate and normalize an ISO3 code: exactly three ASCII letters, uppercased.
pub fn parse_iso3(s: &str) -> Result<String, InvalidCode> {
    let t = s.trim();
    if t.len() == 3 && t.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(t.to_ascii_uppercase())
    } else {
        Err(InvalidCode(s.to_string()))
    }
}

/// Format a population figure for display: values of a million and above in
/// millions to one decimal, everything else in thousands to one decimal.
///
/// Values under 1,000 still render in thousands (500 -> "0.5K"); kept as-is
/// for compatibility with historical output.
pub fn format_population(number: f64) -> String {
    if number >= 1_000_000.0 {
        format!("{:.1}M", number / 1_000_000.0)
    } else {
        format!("{:.1}K", number / 1_000.0)
    }
}
