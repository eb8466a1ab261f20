use crate::api::Client;
use crate::coords::CoordinateStrategy;
use crate::models::{Country, CountryListResponse, LngLat, format_population, parse_iso3};
use anyhow::Result;
use log::warn;

/// Projects raw country-list payloads into display-ready [`Country`] records.
///
/// Constructed with the coordinate strategy for the run; under the static
/// strategy coordinates are embedded here and the output is sorted by name,
/// under the geocoded strategy records keep (0, 0) and payload order.
#[derive(Debug, Clone)]
pub struct Normalizer {
    strategy: CoordinateStrategy,
}

impl Normalizer {
    pub fn new(strategy: CoordinateStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &CoordinateStrategy {
        &self.strategy
    }

    /// Fetch and normalize in one step.
    pub fn fetch_countries(&self, client: &Client) -> Result<Vec<Country>> {
        let raw = client.fetch_countries_raw()?;
        Ok(self.normalize(raw))
    }

    /// Pure projection of a raw payload into the uniform record set.
    ///
    /// Entries whose code fails ISO3 validation are skipped with a warning
    /// rather than poisoning the whole set.
    pub fn normalize(&self, raw: CountryListResponse) -> Vec<Country> {
        let mut out = Vec::with_capacity(raw.body.countries.len());
        for entry in raw.body.countries {
            let iso3 = match parse_iso3(&entry.country.iso3) {
                Ok(code) => code,
                Err(err) => {
                    warn!("skipping country entry {:?}: {err}", entry.country.name);
                    continue;
                }
            };
            let coordinates = match &self.strategy {
                CoordinateStrategy::Static(index) => index.resolve(&iso3),
                CoordinateStrategy::Geocoded => LngLat::default(),
            };
            let population = match entry.population.number {
                Some(n) => format_population(n),
                None => "N/A".to_string(),
            };
            out.push(Country {
                iso3,
                name: entry.country.name,
                coordinates,
                income_group: entry.income_group.level.unwrap_or_default(),
                population,
            });
        }
        if matches!(self.strategy, CoordinateStrategy::Static(_)) {
            // Case-insensitive stand-in for locale-aware collation.
            out.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        out
    }
}
