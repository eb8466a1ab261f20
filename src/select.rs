//! Selection state shared between the dropdown, the map viewport, and the
//! info panel.
//!
//! The coordinator owns the country set and the current selection; the map
//! is an external collaborator reached through [`MapView`], passed in per
//! call rather than owned. Under the geocoded coordinate strategy a
//! selection is a two-phase operation and carries a request sequence number
//! so a response that arrives after a newer selection is discarded instead
//! of overwriting it.

use crate::api::Geocoder;
use crate::coords::CoordinateStrategy;
use crate::models::{Country, LngLat};
use anyhow::Result;
use log::debug;

/// Zoom applied when the viewport is centered on a selected country.
pub const SELECT_ZOOM: f64 = 5.0;

/// Map collaborator contract: this crate only drives the viewport.
pub trait MapView {
    fn initialize(&mut self, center: LngLat, zoom: f64);
    /// Animate the viewport center. `essential` transitions are expected to
    /// run even under reduced-motion settings.
    fn fly_to(&mut self, center: LngLat, zoom: f64, essential: bool);
    fn dispose(&mut self);
}

/// Outcome of a selection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Selection committed; the viewport was re-centered.
    Selected,
    /// Code not present in the held set; prior selection kept, no side effects.
    UnknownCode,
    /// Geocoding returned zero results; prior selection kept.
    NoCoordinates,
    /// A newer selection superseded this one while it was in flight.
    Stale,
}

/// Ticket for an in-flight geocoded selection.
#[derive(Debug, Clone)]
pub struct PendingSelection {
    seq: u64,
    country: Country,
}

impl PendingSelection {
    pub fn country(&self) -> &Country {
        &self.country
    }
}

pub struct SelectionCoordinator {
    countries: Vec<Country>,
    selected: Option<Country>,
    strategy: CoordinateStrategy,
    seq: u64,
}

impl SelectionCoordinator {
    pub fn new(strategy: CoordinateStrategy) -> Self {
        Self {
            countries: Vec::new(),
            selected: None,
            strategy,
            seq: 0,
        }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn selected(&self) -> Option<&Country> {
        self.selected.as_ref()
    }

    pub fn strategy(&self) -> &CoordinateStrategy {
        &self.strategy
    }

    /// Replace the held set wholesale. A selection whose code no longer
    /// resolves is dropped.
    pub fn set_countries(&mut self, countries: Vec<Country>) {
        self.countries = countries;
        if let Some(sel) = &self.selected
            && !self.countries.iter().any(|c| c.iso3 == sel.iso3)
        {
            self.selected = None;
        }
    }

    /// Clear the selection back to the absent state.
    pub fn reset(&mut self) {
        self.selected = None;
    }

    // Linear scan; sets are in the low hundreds.
    fn find(&self, iso3: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.iso3 == iso3)
    }

    /// Handle a selection event carrying a country code, dispatching on the
    /// configured strategy. The geocoder is only consulted under the
    /// geocoded strategy.
    pub fn select(
        &mut self,
        iso3: &str,
        geocoder: &dyn Geocoder,
        map: &mut dyn MapView,
    ) -> Result<SelectionOutcome> {
        match self.strategy {
            CoordinateStrategy::Static(_) => Ok(self.select_static(iso3, map)),
            CoordinateStrategy::Geocoded => {
                let Some(pending) = self.begin_select(iso3) else {
                    return Ok(SelectionOutcome::UnknownCode);
                };
                let coords = geocoder.geocode_country(&pending.country().name)?;
                Ok(self.complete_select(pending, coords, map))
            }
        }
    }

    /// Static strategy: commit with the record's embedded coordinates.
    /// Infallible; an unknown code is a no-op.
    pub fn select_static(&mut self, iso3: &str, map: &mut dyn MapView) -> SelectionOutcome {
        let Some(country) = self.find(iso3).cloned() else {
            return SelectionOutcome::UnknownCode;
        };
        self.commit(country, None, map);
        SelectionOutcome::Selected
    }

    /// First phase of a geocoded selection. Bumps the request sequence, so
    /// any earlier ticket still in flight becomes stale.
    pub fn begin_select(&mut self, iso3: &str) -> Option<PendingSelection> {
        let country = self.find(iso3).cloned()?;
        self.seq += 1;
        Some(PendingSelection {
            seq: self.seq,
            country,
        })
    }

    /// Second phase: commit the resolved coordinates unless the ticket was
    /// superseded or the geocoder came back empty.
    pub fn complete_select(
        &mut self,
        pending: PendingSelection,
        coordinates: Option<LngLat>,
        map: &mut dyn MapView,
    ) -> SelectionOutcome {
        if pending.seq != self.seq {
            debug!(
                "discarding stale selection response for {}",
                pending.country.iso3
            );
            return SelectionOutcome::Stale;
        }
        let Some(coords) = coordinates else {
            debug!(
                "no geocode result for {:?}; keeping prior selection",
                pending.country.name
            );
            return SelectionOutcome::NoCoordinates;
        };
        self.commit(pending.country, Some(coords), map);
        SelectionOutcome::Selected
    }

    fn commit(&mut self, mut country: Country, resolved: Option<LngLat>, map: &mut dyn MapView) {
        if let Some(coords) = resolved {
            country.coordinates = coords;
        }
        map.fly_to(country.coordinates, SELECT_ZOOM, true);
        self.selected = Some(country);
    }
}
