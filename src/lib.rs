//! hungermap-rs
//!
//! A lightweight Rust library for retrieving and normalizing WFP HungerMap
//! country indicators. Pairs with the `hungermap` CLI and the
//! `hungermap-gui` dashboard.
//!
//! ### Features
//! - Fetch the country list and project it into display-ready records
//! - Keep a dropdown, a map viewport, and an info panel in sync on selection
//! - On-demand food-security (FCS) metric lookups per country
//! - Save the normalized set as CSV or JSON
//!
//! ### Example
//! ```no_run
//! use hungermap_rs::{Client, CoordinateIndex, CoordinateStrategy, Normalizer};
//!
//! let client = Client::default();
//! let normalizer = Normalizer::new(CoordinateStrategy::Static(CoordinateIndex::builtin()));
//! let countries = normalizer.fetch_countries(&client)?;
//! hungermap_rs::storage::save_json(&countries, "countries.json")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod coords;
pub mod models;
pub mod normalize;
pub mod panel;
pub mod select;
pub mod storage;

pub use api::{Client, FoodSecuritySource, Geocoder};
pub use coords::{CoordinateIndex, CoordinateStrategy};
pub use models::{Country, InvalidCode, LngLat, format_population, parse_iso3};
pub use normalize::Normalizer;
pub use panel::{Indicator, MetricPanel, format_metric_value};
pub use select::{MapView, SELECT_ZOOM, SelectionCoordinator, SelectionOutcome};
