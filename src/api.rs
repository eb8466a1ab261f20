/// Synchronous client for the **WFP HungerMap API** plus the optional
/// forward-geocoding endpoint used by the geocoded coordinate strategy.
///
/// ### Notes
/// - Each screen interaction maps to at most one request here; there is no
///   retry, pagination, or partial-result handling on these endpoints.
/// - A non-success status fails the call with a single generic error.
/// - Network timeouts use a sane default (30s) and can be adjusted by editing
///   the client builder.
///
/// Typical usage:
/// ```no_run
/// # use hungermap_rs::Client;
/// let client = Client::default();
/// let raw = client.fetch_countries_raw()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
use crate::models::{CountryListResponse, FoodSecurityResponse, GeocodeResponse, LngLat};
use anyhow::{Context, Result, bail};
use log::debug;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    pub geocode_base_url: String,
    geocode_token: Option<String>,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("hungermap_rs/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "https://api.hungermapdata.org".into(),
            geocode_base_url: "https://api.mapbox.com".into(),
            geocode_token: None,
            http,
        }
    }
}

// Allow -, _, . unescaped; everything else in a country name gets encoded
// before it lands in a geocoding path segment.
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

impl Client {
    /// Client with the geocoding access token taken from the
    /// `MAPBOX_ACCESS_TOKEN` environment variable, when set.
    pub fn from_env() -> Self {
        let mut client = Self::default();
        client.geocode_token = std::env::var("MAPBOX_ACCESS_TOKEN").ok();
        client
    }

    pub fn with_geocode_token(mut self, token: impl Into<String>) -> Self {
        self.geocode_token = Some(token.into());
        self
    }

    /// Fetch the raw country-list payload.
    ///
    /// ### Errors
    /// - Network/HTTP error
    /// - Non-success status (no retry, no partial result)
    /// - JSON decoding error
    pub fn fetch_countries_raw(&self) -> Result<CountryListResponse> {
        let url = format!("{}/v2/info/country", self.base_url);
        debug!("GET {url}");
        let resp = self
            .http
            .get(&url)
            .send()
            .with_context(|| format!("GET {url}"))?;
        if !resp.status().is_success() {
            bail!("failed to fetch countries (HTTP {})", resp.status());
        }
        resp.json().context("decode country list json")
    }

    /// Fetch food-security metrics for one country, scoped by ISO3 code.
    pub fn fetch_food_security(&self, iso3: &str) -> Result<FoodSecurityResponse> {
        let url = format!("{}/v1/foodsecurity/country/{}", self.base_url, iso3);
        debug!("GET {url}");
        let resp = self
            .http
            .get(&url)
            .send()
            .with_context(|| format!("GET {url}"))?;
        if !resp.status().is_success() {
            bail!("failed to fetch food security data (HTTP {})", resp.status());
        }
        resp.json().context("decode food security json")
    }

    /// Forward-geocode a country name. Returns `Ok(None)` when the service
    /// answers with zero features.
    ///
    /// Requires a geocoding access token (see [`Client::from_env`]).
    pub fn geocode_country(&self, name: &str) -> Result<Option<LngLat>> {
        let Some(token) = self.geocode_token.as_deref() else {
            bail!("geocoding access token not configured (set MAPBOX_ACCESS_TOKEN)");
        };
        let encoded = percent_encoding::utf8_percent_encode(name.trim(), SAFE).to_string();
        // Token deliberately kept out of the log line.
        debug!(
            "GET {}/geocoding/v5/mapbox.places/{}.json",
            self.geocode_base_url, encoded
        );
        let url = format!(
            "{}/geocoding/v5/mapbox.places/{}.json?types=country&limit=1&access_token={}",
            self.geocode_base_url, encoded, token
        );
        let resp = self
            .http
            .get(&url)
            .send()
            .with_context(|| format!("geocode {name:?}"))?;
        if !resp.status().is_success() {
            bail!("geocoding failed (HTTP {})", resp.status());
        }
        let decoded: GeocodeResponse = resp.json().context("decode geocode json")?;
        Ok(decoded.first_coordinates())
    }
}

/// Source of per-country food-security metrics. The metric panel talks to
/// this seam so tests can substitute canned payloads and failures.
pub trait FoodSecuritySource {
    fn food_security(&self, iso3: &str) -> Result<FoodSecurityResponse>;
}

impl FoodSecuritySource for Client {
    fn food_security(&self, iso3: &str) -> Result<FoodSecurityResponse> {
        self.fetch_food_security(iso3)
    }
}

/// Forward geocoder seam used by the selection coordinator under the
/// geocoded coordinate strategy.
pub trait Geocoder {
    fn geocode_country(&self, name: &str) -> Result<Option<LngLat>>;
}

impl Geocoder for Client {
    fn geocode_country(&self, name: &str) -> Result<Option<LngLat>> {
        Client::geocode_country(self, name)
    }
}
