//! Indicator toolbar state: one last-result string plus a busy flag.

use crate::api::FoodSecuritySource;
use crate::models::FoodSecurityResponse;
use anyhow::Result;
use log::warn;

/// Indicator categories exposed by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Ipc,
    Fcs,
    Climate,
    Hazards,
}

impl Indicator {
    pub const ALL: [Indicator; 4] = [
        Indicator::Ipc,
        Indicator::Fcs,
        Indicator::Climate,
        Indicator::Hazards,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Indicator::Ipc => "IPC",
            Indicator::Fcs => "FCS",
            Indicator::Climate => "Climate",
            Indicator::Hazards => "Hazards",
        }
    }

    /// Canned payload for indicators without a live endpoint; `None` for
    /// FCS, which performs a real fetch.
    pub fn static_info(self) -> Option<&'static str> {
        match self {
            Indicator::Ipc => Some("Information from IPC API here"),
            Indicator::Climate => Some("Information from Climate Data API here"),
            Indicator::Hazards => Some("Information from Hazards Data API here"),
            Indicator::Fcs => None,
        }
    }
}

/// Shown verbatim when the payload lacks the people-affected figure.
pub const NO_FCS_DATA: &str = "No data available for food consumption.";
/// Shown when the FCS fetch itself fails.
pub const FCS_FETCH_FAILED: &str = "Error fetching food consumption data";

/// Format a metric figure for display: a million and above in millions to
/// one decimal, below that the plain integer string.
///
/// Deliberately not the same rule as `format_population`; the two surfaces
/// have always formatted differently and both are kept verbatim.
pub fn format_metric_value(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else {
        format!("{}", value as i64)
    }
}

/// State behind the indicator toolbar.
#[derive(Debug, Default)]
pub struct MetricPanel {
    info: Option<String>,
    loading: bool,
}

impl MetricPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last displayed result, if any.
    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    /// Busy indicator for the loading-spinner affordance.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Clear the displayed result (panel dismissed or selection changed).
    pub fn clear(&mut self) {
        self.info = None;
    }

    /// Show the canned payload for a placeholder indicator. FCS has a live
    /// endpoint and is not handled here.
    pub fn show_placeholder(&mut self, indicator: Indicator) {
        if let Some(text) = indicator.static_info() {
            self.info = Some(text.to_string());
        }
    }

    /// Mark the live FCS fetch as outstanding.
    pub fn begin_fcs(&mut self) {
        self.loading = true;
    }

    /// Fold the FCS fetch result into a display string and clear the busy
    /// flag. Failures become fixed fallback messages, never panics.
    pub fn finish_fcs(&mut self, result: Result<FoodSecurityResponse>) {
        self.loading = false;
        let message = match result {
            Ok(payload) => match payload.fcs_people() {
                Some(people) => format!(
                    "{} people with insufficient food consumption",
                    format_metric_value(people)
                ),
                None => NO_FCS_DATA.to_string(),
            },
            Err(err) => {
                warn!("fcs fetch failed: {err:#}");
                FCS_FETCH_FAILED.to_string()
            }
        };
        self.info = Some(message);
    }

    /// Handle a toolbar press synchronously: placeholders resolve locally,
    /// FCS fetches through the given source.
    pub fn trigger(&mut self, indicator: Indicator, iso3: &str, source: &dyn FoodSecuritySource) {
        match indicator {
            Indicator::Fcs => {
                self.begin_fcs();
                let result = source.food_security(iso3);
                self.finish_fcs(result);
            }
            other => self.show_placeholder(other),
        }
    }
}
