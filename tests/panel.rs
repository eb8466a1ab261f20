use anyhow::{Result, anyhow};
use hungermap_rs::models::FoodSecurityResponse;
use hungermap_rs::panel::{FCS_FETCH_FAILED, NO_FCS_DATA};
use hungermap_rs::{FoodSecuritySource, Indicator, MetricPanel, format_metric_value};

struct StubSource(serde_json::Value);

impl FoodSecuritySource for StubSource {
    fn food_security(&self, _iso3: &str) -> Result<FoodSecurityResponse> {
        Ok(serde_json::from_value(self.0.clone()).unwrap())
    }
}

struct FailingSource;

impl FoodSecuritySource for FailingSource {
    fn food_security(&self, _iso3: &str) -> Result<FoodSecurityResponse> {
        Err(anyhow!("failed to fetch food security data (HTTP 503)"))
    }
}

fn with_people(people: f64) -> StubSource {
    StubSource(serde_json::json!({
        "body": { "metrics": { "fcs": { "people": people } } }
    }))
}

#[test]
fn metric_value_formatting_differs_from_population_rule() {
    assert_eq!(format_metric_value(2_400_000.0), "2.4M");
    assert_eq!(format_metric_value(1_000_000.0), "1.0M");
    // Below a million the figure stays unabbreviated.
    assert_eq!(format_metric_value(105_845.0), "105845");
    assert_eq!(format_metric_value(500.0), "500");
}

#[test]
fn fcs_success_formats_millions() {
    let mut panel = MetricPanel::new();
    panel.trigger(Indicator::Fcs, "AFG", &with_people(2_400_000.0));

    assert_eq!(
        panel.info(),
        Some("2.4M people with insufficient food consumption")
    );
    assert!(!panel.is_loading());
}

#[test]
fn fcs_sub_million_stays_unabbreviated() {
    let mut panel = MetricPanel::new();
    panel.trigger(Indicator::Fcs, "ABW", &with_people(105_845.0));

    assert_eq!(
        panel.info(),
        Some("105845 people with insufficient food consumption")
    );
}

#[test]
fn missing_people_figure_shows_no_data_verbatim() {
    let mut panel = MetricPanel::new();
    let source = StubSource(serde_json::json!({ "body": { "metrics": {} } }));
    panel.trigger(Indicator::Fcs, "AFG", &source);

    assert_eq!(panel.info(), Some("No data available for food consumption."));
    assert_eq!(panel.info(), Some(NO_FCS_DATA));
    assert!(!panel.is_loading());
}

#[test]
fn fetch_error_shows_failure_message_and_clears_busy_flag() {
    let mut panel = MetricPanel::new();
    panel.trigger(Indicator::Fcs, "AFG", &FailingSource);

    assert_eq!(panel.info(), Some(FCS_FETCH_FAILED));
    assert!(!panel.is_loading());
}

#[test]
fn busy_flag_tracks_outstanding_fetch() {
    let mut panel = MetricPanel::new();
    assert!(!panel.is_loading());

    panel.begin_fcs();
    assert!(panel.is_loading());

    panel.finish_fcs(Err(anyhow!("timed out")));
    assert!(!panel.is_loading());
}

#[test]
fn placeholder_indicators_resolve_without_network() {
    let mut panel = MetricPanel::new();

    panel.show_placeholder(Indicator::Ipc);
    assert_eq!(panel.info(), Some("Information from IPC API here"));

    panel.show_placeholder(Indicator::Climate);
    assert_eq!(panel.info(), Some("Information from Climate Data API here"));

    panel.show_placeholder(Indicator::Hazards);
    assert_eq!(panel.info(), Some("Information from Hazards Data API here"));

    // FCS has no canned payload; the last result stays put.
    panel.show_placeholder(Indicator::Fcs);
    assert_eq!(panel.info(), Some("Information from Hazards Data API here"));
}

#[test]
fn clear_resets_displayed_result() {
    let mut panel = MetricPanel::new();
    panel.show_placeholder(Indicator::Ipc);
    panel.clear();
    assert_eq!(panel.info(), None);
}
