use hungermap_rs::models::{CountryListResponse, LngLat, format_population};
use hungermap_rs::{CoordinateIndex, CoordinateStrategy, Normalizer};

fn payload(entries: &[(&str, &str, Option<f64>, Option<&str>)]) -> CountryListResponse {
    let countries: Vec<serde_json::Value> = entries
        .iter()
        .map(|(iso3, name, population, income)| {
            serde_json::json!({
                "country": { "iso3": iso3, "name": name },
                "income_group": { "level": income },
                "population": { "number": population }
            })
        })
        .collect();
    serde_json::from_value(serde_json::json!({ "body": { "countries": countries } })).unwrap()
}

fn static_normalizer() -> Normalizer {
    Normalizer::new(CoordinateStrategy::Static(CoordinateIndex::builtin()))
}

#[test]
fn population_formatting_thresholds() {
    assert_eq!(format_population(105_845.0), "105.8K");
    assert_eq!(format_population(2_400_000.0), "2.4M");
    assert_eq!(format_population(1_000_000.0), "1.0M");
    assert_eq!(format_population(999_999.0), "1000.0K");
    // Sub-1000 values keep the historical thousands rendering.
    assert_eq!(format_population(500.0), "0.5K");
}

#[test]
fn aruba_normalizes_to_display_record() {
    let raw = payload(&[("ABW", "Aruba", Some(105_845.0), Some("High"))]);
    let countries = static_normalizer().normalize(raw);

    assert_eq!(countries.len(), 1);
    let aruba = &countries[0];
    assert_eq!(aruba.iso3, "ABW");
    assert_eq!(aruba.population, "105.8K");
    assert_eq!(aruba.income_group, "High");
    assert_eq!(aruba.dropdown_label(), "Aruba (ABW)");
    assert_eq!(aruba.coordinates, LngLat::new(-69.97, 12.52));
}

#[test]
fn static_strategy_sorts_by_display_name() {
    let raw = payload(&[
        ("KEN", "Kenya", Some(53_771_296.0), Some("Low")),
        ("ABW", "Aruba", Some(105_845.0), Some("High")),
        ("TCD", "chad", Some(16_425_864.0), Some("Low")),
    ]);
    let names: Vec<String> = static_normalizer()
        .normalize(raw)
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Aruba", "chad", "Kenya"]);
}

#[test]
fn unmapped_code_defaults_to_origin() {
    let raw = payload(&[("ZZZ", "Atlantis", Some(1_000.0), Some("High"))]);
    let countries = static_normalizer().normalize(raw);
    assert_eq!(countries[0].coordinates, LngLat::default());
    assert!(countries[0].coordinates.is_unresolved());
}

#[test]
fn geocoded_strategy_keeps_payload_order_and_placeholder_coords() {
    let raw = payload(&[
        ("KEN", "Kenya", Some(53_771_296.0), Some("Low")),
        ("ABW", "Aruba", Some(105_845.0), Some("High")),
    ]);
    let normalizer = Normalizer::new(CoordinateStrategy::Geocoded);
    assert!(matches!(normalizer.strategy(), CoordinateStrategy::Geocoded));
    let countries = normalizer.normalize(raw);

    let names: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Kenya", "Aruba"]);
    assert!(countries.iter().all(|c| c.coordinates.is_unresolved()));
}

#[test]
fn malformed_codes_are_skipped() {
    let raw = payload(&[
        ("AB", "Too Short", Some(1.0), None),
        ("AB1", "Not Letters", Some(1.0), None),
        ("abw", "Aruba", Some(105_845.0), Some("High")),
    ]);
    let countries = static_normalizer().normalize(raw);
    assert_eq!(countries.len(), 1);
    // Codes are stored uppercase regardless of upstream casing.
    assert_eq!(countries[0].iso3, "ABW");
}

#[test]
fn missing_population_renders_na() {
    let raw = payload(&[("SSD", "South Sudan", None, None)]);
    let countries = static_normalizer().normalize(raw);
    assert_eq!(countries[0].population, "N/A");
    assert_eq!(countries[0].income_group, "");
}

#[test]
fn custom_coordinate_index_overrides_builtin() {
    let index = CoordinateIndex::from_entries([("ABW".to_string(), LngLat::new(1.0, 2.0))]);
    assert!(index.contains("ABW"));
    assert_eq!(index.len(), 1);

    let raw = payload(&[("ABW", "Aruba", Some(105_845.0), Some("High"))]);
    let countries = Normalizer::new(CoordinateStrategy::Static(index)).normalize(raw);
    assert_eq!(countries[0].coordinates, LngLat::new(1.0, 2.0));
}
