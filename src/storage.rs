use crate::models::Country;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

// String cells starting with a formula sigil get a leading single quote so
// spreadsheet tools treat them as text.
fn sanitize_cell(s: &str) -> String {
    match s.chars().next() {
        Some('=') | Some('+') | Some('-') | Some('@') => format!("'{s}"),
        _ => s.to_string(),
    }
}

/// Save the normalized country set as CSV with header.
pub fn save_csv<P: AsRef<Path>>(countries: &[Country], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("iso3", "name", "lng", "lat", "income_group", "population"))?;
    for c in countries {
        wtr.serialize((
            sanitize_cell(&c.iso3),
            sanitize_cell(&c.name),
            c.coordinates.lng,
            c.coordinates.lat,
            sanitize_cell(&c.income_group),
            sanitize_cell(&c.population),
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save the normalized country set as a pretty JSON array.
pub fn save_json<P: AsRef<Path>>(countries: &[Country], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(countries)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Country, LngLat};
    use tempfile::tempdir;

    fn aruba() -> Country {
        Country {
            iso3: "ABW".into(),
            name: "Aruba".into(),
            coordinates: LngLat::new(-69.97, 12.52),
            income_group: "High".into(),
            population: "105.8K".into(),
        }
    }

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let countries = vec![aruba()];
        save_csv(&countries, &csvp).unwrap();
        save_json(&countries, &jsonp).unwrap();
        assert!(csvp.exists());
        assert!(jsonp.exists());
    }

    #[test]
    fn formula_sigils_are_quoted() {
        assert_eq!(sanitize_cell("=HYPERLINK(\"x\")"), "'=HYPERLINK(\"x\")");
        assert_eq!(sanitize_cell("+SUM(A1)"), "'+SUM(A1)");
        assert_eq!(sanitize_cell("@foo"), "'@foo");
        assert_eq!(sanitize_cell("Aruba"), "Aruba");
    }
}
