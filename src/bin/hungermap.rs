use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use hungermap_rs::{
    Client, CoordinateIndex, CoordinateStrategy, Indicator, LngLat, MapView, MetricPanel,
    Normalizer, SelectionCoordinator, SelectionOutcome, parse_iso3, storage,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hungermap",
    version,
    about = "Fetch, normalize & explore WFP HungerMap country indicators"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the normalized country list (and optionally save it).
    Countries(CountriesArgs),
    /// Show the info-panel view of one country.
    Info(InfoArgs),
    /// Look up the food-consumption (FCS) metric for one country.
    Fcs(FcsArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct CountriesArgs {
    /// Save results to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(Args, Debug)]
struct InfoArgs {
    /// ISO3 country code (e.g., ABW)
    #[arg(short, long)]
    country: String,
    /// Resolve coordinates by geocoding the country name instead of the
    /// built-in table (requires MAPBOX_ACCESS_TOKEN).
    #[arg(long, default_value_t = false)]
    geocode: bool,
}

#[derive(Args, Debug)]
struct FcsArgs {
    /// ISO3 country code (e.g., AFG)
    #[arg(short, long)]
    country: String,
}

/// Viewport sink for terminal runs: prints where a real map would fly.
struct PrintedMap;

impl MapView for PrintedMap {
    fn initialize(&mut self, center: LngLat, zoom: f64) {
        println!("viewport @ ({:.2}, {:.2}) zoom {zoom}", center.lng, center.lat);
    }

    fn fly_to(&mut self, center: LngLat, zoom: f64, _essential: bool) {
        println!("viewport -> ({:.2}, {:.2}) zoom {zoom}", center.lng, center.lat);
    }

    fn dispose(&mut self) {}
}

fn default_normalizer() -> Normalizer {
    Normalizer::new(CoordinateStrategy::Static(CoordinateIndex::builtin()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Countries(args) => cmd_countries(args),
        Command::Info(args) => cmd_info(args),
        Command::Fcs(args) => cmd_fcs(args),
    }
}

fn cmd_countries(args: CountriesArgs) -> Result<()> {
    let client = Client::default();
    let countries = default_normalizer().fetch_countries(&client)?;

    for c in &countries {
        println!("{:<42} {:>8}  {}", c.dropdown_label(), c.population, c.income_group);
    }

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&countries, path)?,
            "json" => storage::save_json(&countries, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} countries to {}", countries.len(), path.display());
    }

    Ok(())
}

fn cmd_info(args: InfoArgs) -> Result<()> {
    let code = parse_iso3(&args.country)?;
    let (client, strategy) = if args.geocode {
        (Client::from_env(), CoordinateStrategy::Geocoded)
    } else {
        (
            Client::default(),
            CoordinateStrategy::Static(CoordinateIndex::builtin()),
        )
    };
    let normalizer = Normalizer::new(strategy.clone());
    let mut coordinator = SelectionCoordinator::new(strategy);
    coordinator.set_countries(normalizer.fetch_countries(&client)?);

    let mut map = PrintedMap;
    match coordinator.select(&code, &client, &mut map)? {
        SelectionOutcome::Selected => {
            if let Some(c) = coordinator.selected() {
                println!("{}", c.name);
                println!("Population: {}", c.population);
                println!("Income Group: {}", c.income_group);
            }
            Ok(())
        }
        SelectionOutcome::UnknownCode => anyhow::bail!("unknown country code: {code}"),
        SelectionOutcome::NoCoordinates => anyhow::bail!("no coordinates found for {code}"),
        // Selections are synchronous here, so nothing can supersede them.
        SelectionOutcome::Stale => Ok(()),
    }
}

fn cmd_fcs(args: FcsArgs) -> Result<()> {
    let code = parse_iso3(&args.country)?;
    let client = Client::default();
    let mut panel = MetricPanel::new();
    panel.trigger(Indicator::Fcs, &code, &client);
    if let Some(info) = panel.info() {
        println!("{info}");
    }
    Ok(())
}
