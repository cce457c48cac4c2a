use clap::{Args, Parser, Subcommand};

use fuelnear_core::{Coordinates, FuelType};
use fuelnear_resolver::{FilterSpec, StationsClient, DEFAULT_ENDPOINT};

const USER_AGENT: &str = concat!("fuelnear/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Parser)]
#[command(name = "fuelnear")]
#[command(about = "Find the nearest Spanish fuel stations from the MINETUR price feed")]
struct Cli {
    /// Feed endpoint; override for mirrors or testing.
    #[arg(long, env = "FUELNEAR_ENDPOINT", default_value = DEFAULT_ENDPOINT, global = true)]
    endpoint: String,

    /// HTTP timeout in seconds.
    #[arg(long, default_value_t = 30, global = true)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve the nearest stations to a point, optionally filtered.
    Nearest(NearestArgs),
    /// List the autonomous communities present in the current snapshot.
    Regions,
    /// List the provinces present in the current snapshot.
    Provinces,
}

#[derive(Debug, Args)]
struct NearestArgs {
    /// Query latitude in decimal degrees.
    #[arg(long)]
    lat: f64,

    /// Query longitude in decimal degrees.
    #[arg(long)]
    lng: f64,

    /// Maximum number of stations to return.
    #[arg(long, default_value_t = 20)]
    limit: usize,

    /// Brand substring, case-insensitive (e.g. "repsol").
    #[arg(long)]
    brand: Option<String>,

    /// Required fuel, e.g. diesel-a, gasoline-95-e5, hydrogen.
    #[arg(long)]
    fuel: Option<FuelType>,

    /// Autonomous community code (two digits, e.g. 13 for Madrid).
    #[arg(long)]
    region: Option<String>,

    /// Province code (two digits, e.g. 28 for Madrid).
    #[arg(long)]
    province: Option<String>,

    /// Publication-date prefix, dd/MM/yyyy (gates the whole snapshot).
    #[arg(long)]
    date: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    tracing::debug!(endpoint = %cli.endpoint, "using feed endpoint");
    let client =
        StationsClient::new(cli.timeout_secs, USER_AGENT)?.with_endpoint(cli.endpoint.clone());

    match cli.command {
        Commands::Nearest(args) => nearest(&client, args).await,
        Commands::Regions => regions(&client).await,
        Commands::Provinces => provinces(&client).await,
    }
}

async fn nearest(client: &StationsClient, args: NearestArgs) -> anyhow::Result<()> {
    let center = Coordinates::new(args.lat, args.lng);
    let filter = FilterSpec {
        brand: args.brand,
        fuel_type: args.fuel,
        region_code: args.region,
        province_code: args.province,
        date_prefix: args.date,
    };

    let stations = client.resolve(center, args.limit, &filter).await?;
    tracing::info!(
        matched = stations.len(),
        limit = args.limit,
        "resolved nearest stations"
    );

    if stations.is_empty() {
        if filter.is_empty() {
            println!("no stations found; try moving the query point");
        } else {
            println!("no stations matched; try broadening the filters or moving the query point");
        }
        return Ok(());
    }

    for station in &stations {
        let price = args
            .fuel
            .and_then(|fuel| station.price(fuel))
            .map_or_else(String::new, |p| format!("  {p:.3} €"));
        println!(
            "{:>7.2} km  {:<24} {} ({}){}",
            station.distance_km, station.name, station.address, station.municipality, price
        );
    }
    Ok(())
}

async fn regions(client: &StationsClient) -> anyhow::Result<()> {
    for region in client.regions().await? {
        println!("{}  {}", region.code, region.name);
    }
    Ok(())
}

async fn provinces(client: &StationsClient) -> anyhow::Result<()> {
    for province in client.provinces().await? {
        println!(
            "{}  {:<28} (CCAA {})",
            province.code, province.name, province.region_code
        );
    }
    Ok(())
}
