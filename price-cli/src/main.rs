use std::time::Duration;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use price_cli::app::{self, VehicleInput};
use price_core::{FuelType, SellerType, Transmission};
use price_http::{HttpPredictor, ServiceConfig};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Used-car price estimator.
///
/// Sends the given vehicle attributes to the configured prediction service
/// and prints the estimated selling price.
#[derive(Debug, Parser)]
struct Cli {
    /// Year of purchase.
    #[arg(long)]
    year: String,

    /// Kilometers driven.
    #[arg(long)]
    kms_driven: String,

    /// Fuel type: Petrol, Diesel or CNG.
    #[arg(long, value_parser = parse_fuel)]
    fuel: FuelType,

    /// Seller type: Dealer or Individual.
    #[arg(long, value_parser = parse_seller)]
    seller_type: SellerType,

    /// Transmission: Manual or Automatic.
    #[arg(long, value_parser = parse_transmission)]
    transmission: Transmission,

    /// Number of previous owners.
    #[arg(long)]
    owner: String,

    /// Brand name (e.g. `Maruti`).
    #[arg(long)]
    brand_name: String,

    /// Prediction service URL.
    #[arg(long, default_value = ServiceConfig::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds.
    #[arg(long, default_value = "30")]
    timeout_secs: u64,
}

fn parse_fuel(s: &str) -> Result<FuelType, String> {
    FuelType::parse(s).ok_or_else(|| format!("'{s}' is not one of: Petrol, Diesel, CNG"))
}

fn parse_seller(s: &str) -> Result<SellerType, String> {
    SellerType::parse(s).ok_or_else(|| format!("'{s}' is not one of: Dealer, Individual"))
}

fn parse_transmission(s: &str) -> Result<Transmission, String> {
    Transmission::parse(s).ok_or_else(|| format!("'{s}' is not one of: Manual, Automatic"))
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    debug!("using prediction endpoint {}", cli.endpoint);

    let predictor = HttpPredictor::new(ServiceConfig {
        endpoint: cli.endpoint,
        timeout: Duration::from_secs(cli.timeout_secs),
    })?;

    let input = VehicleInput {
        year: cli.year,
        kms_driven: cli.kms_driven,
        fuel: cli.fuel.as_str().to_string(),
        seller_type: cli.seller_type.as_str().to_string(),
        transmission: cli.transmission.as_str().to_string(),
        owner: cli.owner,
        brand_name: cli.brand_name,
    };

    for line in app::run(&input, &predictor).await {
        println!("{line}");
    }

    Ok(())
}
