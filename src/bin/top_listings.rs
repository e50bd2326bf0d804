//! One-shot ranking from the command line: load the CSV, rank once, print.

use clap::Parser;
use listing_ranker::dataset::Dataset;
use listing_ranker::domain::{Coordinates, Listing, Query};
use listing_ranker::forms::{self, FIELD_MAX_PRICE, FIELD_MAX_SERVICE_FEE};
use listing_ranker::telemetry::init_tracing;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// Print the top 5 listings for a budget, rating and optional area.
#[derive(Parser, Debug)]
#[command(name = "top_listings", about = "Rank listings from a CSV dataset")]
struct Cli {
    /// Listings CSV file.
    #[arg(long, env = "LISTINGS_CSV", default_value = "AirBNB3.csv")]
    csv: PathBuf,

    /// Highest nightly price, e.g. 250 or $250.
    #[arg(long, default_value = "250", value_parser = parse_max_price)]
    max_price: f64,

    /// Highest service fee.
    #[arg(long, default_value = "50", value_parser = parse_max_service_fee)]
    max_service_fee: f64,

    /// Lowest acceptable review rating.
    #[arg(long, default_value = "4.5", allow_hyphen_values = true, value_parser = parse_rating)]
    min_rating: f64,

    /// Search center as "lat,long".
    #[arg(long, default_value = "40.7128,-74.0060", allow_hyphen_values = true, value_parser = parse_location)]
    location: Option<Coordinates>,

    /// Radius around --location, in degrees of latitude/longitude.
    #[arg(long, default_value = "0.1", value_parser = parse_distance)]
    max_distance: Option<f64>,

    /// Skip the spatial filter entirely.
    #[arg(long)]
    anywhere: bool,

    /// Print the listings as JSON instead of text.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn query(&self) -> Query {
        let mut query = Query::new(self.max_price, self.max_service_fee, self.min_rating);
        if !self.anywhere {
            query.location = self.location;
            query.max_distance = self.max_distance;
        }
        query
    }
}

fn parse_max_price(raw: &str) -> Result<f64, String> {
    forms::parse_money(FIELD_MAX_PRICE, raw).map_err(|e| e.to_string())
}

fn parse_max_service_fee(raw: &str) -> Result<f64, String> {
    forms::parse_money(FIELD_MAX_SERVICE_FEE, raw).map_err(|e| e.to_string())
}

fn parse_rating(raw: &str) -> Result<f64, String> {
    forms::parse_rating(raw).map_err(|e| e.to_string())
}

fn parse_location(raw: &str) -> Result<Coordinates, String> {
    forms::parse_location(raw).map_err(|e| e.to_string())
}

fn parse_distance(raw: &str) -> Result<f64, String> {
    forms::parse_distance(raw).map_err(|e| e.to_string())
}

fn print_listing(position: usize, listing: &Listing) {
    println!("Listing {position}:");
    println!("Name: {}", listing.name);
    println!("Price: ${}", listing.price);
    println!("Service Fee: ${}", listing.service_fee);
    match listing.rating {
        Some(rating) => println!("Rating: {rating}"),
        None => println!("Rating: Not rated"),
    }
    println!("Location: ({}, {})\n", listing.latitude, listing.longitude);
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let dataset = match Dataset::from_csv_path(&cli.csv) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Dataset load failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let top = dataset.top_listings(&cli.query());

    if cli.json {
        match serde_json::to_string_pretty(&top) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Failed to serialize listings: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else if top.is_empty() {
        println!("No listings match the given constraints.");
    } else {
        for (i, listing) in top.iter().enumerate() {
            print_listing(i + 1, listing);
        }
    }

    ExitCode::SUCCESS
}
