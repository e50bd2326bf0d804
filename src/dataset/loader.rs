// src/dataset/loader.rs

use crate::dataset::dataset_error::DatasetError;
use crate::domain::amount::{parse_amount, parse_number};
use crate::domain::{Listing, ListingId};
use serde::Deserialize;
use std::io::Read;
use tracing::{info, warn};

/// One CSV row, kept as raw text so coercion can be decided per column.
/// Columns not listed here are ignored.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "NAME", default)]
    name: Option<String>,
    #[serde(default)]
    price: Option<String>,
    #[serde(rename = "service fee", default)]
    service_fee: Option<String>,
    #[serde(rename = "review rate number", default)]
    rating: Option<String>,
    #[serde(default)]
    lat: Option<String>,
    #[serde(rename = "long", default)]
    long: Option<String>,
}

impl CsvRow {
    /// Builds a listing, or names the first required column that could not be read.
    fn into_listing(self, id: ListingId) -> Result<Listing, &'static str> {
        let required = |value: &Option<String>, column: &'static str, money: bool| {
            value
                .as_deref()
                .and_then(|raw| if money { parse_amount(raw) } else { parse_number(raw) })
                .ok_or(column)
        };

        let price = required(&self.price, "price", true)?;
        let service_fee = required(&self.service_fee, "service fee", true)?;
        let latitude = required(&self.lat, "lat", false)?;
        let longitude = required(&self.long, "long", false)?;

        Ok(Listing {
            id,
            name: self.name.unwrap_or_default().trim().to_string(),
            price,
            service_fee,
            rating: self.rating.as_deref().and_then(parse_number),
            latitude,
            longitude,
        })
    }
}

/// Reads listings from CSV text with a header row.
///
/// Each listing's id is its 0-based data row position, so a skipped row
/// leaves a gap instead of shifting later ids.
pub fn read_listings<R: Read>(reader: R) -> Result<Vec<Listing>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut listings = Vec::new();
    let mut skipped = 0usize;

    for (row, record) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let record = record?;
        match record.into_listing(ListingId(row)) {
            Ok(listing) => listings.push(listing),
            Err(column) => {
                skipped += 1;
                warn!(row, column, "skipping listing row with unusable value");
            }
        }
    }

    info!(loaded = listings.len(), skipped, "listings dataset read");
    Ok(listings)
}
