// src/domain/listing.rs

use serde::Serialize;
use std::fmt;

/// Row position of a listing in the source dataset.
/// This is the only key used to tell two listings apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ListingId(pub usize);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A latitude/longitude pair in raw degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Squared planar distance, measured in degrees.
    ///
    /// This treats latitude and longitude as a flat grid. It is an
    /// approximation: a degree of longitude shrinks away from the equator,
    /// so the search "circle" is really an ellipse on the ground.
    pub fn squared_distance_to(&self, other: &Coordinates) -> f64 {
        let d_lat = self.latitude - other.latitude;
        let d_long = self.longitude - other.longitude;
        d_lat * d_lat + d_long * d_long
    }
}

/// A single rental listing as loaded from the dataset. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    pub price: f64,
    pub service_fee: f64,
    /// `None` when the source row had no usable review rating.
    pub rating: Option<f64>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Listing {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}
