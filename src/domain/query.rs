// src/domain/query.rs

use crate::domain::listing::Coordinates;
use serde::Serialize;

/// Constraints for one ranking request, already parsed and typed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    pub max_price: f64,
    pub max_service_fee: f64,
    pub min_rating: f64,
    pub location: Option<Coordinates>,
    pub max_distance: Option<f64>,
}

/// The spatial predicate, only present when both halves of it were given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchArea {
    pub center: Coordinates,
    pub max_distance: f64,
}

impl SearchArea {
    pub fn contains(&self, point: &Coordinates) -> bool {
        self.center.squared_distance_to(point) <= self.max_distance * self.max_distance
    }
}

impl Query {
    pub fn new(max_price: f64, max_service_fee: f64, min_rating: f64) -> Self {
        Self {
            max_price,
            max_service_fee,
            min_rating,
            location: None,
            max_distance: None,
        }
    }

    pub fn with_location(mut self, location: Coordinates) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    /// A location without a distance (or a distance without a location)
    /// means no spatial filtering at all. A zero distance counts as not given.
    pub fn search_area(&self) -> Option<SearchArea> {
        match (self.location, self.max_distance) {
            (Some(center), Some(max_distance)) if max_distance > 0.0 => Some(SearchArea {
                center,
                max_distance,
            }),
            _ => None,
        }
    }
}
