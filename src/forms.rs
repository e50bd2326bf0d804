// forms.rs
//! Turns user-facing text (form bodies, query strings, CLI flags) into a [`Query`].

use crate::domain::amount::{parse_amount, parse_number};
use crate::domain::{Coordinates, Query};
use thiserror::Error;

pub const FIELD_MAX_PRICE: &str = "max-rate";
pub const FIELD_MAX_SERVICE_FEE: &str = "servicefee-max";
pub const FIELD_MIN_RATING: &str = "rating";
pub const FIELD_LOCATION: &str = "location";
pub const FIELD_MAX_DISTANCE: &str = "max-distance";

/// A field the caller filled in with something that is not a usable number.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Invalid value for '{field}': '{value}'")]
pub struct InvalidInput {
    pub field: &'static str,
    pub value: String,
}

impl InvalidInput {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Raw search fields as submitted, before any parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchForm {
    pub max_price: Option<String>,
    pub max_service_fee: Option<String>,
    pub min_rating: Option<String>,
    pub location: Option<String>,
    pub max_distance: Option<String>,
}

impl SearchForm {
    /// Collects the known fields from decoded key/value pairs. Unknown keys
    /// are ignored; a repeated key keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = SearchForm::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                FIELD_MAX_PRICE => &mut form.max_price,
                FIELD_MAX_SERVICE_FEE => &mut form.max_service_fee,
                FIELD_MIN_RATING => &mut form.min_rating,
                FIELD_LOCATION => &mut form.location,
                FIELD_MAX_DISTANCE => &mut form.max_distance,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        form
    }

    /// Parses an `application/x-www-form-urlencoded` body or query string.
    pub fn from_urlencoded(input: &[u8]) -> Self {
        Self::from_pairs(url::form_urlencoded::parse(input).into_owned())
    }

    pub fn into_query(self) -> Result<Query, InvalidInput> {
        let max_price = parse_money(FIELD_MAX_PRICE, required(FIELD_MAX_PRICE, &self.max_price)?)?;
        let max_service_fee = parse_money(
            FIELD_MAX_SERVICE_FEE,
            required(FIELD_MAX_SERVICE_FEE, &self.max_service_fee)?,
        )?;
        let min_rating = parse_rating(required(FIELD_MIN_RATING, &self.min_rating)?)?;

        let location = match non_empty(&self.location) {
            Some(raw) => Some(parse_location(raw)?),
            None => None,
        };
        let max_distance = match non_empty(&self.max_distance) {
            Some(raw) => Some(parse_distance(raw)?),
            None => None,
        };

        Ok(Query {
            max_price,
            max_service_fee,
            min_rating,
            location,
            max_distance,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn required<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str, InvalidInput> {
    non_empty(value).ok_or_else(|| InvalidInput::new(field, ""))
}

/// A non-negative amount; `$` and thousands separators are accepted.
pub fn parse_money(field: &'static str, raw: &str) -> Result<f64, InvalidInput> {
    parse_amount(raw)
        .filter(|v| *v >= 0.0)
        .ok_or_else(|| InvalidInput::new(field, raw))
}

pub fn parse_rating(raw: &str) -> Result<f64, InvalidInput> {
    parse_number(raw).ok_or_else(|| InvalidInput::new(FIELD_MIN_RATING, raw))
}

/// Parses `"lat,long"`, e.g. `"40.7128,-74.0060"`.
pub fn parse_location(raw: &str) -> Result<Coordinates, InvalidInput> {
    let parts: Vec<&str> = raw.split(',').collect();
    match parts.as_slice() {
        [lat, long] => match (parse_number(lat), parse_number(long)) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates::new(latitude, longitude)),
            _ => Err(InvalidInput::new(FIELD_LOCATION, raw)),
        },
        _ => Err(InvalidInput::new(FIELD_LOCATION, raw)),
    }
}

pub fn parse_distance(raw: &str) -> Result<f64, InvalidInput> {
    parse_number(raw)
        .filter(|v| *v >= 0.0)
        .ok_or_else(|| InvalidInput::new(FIELD_MAX_DISTANCE, raw))
}
