use crate::dataset::Dataset;
use crate::domain::{Listing, Query};
use crate::errors::ServerError;
use crate::forms::SearchForm;
use crate::responses::{html_response, json_response, ResultResp};
use crate::templates::pages::{home_page, results_page, ResultsVm};
use astra::Request;
use serde::Serialize;
use std::io::Read;
use tracing::{debug, warn};

/// Largest form body accepted on `/results`.
pub const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn handle(req: Request, dataset: &Dataset) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(home_page()),
        ("POST", "/results") => results(req, dataset),
        ("GET", "/api/top-listings") => api_top_listings(&req, dataset),
        _ => Err(ServerError::NotFound),
    }
}

fn results(req: Request, dataset: &Dataset) -> ResultResp {
    let body = read_body(req)?;
    let form = SearchForm::from_urlencoded(&body);
    let location_text = form
        .location
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned);

    let query = parse_query(form)?;
    let top_listings = dataset.top_listings(&query);

    html_response(results_page(&ResultsVm {
        query: &query,
        location_text: location_text.as_deref(),
        top_listings: &top_listings,
    }))
}

#[derive(Serialize)]
struct TopListingsBody<'a> {
    query: &'a Query,
    count: usize,
    listings: Vec<&'a Listing>,
}

fn api_top_listings(req: &Request, dataset: &Dataset) -> ResultResp {
    let raw = req.uri().query().unwrap_or("");
    let query = parse_query(SearchForm::from_urlencoded(raw.as_bytes()))?;
    let listings = dataset.top_listings(&query);

    json_response(&TopListingsBody {
        query: &query,
        count: listings.len(),
        listings,
    })
}

fn parse_query(form: SearchForm) -> Result<Query, ServerError> {
    form.into_query().map_err(|invalid| {
        warn!(field = invalid.field, value = %invalid.value, "rejected search input");
        ServerError::from(invalid)
    })
}

fn read_body(req: Request) -> Result<Vec<u8>, ServerError> {
    let mut body = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Could not read request body: {e}")))?;

    if body.len() as u64 > MAX_FORM_BYTES {
        warn!(limit = MAX_FORM_BYTES, "rejected oversized form body");
        return Err(ServerError::BadRequest("Form body too large".to_string()));
    }
    Ok(body)
}
