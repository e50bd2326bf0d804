use crate::dataset::Dataset;
use crate::domain::{Listing, ListingId};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

pub fn listing(id: usize, name: &str, price: f64, fee: f64, rating: Option<f64>) -> Listing {
    Listing {
        id: ListingId(id),
        name: name.to_string(),
        price,
        service_fee: fee,
        rating,
        latitude: 40.7128,
        longitude: -74.0060,
    }
}

/// A small synthetic dataset used by the router tests.
pub fn sample_dataset() -> Dataset {
    let mut uptown = listing(5, "Uptown Far Away", 240.0, 48.0, Some(4.9));
    uptown.latitude = 40.87;

    Dataset::from_listings(vec![
        listing(0, "Cozy Village Room", 180.0, 36.0, Some(4.6)),
        listing(1, "Midtown Loft", 240.0, 48.0, Some(4.7)),
        listing(2, "Budget Bunk", 60.0, 12.0, Some(4.5)),
        listing(3, "Luxury Penthouse", 900.0, 180.0, Some(5.0)),
        listing(4, "Unrated Studio", 200.0, 40.0, None),
        uptown,
        listing(6, "Harlem Brownstone", 240.0, 48.0, Some(4.7)),
        listing(7, "Low Rated Room", 100.0, 20.0, Some(3.0)),
    ])
}

pub fn form_request(body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri("/results")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
