use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::{handle, MAX_FORM_BYTES};
use crate::tests::utils::{body_string, form_request, sample_dataset};

/// Positions of `names` in `body`, asserting each one appears.
fn positions(body: &str, names: &[&str]) -> Vec<usize> {
    names
        .iter()
        .map(|name| {
            body.find(name)
                .unwrap_or_else(|| panic!("'{name}' missing from results page"))
        })
        .collect()
}

#[test]
fn results_are_listed_best_first() {
    let resp = handle(
        form_request("max-rate=%24250&servicefee-max=%2450&rating=4.5&location="),
        &sample_dataset(),
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    let order = positions(
        &body,
        &[
            "Uptown Far Away",
            "Midtown Loft",
            "Harlem Brownstone",
            "Cozy Village Room",
            "Budget Bunk",
        ],
    );
    assert!(order.windows(2).all(|w| w[0] < w[1]), "wrong order: {order:?}");

    assert!(!body.contains("Luxury Penthouse"));
    assert!(!body.contains("Unrated Studio"));
    assert!(!body.contains("Low Rated Room"));
    assert!(body.contains("Not provided"));
}

#[test]
fn location_and_distance_narrow_the_results() {
    let resp = handle(
        form_request(
            "max-rate=250&servicefee-max=50&rating=4.5&location=40.7128%2C-74.0060&max-distance=0.1",
        ),
        &sample_dataset(),
    )
    .expect("Handler failed");

    let body = body_string(resp);
    assert!(!body.contains("Uptown Far Away"));
    assert!(body.contains("Midtown Loft"));
    assert!(body.contains("40.7128,-74.0060"));
}

#[test]
fn location_alone_does_not_filter() {
    let resp = handle(
        form_request("max-rate=250&servicefee-max=50&rating=4.5&location=40.7128%2C-74.0060"),
        &sample_dataset(),
    )
    .expect("Handler failed");

    assert!(body_string(resp).contains("Uptown Far Away"));
}

#[test]
fn empty_match_renders_a_message() {
    let resp = handle(
        form_request("max-rate=0&servicefee-max=0&rating=0"),
        &sample_dataset(),
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("No listings match your search."));
}

#[test]
fn non_numeric_input_is_a_client_error() {
    let err = handle(
        form_request("max-rate=lots&servicefee-max=50&rating=4.5"),
        &sample_dataset(),
    )
    .unwrap_err();

    match &err {
        ServerError::InvalidInput(invalid) => assert_eq!(invalid.field, "max-rate"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Invalid input data. Please check your form."));
}

#[test]
fn malformed_location_is_rejected() {
    let err = handle(
        form_request("max-rate=250&servicefee-max=50&rating=4.5&location=40.7128"),
        &sample_dataset(),
    )
    .unwrap_err();

    assert_eq!(err.status(), 400);
}

#[test]
fn oversized_form_body_is_rejected() {
    let prefix = "max-rate=250&servicefee-max=50&pad=";
    let suffix = "&rating=4.5";
    let pad = "x".repeat(MAX_FORM_BYTES as usize - prefix.len() - 2);
    let body = format!("{prefix}{pad}{suffix}");
    assert!(body.len() as u64 > MAX_FORM_BYTES);

    let err = handle(form_request(&body), &sample_dataset()).unwrap_err();
    match &err {
        ServerError::BadRequest(msg) => assert_eq!(msg, "Form body too large"),
        other => panic!("expected BadRequest, got {other:?}"),
    }
    assert_eq!(err.status(), 400);
}

#[test]
fn form_body_at_the_limit_is_accepted() {
    let prefix = "max-rate=250&servicefee-max=50&rating=4.5&pad=";
    let pad = "x".repeat(MAX_FORM_BYTES as usize - prefix.len());
    let body = format!("{prefix}{pad}");
    assert_eq!(body.len() as u64, MAX_FORM_BYTES);

    let resp = handle(form_request(&body), &sample_dataset()).expect("Handler failed");
    assert_eq!(resp.status(), 200);
}
