use crate::router::handle;
use crate::tests::utils::{body_string, get_request, sample_dataset};
use serde_json::Value;

#[test]
fn api_returns_ranked_json() {
    let resp = handle(
        get_request("/api/top-listings?max-rate=250&servicefee-max=50&rating=4.5"),
        &sample_dataset(),
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["count"], 5);

    let ids: Vec<u64> = json["listings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![5, 1, 6, 0, 2]);
    assert_eq!(json["query"]["max_price"], 250.0);
}

#[test]
fn api_rejects_missing_fields() {
    let err = handle(
        get_request("/api/top-listings?max-rate=250"),
        &sample_dataset(),
    )
    .unwrap_err();

    assert_eq!(err.status(), 400);
}
