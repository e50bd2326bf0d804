use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get_request, sample_dataset};

#[test]
fn home_page_has_the_search_form() {
    let resp = handle(get_request("/"), &sample_dataset()).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"action="/results""#));
    assert!(!body.contains("/static/"), "layout links assets no route serves");
    for field in ["max-rate", "servicefee-max", "rating", "location", "max-distance"] {
        assert!(
            body.contains(&format!(r#"name="{field}""#)),
            "form is missing field {field}"
        );
    }
}

#[test]
fn unknown_path_is_not_found() {
    let err = handle(get_request("/nope"), &sample_dataset()).unwrap_err();
    assert_eq!(err.status(), 404);

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn results_page_only_accepts_post() {
    let err = handle(get_request("/results"), &sample_dataset()).unwrap_err();
    assert_eq!(err.status(), 404);
}
