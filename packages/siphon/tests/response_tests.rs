use bytes::Bytes;
use siphon::prelude::*;

#[test]
fn test_construction_and_accessors() {
    let mut headers = HeaderMap::new();
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    headers.insert("content-length", HeaderValue::from_static("13"));

    let url = Url::parse("https://api.example.com/users").unwrap();
    let response = Response::new(StatusCode::OK, &b"{\"name\":\"a\"}"[..])
        .with_headers(headers)
        .with_url(url.clone());

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.url(), Some(&url));
    assert_eq!(response.content_type().as_deref(), Some("application/json"));
    assert_eq!(response.content_length(), Some(13));
    assert!(response.header("etag").is_none());
}

#[test]
fn test_from_http_response() {
    let raw = http::Response::builder()
        .status(201)
        .header("content-type", "text/plain")
        .body(Bytes::from_static(b"created"))
        .unwrap();

    let response = Response::from(raw);
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.body().as_ref(), b"created");
    assert_eq!(response.content_type().as_deref(), Some("text/plain"));
}

#[test]
fn test_equality_over_status_body_and_url() {
    let a = Response::new(StatusCode::OK, &b"body"[..]);
    let b = Response::new(StatusCode::OK, &b"body"[..]);
    let c = Response::new(StatusCode::OK, &b"other"[..]);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, b.clone().with_url(Url::parse("https://example.com").unwrap()));
}

#[test]
fn test_display_describes_status_and_length() {
    let response = Response::new(StatusCode::NOT_FOUND, &b"gone"[..]);
    assert_eq!(response.to_string(), "Status Code: 404, Data Length: 4");
}
