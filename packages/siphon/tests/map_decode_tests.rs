use std::error::Error as StdError;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use siphon::error::BoxError;
use siphon::prelude::*;

fn response(status: u16, body: &'static [u8]) -> Response {
    Response::new(StatusCode::from_u16(status).unwrap(), body)
}

#[derive(Debug, Deserialize, PartialEq)]
struct User {
    name: String,
    age: u32,
}

#[test]
fn test_map_json_parses_payload() {
    let value = response(200, b"{\"a\":1}").map_json(true).unwrap();
    assert_eq!(value, json!({"a": 1}));
}

#[test]
fn test_map_json_empty_payload_flag() {
    let err = response(200, b"").map_json(true).unwrap_err();
    assert_eq!(*err.kind(), Kind::EmptyData);

    let value = response(200, b"").map_json(false).unwrap();
    assert_eq!(value, Value::Null);
}

#[test]
fn test_map_json_malformed_payload() {
    let err = response(200, b"{\"a\":").map_json(true).unwrap_err();
    assert_eq!(*err.kind(), Kind::JsonDecode);
    assert!(err.source().is_some());
}

#[test]
fn test_map_string_raw_payload() {
    let text = response(200, b"hello world").map_string(None).unwrap();
    assert_eq!(text, "hello world");
}

#[test]
fn test_map_string_rejects_invalid_utf8() {
    let err = response(200, b"\xff\xfe\xfd").map_string(None).unwrap_err();
    assert_eq!(*err.kind(), Kind::StringDecode);
}

#[test]
fn test_map_string_at_key_path() {
    let body = b"{\"user\":{\"name\":\"ada\",\"age\":36},\"tags\":[\"a\",\"b\"]}";

    assert_eq!(response(200, body).map_string(Some("user.name")).unwrap(), "ada");
    assert_eq!(response(200, body).map_string(Some("user.age")).unwrap(), "36");
    assert_eq!(response(200, body).map_string(Some("tags.1")).unwrap(), "b");
}

#[test]
fn test_map_string_key_path_miss() {
    let err = response(200, b"{\"user\":{\"name\":\"ada\"}}")
        .map_string(Some("user.email"))
        .unwrap_err();
    assert_eq!(*err.kind(), Kind::KeyPath("user.email".into()));
}

#[test]
fn test_map_object_matches_direct_decode() {
    let body = b"{\"name\":\"ada\",\"age\":36}";
    let decoded: User = response(200, body).map_object(None).unwrap();
    let direct: User = serde_json::from_slice(body).unwrap();
    assert_eq!(decoded, direct);
}

#[test]
fn test_map_object_at_key_path() {
    let body = b"{\"data\":{\"user\":{\"name\":\"ada\",\"age\":36}}}";
    let decoded: User = response(200, body).map_object(Some("data.user")).unwrap();
    assert_eq!(decoded, User { name: "ada".into(), age: 36 });
}

#[test]
fn test_map_object_key_path_miss() {
    let err = response(200, b"{\"data\":{}}")
        .map_object::<User>(Some("data.user"))
        .unwrap_err();
    assert_eq!(*err.kind(), Kind::KeyPath("data.user".into()));
}

#[test]
fn test_map_object_mismatched_schema_wraps_cause() {
    let err = response(200, b"{\"name\":\"ada\"}")
        .map_object::<User>(None)
        .unwrap_err();

    assert_eq!(*err.kind(), Kind::ObjectDecode);
    let cause = err.source().expect("decoder cause is preserved");
    assert!(cause.downcast_ref::<serde_json::Error>().is_some());
}

#[test]
fn test_map_object_empty_payload() {
    let err = response(200, b"").map_object::<User>(None).unwrap_err();
    assert_eq!(*err.kind(), Kind::EmptyData);

    let decoded: Option<User> = response(200, b"")
        .map_object_with(&JsonDecoder, None, false)
        .unwrap();
    assert_eq!(decoded, None);
}

/// Tolerates a UTF-8 BOM before the JSON payload.
struct LenientDecoder;

impl ObjectDecoder for LenientDecoder {
    fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> std::result::Result<T, BoxError> {
        let body = body.strip_prefix(b"\xef\xbb\xbf").unwrap_or(body);
        serde_json::from_slice(body).map_err(Into::into)
    }
}

#[test]
fn test_pluggable_decoder_swap() {
    let body: &'static [u8] = b"\xef\xbb\xbf{\"name\":\"ada\",\"age\":36}";

    let err = response(200, body).map_object::<User>(None).unwrap_err();
    assert_eq!(*err.kind(), Kind::ObjectDecode);

    let decoded: User = response(200, body)
        .map_object_with(&LenientDecoder, None, true)
        .unwrap();
    assert_eq!(decoded, User { name: "ada".into(), age: 36 });
}

#[test]
fn test_map_image_decodes_png() {
    let img = image::RgbaImage::from_pixel(1, 1, image::Rgba([255, 0, 0, 255]));
    let mut png = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();

    let decoded = Response::new(StatusCode::OK, png).map_image().unwrap();
    assert_eq!(decoded.width(), 1);
    assert_eq!(decoded.height(), 1);
}

#[test]
fn test_map_image_rejects_garbage() {
    let err = response(200, b"definitely not an image").map_image().unwrap_err();
    assert_eq!(*err.kind(), Kind::ImageDecode);
    assert!(err.source().is_some());
}
