use super::types::{BoxError, Error, Kind};
use crate::response::Response;

/// Creates an `Error` for a status code outside the accepted range.
///
/// The rejected response is attached so callers can still inspect it.
pub fn status_code(response: Response) -> Error {
    Error::new(Kind::Status(response.status())).with_response(response)
}

/// Creates an `Error` for a payload that is not a decodable image.
pub fn image_decode<E: Into<BoxError>>(e: E, response: Response) -> Error {
    Error::new(Kind::ImageDecode).with(e).with_response(response)
}

/// Creates an `Error` for an empty payload where content was required.
pub fn empty_data(response: Response) -> Error {
    Error::new(Kind::EmptyData).with_response(response)
}

/// Creates an `Error` for a malformed JSON payload.
pub fn json_decode<E: Into<BoxError>>(e: E, response: Response) -> Error {
    Error::new(Kind::JsonDecode).with(e).with_response(response)
}

/// Creates an `Error` for payload bytes that are not valid text.
pub fn string_decode<E: Into<BoxError>>(e: E, response: Response) -> Error {
    Error::new(Kind::StringDecode).with(e).with_response(response)
}

/// Creates an `Error` for a key path missing from the parsed payload.
pub fn key_path(path: impl Into<String>, response: Response) -> Error {
    Error::new(Kind::KeyPath(path.into())).with_response(response)
}

/// Creates an `Error` for a structured decoder failure, preserving the cause.
pub fn object_decode<E: Into<BoxError>>(e: E, response: Response) -> Error {
    Error::new(Kind::ObjectDecode).with(e).with_response(response)
}

/// Creates an `Error` wrapping an untyped failure from an underlying layer.
pub fn underlying<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Underlying).with(e)
}
