//! The pluggable structured decoder.

use serde::de::DeserializeOwned;

use crate::error::BoxError;

/// Converts a raw payload into a caller-chosen structured type.
///
/// Passed explicitly per call rather than configured globally, so tests can
/// swap decoders without touching shared state. Failures are reported as a
/// boxed cause and wrapped by the calling operation.
pub trait ObjectDecoder {
    fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, BoxError>;
}

/// The default decoder, backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl ObjectDecoder for JsonDecoder {
    fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, BoxError> {
        serde_json::from_slice(body).map_err(Into::into)
    }
}
