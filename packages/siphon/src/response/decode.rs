//! Payload decoders: image, JSON value, string, and structured object.
//!
//! Every decoder is a pure function of the payload already in memory. Errors
//! carry the response and, where one exists, the underlying cause.

use image::DynamicImage;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::decoder::{JsonDecoder, ObjectDecoder};
use crate::error::{self, Result};
use crate::keypath;

use super::Response;

impl Response {
    /// Decodes the payload as an image.
    pub fn map_image(&self) -> Result<DynamicImage> {
        match image::load_from_memory(self.body()) {
            Ok(img) => {
                tracing::trace!(width = img.width(), height = img.height(), "decoded image payload");
                Ok(img)
            }
            Err(e) => Err(error::image_decode(e, self.clone())),
        }
    }

    /// Parses the payload as a JSON value.
    ///
    /// An empty payload is an error when `fails_on_empty_data` is set and
    /// yields `Value::Null` otherwise.
    pub fn map_json(&self, fails_on_empty_data: bool) -> Result<Value> {
        if self.body().is_empty() {
            if fails_on_empty_data {
                return Err(error::empty_data(self.clone()));
            }
            return Ok(Value::Null);
        }
        serde_json::from_slice(self.body()).map_err(|e| {
            tracing::debug!(error = %e, "payload is not well-formed JSON");
            error::json_decode(e, self.clone())
        })
    }

    /// Decodes the payload as a string.
    ///
    /// With a key path the payload is parsed as JSON first and the sub-value
    /// at that path is stringified; a string sub-value yields its contents,
    /// any other sub-value yields its JSON text. Without a key path the raw
    /// bytes are decoded as strict UTF-8.
    pub fn map_string(&self, key_path: Option<&str>) -> Result<String> {
        match key_path {
            Some(path) => {
                let root = self.map_json(true)?;
                let value = keypath::lookup(&root, path)
                    .ok_or_else(|| error::key_path(path, self.clone()))?;
                Ok(match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
            }
            None => match simdutf8::basic::from_utf8(self.body()) {
                Ok(text) => Ok(text.to_owned()),
                Err(e) => Err(error::string_decode(e, self.clone())),
            },
        }
    }

    /// Decodes the payload into `T` with the default [`JsonDecoder`].
    pub fn map_object<T: DeserializeOwned>(&self, key_path: Option<&str>) -> Result<T> {
        self.map_object_with(&JsonDecoder, key_path, true)
    }

    /// Decodes the payload into `T` with a caller-supplied decoder.
    ///
    /// With a key path the payload is parsed as JSON, the sub-value at that
    /// path is re-encoded, and the decoder runs over the fragment. An empty
    /// payload is an error when `fails_on_empty_data` is set and decodes as
    /// JSON `null` otherwise, which lets `Option<T>` targets succeed.
    pub fn map_object_with<T, D>(
        &self,
        decoder: &D,
        key_path: Option<&str>,
        fails_on_empty_data: bool,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        D: ObjectDecoder + ?Sized,
    {
        if self.body().is_empty() {
            if fails_on_empty_data {
                return Err(error::empty_data(self.clone()));
            }
            return decoder
                .decode(b"null")
                .map_err(|e| error::object_decode(e, self.clone()));
        }
        let decoded = match key_path {
            Some(path) => {
                let root = self.map_json(true)?;
                let fragment = keypath::lookup(&root, path)
                    .ok_or_else(|| error::key_path(path, self.clone()))?;
                let bytes = serde_json::to_vec(fragment)
                    .map_err(|e| error::json_decode(e, self.clone()))?;
                decoder.decode(&bytes)
            }
            None => decoder.decode(self.body()),
        };
        decoded.map_err(|e| {
            tracing::debug!(error = %e, "structured decoder rejected the payload");
            error::object_decode(e, self.clone())
        })
    }
}
