//! Siphon Prelude
//!
//! The essential types for building response adaptation pipelines.

pub use crate::decoder::{JsonDecoder, ObjectDecoder};
pub use crate::error::{Error, Kind, Result};
pub use crate::response::Response;
pub use crate::single::{ResponseFutureExt, Single};

// HTTP standard types from http crate
pub use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};

// URL handling
pub use url::Url;
