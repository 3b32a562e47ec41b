//! # Siphon
//!
//! Chaining operators that adapt an asynchronous HTTP response into a typed,
//! single-value reactive pipeline: status-code filtering followed by payload
//! decoding (image, JSON value, string, structured object).
//!
//! This crate performs no networking of its own. The underlying HTTP client
//! produces a future resolving to a [`Response`]; each operator lifts a
//! synchronous, fallible conversion of that response into a [`Single`], a
//! stream that emits exactly one terminal value or one typed [`Error`].
//! Upstream transport errors pass through every operator untouched, and
//! recovery policy stays with the caller.
//!
//! ## Usage
//!
//! ```no_run
//! use serde::Deserialize;
//! use siphon::prelude::*;
//!
//! #[derive(Deserialize)]
//! struct User {
//!     name: String,
//! }
//!
//! async fn fetch_user(response: Single<Response>) -> siphon::Result<User> {
//!     response
//!         .filter_successful_status_codes()
//!         .map_object::<User>(Some("data.user"))
//!         .await
//! }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod decoder;
pub mod error;
mod keypath;
pub mod prelude;
pub mod response;
pub mod single;

pub use decoder::{JsonDecoder, ObjectDecoder};
pub use error::{Error, Kind, Result};
pub use response::Response;
pub use single::{ResponseFutureExt, Single};
