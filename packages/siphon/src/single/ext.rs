//! Chaining operators over response-producing futures.

use std::future::Future;
use std::ops::{Range, RangeInclusive};

use image::DynamicImage;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::decoder::{JsonDecoder, ObjectDecoder};
use crate::error::Result;
use crate::response::Response;

use super::Single;

/// Chaining operators over any future that resolves to a [`Response`].
///
/// Blanket-implemented, so the same operators hang off an HTTP client's
/// response future and off [`Single<Response>`] itself, allowing filters and
/// decoders to compose in sequence:
///
/// ```no_run
/// # use siphon::prelude::*;
/// # async fn demo(response: Single<Response>) -> siphon::Result<()> {
/// let body = response
///     .filter_successful_status_codes()
///     .map_json(true)
///     .await?;
/// # Ok(())
/// # }
/// ```
pub trait ResponseFutureExt: Future<Output = Result<Response>> + Send + Sized + 'static {
    /// Lifts a synchronous, fallible transformation into the single-value
    /// stream.
    ///
    /// `transform` runs at most once, exactly when the upstream future
    /// resolves successfully. An upstream error is forwarded unchanged, never
    /// re-wrapped, and the transformation never runs for it.
    fn map_response<T, F>(self, transform: F) -> Single<T>
    where
        T: Send + 'static,
        F: FnOnce(Response) -> Result<T> + Send + 'static,
    {
        Single::new(async move { transform(self.await?) })
    }

    /// Keeps responses whose status code falls within `range` (both ends
    /// included); any other code becomes a status error carrying the
    /// response.
    fn filter_status_codes(self, range: RangeInclusive<u16>) -> Single<Response> {
        self.map_response(move |response| response.filter_status_codes(range))
    }

    /// Keeps responses whose status code falls within `range` (upper end
    /// excluded).
    fn filter_status_range(self, range: Range<u16>) -> Single<Response> {
        self.map_response(move |response| response.filter_status_range(range))
    }

    /// Keeps responses whose status code is exactly `code`.
    fn filter_status_code(self, code: u16) -> Single<Response> {
        self.map_response(move |response| response.filter_status_code(code))
    }

    /// Keeps responses with a 200-299 status code.
    fn filter_successful_status_codes(self) -> Single<Response> {
        self.map_response(Response::filter_successful_status_codes)
    }

    /// Keeps responses with a 200-399 status code.
    fn filter_successful_status_and_redirect_codes(self) -> Single<Response> {
        self.map_response(Response::filter_successful_status_and_redirect_codes)
    }

    /// Decodes the payload as an image.
    fn map_image(self) -> Single<DynamicImage> {
        self.map_response(|response| response.map_image())
    }

    /// Parses the payload as a JSON value. See [`Response::map_json`].
    fn map_json(self, fails_on_empty_data: bool) -> Single<Value> {
        self.map_response(move |response| response.map_json(fails_on_empty_data))
    }

    /// Decodes the payload as a string, optionally extracting the value at a
    /// key path first. See [`Response::map_string`].
    fn map_string(self, key_path: Option<&str>) -> Single<String> {
        let key_path = key_path.map(str::to_owned);
        self.map_response(move |response| response.map_string(key_path.as_deref()))
    }

    /// Decodes the payload into `T` with the default [`JsonDecoder`].
    fn map_object<T>(self, key_path: Option<&str>) -> Single<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.map_object_with(JsonDecoder, key_path, true)
    }

    /// Decodes the payload into `T` with a caller-supplied decoder. See
    /// [`Response::map_object_with`].
    fn map_object_with<T, D>(
        self,
        decoder: D,
        key_path: Option<&str>,
        fails_on_empty_data: bool,
    ) -> Single<T>
    where
        T: DeserializeOwned + Send + 'static,
        D: ObjectDecoder + Send + 'static,
    {
        let key_path = key_path.map(str::to_owned);
        self.map_response(move |response| {
            response.map_object_with(&decoder, key_path.as_deref(), fails_on_empty_data)
        })
    }
}

impl<Fut> ResponseFutureExt for Fut where Fut: Future<Output = Result<Response>> + Send + 'static {}
