//! The immutable HTTP response value every operator in this crate reads.

use std::fmt;

use bytes::Bytes;
use http::{HeaderMap, HeaderValue, StatusCode};
use url::Url;

/// An HTTP response: status code, headers, and the complete payload.
///
/// Produced once per request by the underlying client and never mutated;
/// every transformation reads it and produces a new value. Cloning is cheap,
/// the payload is a reference-counted [`Bytes`] buffer.
#[derive(Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    url: Option<Url>,
}

impl Response {
    /// Creates a response from a status code and payload.
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Response {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
            url: None,
        }
    }

    /// Attaches response headers.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Attaches the origin URL for diagnostics.
    #[must_use]
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    /// The HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw payload.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// The origin URL, if one was attached.
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Get a header value by name.
    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.get(name)
    }

    /// Get content type header value
    pub fn content_type(&self) -> Option<String> {
        self.header("content-type")
            .and_then(|v| v.to_str().ok().map(std::string::ToString::to_string))
    }

    /// Get content length if available
    pub fn content_length(&self) -> Option<usize> {
        self.header("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Status Code: {}, Data Length: {}",
            self.status.as_u16(),
            self.body.len()
        )
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("Response");
        f.field("status", &self.status);
        f.field("body_len", &self.body.len());
        if let Some(ref url) = self.url {
            f.field("url", url);
        }
        f.finish()
    }
}

impl PartialEq for Response {
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status && self.body == other.body && self.url == other.url
    }
}

impl Eq for Response {}

impl From<http::Response<Bytes>> for Response {
    fn from(response: http::Response<Bytes>) -> Self {
        let (parts, body) = response.into_parts();
        Response {
            status: parts.status,
            headers: parts.headers,
            body,
            url: None,
        }
    }
}
