use std::error::Error as StdError;
use std::fmt;

use http::StatusCode;

use crate::response::Response;

/// A Result alias where the Err case is `siphon::Error`.
pub type Result<T> = std::result::Result<T, Error>;

pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Represents errors that can occur while adapting an HTTP response.
#[derive(Clone)]
pub struct Error {
    pub(crate) inner: Box<Inner>,
}

pub(crate) struct Inner {
    pub(crate) kind: Kind,
    pub(crate) source: Option<BoxError>,
    pub(crate) response: Option<Response>,
}

impl Clone for Inner {
    fn clone(&self) -> Self {
        Inner {
            kind: self.kind.clone(),
            source: None, // Cannot clone trait objects, so we lose the source
            response: self.response.clone(),
        }
    }
}

/// The closed set of failure kinds an adaptation chain can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// Status code fell outside the accepted range.
    Status(StatusCode),
    /// Payload could not be decoded as an image.
    ImageDecode,
    /// Payload was empty where content was required.
    EmptyData,
    /// Payload was not well-formed JSON.
    JsonDecode,
    /// Payload bytes were not valid UTF-8 text.
    StringDecode,
    /// Requested key path was absent from the parsed payload.
    KeyPath(String),
    /// The structured decoder rejected the payload.
    ObjectDecode,
    /// Untyped failure from an underlying layer. Defensive fallback only.
    Underlying,
}

impl Error {
    pub(crate) fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner { kind, source: None, response: None }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub(crate) fn with<E: Into<BoxError>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    #[must_use]
    pub(crate) fn with_response(mut self, response: Response) -> Error {
        self.inner.response = Some(response);
        self
    }

    /// The failure kind of this error.
    pub fn kind(&self) -> &Kind {
        &self.inner.kind
    }

    /// Get the response associated with this error, if any.
    #[must_use]
    pub fn response(&self) -> Option<&Response> {
        self.inner.response.as_ref()
    }

    /// The offending status code, when the error is a status filter rejection.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self.inner.kind {
            Kind::Status(code) => Some(code),
            _ => None,
        }
    }

    /// Returns true if this error came from a status range filter.
    #[must_use]
    pub fn is_status(&self) -> bool {
        matches!(self.inner.kind, Kind::Status(_))
    }

    /// Returns true if this error came from a payload decode step.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(
            self.inner.kind,
            Kind::ImageDecode
                | Kind::EmptyData
                | Kind::JsonDecode
                | Kind::StringDecode
                | Kind::KeyPath(_)
                | Kind::ObjectDecode
        )
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("siphon::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref response) = self.inner.response {
            f.field("response", response);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.kind {
            Kind::Status(code) => {
                write!(f, "status code didn't fall within the accepted range ({code})")
            }
            Kind::ImageDecode => f.write_str("failed to decode payload as an image"),
            Kind::EmptyData => f.write_str("response payload was empty"),
            Kind::JsonDecode => f.write_str("failed to decode payload as JSON"),
            Kind::StringDecode => f.write_str("failed to decode payload as a UTF-8 string"),
            Kind::KeyPath(path) => write!(f, "key path {path:?} not found in payload"),
            Kind::ObjectDecode => f.write_str("structured decoder rejected the payload"),
            Kind::Underlying => f.write_str("underlying failure"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}

impl From<BoxError> for Error {
    fn from(err: BoxError) -> Error {
        Error::new(Kind::Underlying).with(err)
    }
}
