//! The single-value stream and its chaining operators.

mod ext;

pub use ext::ResponseFutureExt;

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

use futures_util::Stream;

use crate::error::{Error, Result};

/// A reactive sequence specialized to exactly one terminal event.
///
/// Resolves as a [`Future`] to a single `Result<T, Error>`; as a [`Stream`]
/// it yields that result once and then ends. There are no intermediate
/// states and no further emissions after the terminal one. Dropping a
/// `Single` before it resolves cancels the upstream work, so a transformation
/// attached with [`ResponseFutureExt::map_response`] never runs for an
/// abandoned pipeline.
pub struct Single<T> {
    inner: Pin<Box<dyn Future<Output = Result<T>> + Send>>,
    emitted: bool,
}

impl<T> Single<T> {
    pub(crate) fn new<Fut>(fut: Fut) -> Self
    where
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        Single {
            inner: Box::pin(fut),
            emitted: false,
        }
    }

    /// A `Single` that immediately resolves to `value`.
    pub fn value(value: T) -> Self
    where
        T: Send + 'static,
    {
        Single::new(std::future::ready(Ok(value)))
    }

    /// A `Single` that immediately resolves to `err`.
    pub fn error(err: Error) -> Self
    where
        T: Send + 'static,
    {
        Single::new(std::future::ready(Err(err)))
    }
}

impl<T> Future for Single<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.as_mut().get_mut();
        let out = ready!(this.inner.as_mut().poll(cx));
        this.emitted = true;
        Poll::Ready(out)
    }
}

impl<T> Stream for Single<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.as_mut().get_mut();
        if this.emitted {
            return Poll::Ready(None);
        }
        let out = ready!(this.inner.as_mut().poll(cx));
        this.emitted = true;
        Poll::Ready(Some(out))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.emitted { (0, Some(0)) } else { (1, Some(1)) }
    }
}

impl<T> fmt::Debug for Single<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Single")
            .field("emitted", &self.emitted)
            .finish()
    }
}
