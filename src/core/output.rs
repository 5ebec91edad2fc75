//! Deferred output values.
//!
//! An [`Output`] is a value a provider has not produced yet. Outputs are
//! cheap to clone; all clones share one underlying future, so the work
//! behind an output runs at most once. Derived outputs are built with
//! [`Output::map`].

use futures_util::future::{BoxFuture, Shared};
use futures_util::FutureExt;
use std::fmt;
use std::future::Future;

/// Result type carried by every output.
pub type OutputResult<T> = Result<T, String>;

/// A deferred value with a mapping combinator.
pub struct Output<T: Clone> {
    inner: Shared<BoxFuture<'static, OutputResult<T>>>,
}

impl<T: Clone> Clone for Output<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Output<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Wrap an already-known value.
    pub fn ready(value: T) -> Self {
        Self::from_future(async move { Ok(value) })
    }

    /// Wrap an already-known failure.
    pub fn fail(error: impl Into<String>) -> Self {
        let error = error.into();
        Self::from_future(async move { Err(error) })
    }

    /// Build an output from the future that produces its value.
    ///
    /// The future is not polled until the output (or a descendant) is
    /// resolved; its result is memoized for every clone.
    pub fn from_future<F>(fut: F) -> Self
    where
        F: Future<Output = OutputResult<T>> + Send + 'static,
    {
        Self {
            inner: fut.boxed().shared(),
        }
    }

    /// Derive a new output by applying a pure transform once this one
    /// resolves. Failures pass through untransformed.
    pub fn map<U, F>(&self, f: F) -> Output<U>
    where
        U: Clone + Send + Sync + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        let inner = self.inner.clone();
        Output::from_future(async move { inner.await.map(f) })
    }

    /// Await the resolved value.
    pub async fn resolve(&self) -> OutputResult<T> {
        self.inner.clone().await
    }

    /// Observe without blocking: `None` while unresolved.
    pub fn peek(&self) -> Option<OutputResult<T>> {
        self.inner.peek().cloned()
    }
}

impl<T> fmt::Debug for Output<T>
where
    T: Clone + Send + Sync + fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.peek() {
            Some(Ok(value)) => write!(f, "Output(resolved: {:?})", value),
            Some(Err(error)) => write!(f, "Output(failed: {})", error),
            None => write!(f, "Output(pending)"),
        }
    }
}
