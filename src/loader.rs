//! Loader type erasure.
//!
//! A loader resolves a path identifier to a record before the action handler
//! runs. Absence (`None`) is not an error — it becomes a `404` in the
//! autoload pipeline. Callers with fallible lookups map their `Err` to
//! `None` themselves; the pipeline makes no distinction.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Record;

pub(crate) type LoadFuture = Pin<Box<dyn Future<Output = Option<Record>> + Send + 'static>>;

/// A type-erased loader, shared by every route that resolves this resource.
pub(crate) type BoxedLoader = Arc<dyn Fn(String) -> LoadFuture + Send + Sync + 'static>;

/// Erases a typed `async fn(String) -> Option<T>` into a [`BoxedLoader`].
pub(crate) fn erase<F, Fut, T>(f: F) -> BoxedLoader
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Option<T>> + Send + 'static,
    T: Send + Sync + 'static,
{
    Arc::new(move |id: String| -> LoadFuture {
        let fut = f(id);
        Box::pin(async move { fut.await.map(|record| Box::new(record) as Record) })
    })
}
