//! Incoming request type handed to handlers and loaders.

use std::any::Any;
use std::collections::HashMap;

use http::Method;

/// A type-erased record produced by a loader and attached to the request.
pub(crate) type Record = Box<dyn Any + Send + Sync>;

/// An incoming request, as seen by action handlers.
///
/// The host framework owns parsing; this type carries only what routing and
/// autoloading need — method, path, body bytes, the matched path parameters,
/// and the bag of loaded records.
pub struct Request {
    method: Method,
    path: String,
    body: Vec<u8>,
    params: HashMap<String, String>,
    records: HashMap<String, Record>,
}

impl Request {
    pub(crate) fn new(
        method: Method,
        path: String,
        body: Vec<u8>,
        params: HashMap<String, String>,
    ) -> Self {
        Self { method, path, body, params, records: HashMap::new() }
    }

    pub fn method(&self) -> &Method { &self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Returns a named path parameter.
    ///
    /// For a route `/forums/{id}`, `req.param("id")` on `/forums/42` returns
    /// `Some("42")`. Nested ancestor identifiers use their namespaced key,
    /// e.g. `req.param("forum_id")` on `/forums/42/threads/7`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns the record a loader attached under `name`.
    ///
    /// The key is the singular resource name: the loader of resource
    /// `"forums"` attaches under `"forum"`. Returns `None` if no record was
    /// loaded under that name or if `T` is not the loader's type.
    ///
    /// ```rust,ignore
    /// async fn show(req: Request) -> Response {
    ///     let forum: &Forum = req.record("forum").unwrap();
    ///     Response::text(&*forum.title)
    /// }
    /// ```
    pub fn record<T: 'static>(&self, name: &str) -> Option<&T> {
        self.records.get(name)?.downcast_ref()
    }

    pub(crate) fn attach(&mut self, name: &str, record: Record) {
        self.records.insert(name.to_owned(), record);
    }
}
