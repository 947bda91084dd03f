//! The host-router contract and the bundled radix-tree router.
//!
//! [`Resources::mount`](crate::Resources::mount) writes into anything
//! implementing [`Mount`] — your framework's router, or the [`Router`]
//! shipped here. The bundled router keeps one matchit tree per HTTP method,
//! O(path-length) lookup, and dispatches already-parsed requests in memory.
//! It never touches a socket; listening and parsing belong to the host
//! process.

use std::collections::HashMap;

use http::{Method, StatusCode};
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, ErasedHandler as _};
use crate::request::Request;
use crate::response::Response;

/// Route-registration contract of a host router.
///
/// Implement this for your framework's router to mount resources onto it.
/// Paths use `{name}` parameter syntax; translate in your impl if the host
/// speaks another dialect.
pub trait Mount {
    fn route(&mut self, method: Method, path: &str, handler: BoxedHandler);
}

/// The bundled router.
///
/// One radix tree per HTTP method. Build it once at startup; dispatch
/// requests against it for as long as the application lives.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Routes one request and produces one response.
    ///
    /// Unmapped (method, path) pairs get a `404` with no body — the
    /// convention-table fall-through behavior.
    pub async fn dispatch(&self, method: Method, path: &str) -> Response {
        self.dispatch_with(method, path, Vec::new()).await
    }

    /// [`dispatch`](Router::dispatch), carrying a request body.
    pub async fn dispatch_with(&self, method: Method, path: &str, body: Vec<u8>) -> Response {
        match self.lookup(&method, path) {
            Some((handler, params)) => {
                let req = Request::new(method, path.to_owned(), body, params);
                handler.call(req).await
            }
            None => Response::status(StatusCode::NOT_FOUND),
        }
    }

    fn lookup(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        let handler = std::sync::Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }
}

impl Mount for Router {
    /// Registers a route. Panics on an invalid or conflicting pattern —
    /// route tables are built at startup, and a bad pattern is a programmer
    /// error worth failing loudly on.
    fn route(&mut self, method: Method, path: &str, handler: BoxedHandler) {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler)
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
