//! Resource declarations and route-table materialization.
//!
//! A [`Resources`] registry collects named [`Resource`] declarations at
//! application setup. Resources nest into a tree; materialization walks the
//! tree once, deriving each route's path from the ancestor chain and
//! composing ancestor loaders root-to-leaf into an autoload pipeline. The
//! resulting table is read-only during request handling — mount it and
//! forget it.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use http::Method;
use tracing::debug;

use crate::action::Action;
use crate::error::Error;
use crate::handler::{BoxedHandler, Handler};
use crate::loader::{self, BoxedLoader};
use crate::pipeline::{Pipeline, Stage};
use crate::router::Mount;

// ── Resource ─────────────────────────────────────────────────────────────────

/// A named collection exposed over conventional CRUD routes.
///
/// Declared through [`Resources::resource`]; shaped with the chaining
/// methods, then materialized by [`Resources::mount`].
pub struct Resource {
    name: String,
    param: String,
    actions: Vec<(Action, BoxedHandler)>,
    loader: Option<BoxedLoader>,
    extra: Vec<ExtraRoute>,
    parent: Option<usize>,
    children: Vec<usize>,
}

struct ExtraRoute {
    method: Method,
    /// Bare names ("login") are member routes under `/{id}/`; leading-slash
    /// paths ("/logout") hang off the collection base verbatim.
    member: bool,
    segment: String,
    handler: BoxedHandler,
}

impl Resource {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            param: "id".to_owned(),
            actions: Vec::new(),
            loader: None,
            extra: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// The resource name as declared. Empty for the root resource.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers (or replaces) the handler for a conventional action.
    pub fn on(&mut self, action: Action, handler: impl Handler) -> &mut Self {
        let handler = handler.into_boxed_handler();
        match self.actions.iter_mut().find(|(a, _)| *a == action) {
            Some(slot) => slot.1 = handler,
            None => self.actions.push((action, handler)),
        }
        self
    }

    /// Overrides the identifier parameter name (default `"id"`).
    ///
    /// Applies to every generated route of this resource, so with
    /// `id("uid")` a `show` handler reads `req.param("uid")`.
    pub fn id(&mut self, param: &str) -> &mut Self {
        self.param = param.to_owned();
        self
    }

    /// Supplies the loader that resolves this resource's identifier.
    ///
    /// Runs before the handler on every member route (and on every
    /// descendant route once nested). `None` short-circuits the request
    /// with `404`; on success the record is attached to the request under
    /// the singular resource name.
    pub fn load<F, Fut, T>(&mut self, f: F) -> &mut Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<T>> + Send + 'static,
        T: Send + Sync + 'static,
    {
        self.loader = Some(loader::erase(f));
        self
    }

    /// Registers an ad-hoc route under the resource's base path.
    ///
    /// A bare name becomes a member route — `map(GET, "login", h)` on
    /// `"users"` answers at `/users/{id}/login`, with the loader applied.
    /// A leading-slash path is collection-relative and taken verbatim —
    /// `map(GET, "/logout", h)` answers at `/users/logout`.
    pub fn map(&mut self, method: Method, path: &str, handler: impl Handler) -> &mut Self {
        let member = !path.starts_with('/');
        self.extra.push(ExtraRoute {
            method,
            member,
            segment: path.to_owned(),
            handler: handler.into_boxed_handler(),
        });
        self
    }

    /// Singular form of the last name segment; the record attachment key.
    fn attach_key(&self) -> String {
        singular(&self.name)
    }

    /// The path parameter key this resource's identifier appears under.
    ///
    /// Leaf resources use the configured param verbatim. A resource with
    /// children namespaces it (`forum` + `id` → `forum_id`) on all of its
    /// member routes and descendant prefixes, keeping parameter names
    /// unambiguous within one route and consistent across sibling routes —
    /// radix-tree hosts reject conflicting names at the same position.
    fn param_key(&self) -> String {
        if self.children.is_empty() {
            self.param.clone()
        } else {
            format!("{}_{}", self.attach_key(), self.param)
        }
    }
}

// ── Resources ────────────────────────────────────────────────────────────────

/// The resource registry: declare, nest, then mount.
///
/// ```rust
/// use resourceful::{Action, Request, Resources, Response, Router};
///
/// let mut app = Resources::new();
/// app.resource("forums").on(Action::Index, |_req: Request| async {
///     Response::text("forum index")
/// });
/// app.resource("threads").on(Action::Index, |_req: Request| async {
///     Response::text("thread index")
/// });
/// app.nest("forums", "threads").unwrap();
///
/// let mut router = Router::new();
/// app.mount(&mut router);
/// // GET /forums            → forum index
/// // GET /forums/{forum_id}/threads → thread index
/// ```
pub struct Resources {
    entries: Vec<Resource>,
    index: HashMap<String, usize>,
}

impl Resources {
    pub fn new() -> Self {
        Self { entries: Vec::new(), index: HashMap::new() }
    }

    /// Declares a resource, or returns the one previously declared under
    /// `name`. The name may contain path segments (`"api/cats"`).
    pub fn resource(&mut self, name: &str) -> &mut Resource {
        let name = name.trim_matches('/');
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.entries.push(Resource::new(name));
                self.index.insert(name.to_owned(), idx);
                idx
            }
        };
        &mut self.entries[idx]
    }

    /// The name-less resource mounted at `/`.
    pub fn root(&mut self) -> &mut Resource {
        self.resource("")
    }

    /// Nests `child` under `parent`.
    ///
    /// The child's routes move under the parent's member path
    /// (`/forums/{forum_id}/threads/…`), and the parent's loader (if any)
    /// runs before the child's on every nested route. A resource nests under
    /// at most one parent, and never under itself or a descendant.
    pub fn nest(&mut self, parent: &str, child: &str) -> Result<(), Error> {
        let parent_idx = self.lookup(parent)?;
        let child_idx = self.lookup(child)?;

        if let Some(existing) = self.entries[child_idx].parent {
            return Err(Error::AlreadyNested {
                child: child.to_owned(),
                parent: self.entries[existing].name.clone(),
            });
        }

        // Walk up from the parent; finding the child means a cycle.
        let mut cursor = Some(parent_idx);
        while let Some(idx) = cursor {
            if idx == child_idx {
                return Err(Error::NestingCycle {
                    parent: parent.to_owned(),
                    child: child.to_owned(),
                });
            }
            cursor = self.entries[idx].parent;
        }

        self.entries[child_idx].parent = Some(parent_idx);
        self.entries[parent_idx].children.push(child_idx);
        Ok(())
    }

    /// Materializes the full route table.
    ///
    /// Walks each resource tree from its root, deriving paths from the
    /// ancestor chain and wrapping handlers in the autoload pipeline.
    /// Actions that were never registered produce no route.
    pub fn routes(&self) -> Vec<Route> {
        let mut out = Vec::new();
        for (idx, resource) in self.entries.iter().enumerate() {
            if resource.parent.is_none() {
                self.collect(idx, "", &[], &mut out);
            }
        }
        out
    }

    /// Registers every materialized route on the host.
    pub fn mount<M: Mount>(&self, host: &mut M) {
        for route in self.routes() {
            debug!(method = %route.method, path = %route.path, "mounting route");
            host.route(route.method, &route.path, route.handler);
        }
    }

    fn lookup(&self, name: &str) -> Result<usize, Error> {
        self.index
            .get(name.trim_matches('/'))
            .copied()
            .ok_or_else(|| Error::UnknownResource(name.to_owned()))
    }

    fn collect(&self, idx: usize, prefix: &str, ancestors: &[Stage], out: &mut Vec<Route>) {
        let resource = &self.entries[idx];
        let base = if resource.name.is_empty() {
            prefix.to_owned()
        } else {
            format!("{prefix}/{}", resource.name)
        };
        let param = resource.param_key();

        // Member routes resolve the full chain; collection routes carry no
        // identifier for this resource, so only ancestors apply.
        let collection_stages = ancestors.to_vec();
        let mut member_stages = ancestors.to_vec();
        if let Some(loader) = &resource.loader {
            member_stages.push(Stage {
                param: param.clone(),
                key: resource.attach_key(),
                loader: Arc::clone(loader),
            });
        }

        for (action, handler) in &resource.actions {
            let stages = if action.is_member() {
                member_stages.clone()
            } else {
                collection_stages.clone()
            };
            out.push(Route {
                method: action.method(),
                path: action.path(&base, &param),
                handler: Pipeline::wrap(stages, Arc::clone(handler)),
            });
        }

        for extra in &resource.extra {
            let (path, stages) = if extra.member {
                (format!("{base}/{{{param}}}/{}", extra.segment), member_stages.clone())
            } else {
                (format!("{base}{}", extra.segment), collection_stages.clone())
            };
            out.push(Route {
                method: extra.method.clone(),
                path,
                handler: Pipeline::wrap(stages, Arc::clone(&extra.handler)),
            });
        }

        let child_prefix = format!("{base}/{{{param}}}");
        for &child in &resource.children {
            self.collect(child, &child_prefix, &member_stages, out);
        }
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self::new()
    }
}

// ── Route ────────────────────────────────────────────────────────────────────

/// One materialized route: method, path, and the composed handler.
pub struct Route {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) handler: BoxedHandler,
}

impl Route {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

// ── Name helpers ─────────────────────────────────────────────────────────────

/// Naive English singular of the last name segment.
///
/// `"forums"` → `"forum"`, `"categories"` → `"category"`, `"address"` stays.
/// The root resource (empty name) attaches under `"record"`.
fn singular(name: &str) -> String {
    let last = name.rsplit('/').next().unwrap_or(name);
    if last.is_empty() {
        "record".to_owned()
    } else if let Some(stem) = last.strip_suffix("ies") {
        format!("{stem}y")
    } else if last.ends_with('s') && !last.ends_with("ss") {
        last[..last.len() - 1].to_owned()
    } else {
        last.to_owned()
    }
}
