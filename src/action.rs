//! The closed set of conventional CRUD actions.
//!
//! Every action maps to a fixed (HTTP method, path template) pair at
//! registration time. An enumerated table, looked up once when the route
//! table is materialized — no reflection, no string dispatch.

use std::fmt;

use http::Method;

/// One of the seven conventional CRUD actions.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Action {
    /// `GET /name` — list the collection.
    Index,
    /// `GET /name/new` — form for a new record.
    New,
    /// `POST /name` — create a record.
    Create,
    /// `GET /name/{id}` — fetch one record.
    Show,
    /// `GET /name/{id}/edit` — form for editing a record.
    Edit,
    /// `PUT /name/{id}` — replace a record.
    Update,
    /// `DELETE /name/{id}` — remove a record.
    Destroy,
}

impl Action {
    /// Lowercase action name (e.g. `"index"`), as it appears in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Index   => "index",
            Self::New     => "new",
            Self::Create  => "create",
            Self::Show    => "show",
            Self::Edit    => "edit",
            Self::Update  => "update",
            Self::Destroy => "destroy",
        }
    }

    /// The HTTP method this action answers to.
    pub fn method(self) -> Method {
        match self {
            Self::Index | Self::New | Self::Show | Self::Edit => Method::GET,
            Self::Create  => Method::POST,
            Self::Update  => Method::PUT,
            Self::Destroy => Method::DELETE,
        }
    }

    /// Whether the action's path carries the resource identifier.
    ///
    /// Member actions get the autoload stage for their own resource;
    /// collection actions only inherit ancestor stages.
    pub(crate) fn is_member(self) -> bool {
        matches!(self, Self::Show | Self::Edit | Self::Update | Self::Destroy)
    }

    /// Renders the action's path relative to the collection base.
    ///
    /// `base` never ends in a slash (the root resource's base is `""`), so
    /// a bare collection action on the root resource still renders `/`.
    pub(crate) fn path(self, base: &str, param: &str) -> String {
        let path = match self {
            Self::Index | Self::Create => base.to_owned(),
            Self::New                  => format!("{base}/new"),
            Self::Show | Self::Update | Self::Destroy => format!("{base}/{{{param}}}"),
            Self::Edit                 => format!("{base}/{{{param}}}/edit"),
        };
        if path.is_empty() { "/".to_owned() } else { path }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
