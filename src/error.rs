//! Unified error type.

use std::fmt;

/// Errors reported by the resource registry.
///
/// Request-level failures (a loader finding nothing, an unmapped path) are
/// expressed as `404` responses, not as `Error`s. This type surfaces setup
/// mistakes from [`Resources::nest`](crate::Resources::nest).
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// `nest` named a resource that was never declared.
    UnknownResource(String),
    /// The child is already nested under a parent.
    AlreadyNested { child: String, parent: String },
    /// Nesting would make a resource its own ancestor.
    NestingCycle { parent: String, child: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownResource(name) => write!(f, "unknown resource `{name}`"),
            Self::AlreadyNested { child, parent } => {
                write!(f, "resource `{child}` is already nested under `{parent}`")
            }
            Self::NestingCycle { parent, child } => {
                write!(f, "nesting `{child}` under `{parent}` would create a cycle")
            }
        }
    }
}

impl std::error::Error for Error {}
