//! # resourceful
//!
//! Convention-driven CRUD resource routing. Nothing more. Nothing less.
//!
//! ## The contract
//!
//! Your HTTP framework owns the socket, the parser, and the dispatch loop.
//! resourceful does not — by design. You hand it a named collection and a set
//! of action handlers; it hands your router the conventional route table:
//!
//! | Action  | Method | Path                |
//! |---------|--------|---------------------|
//! | index   | GET    | `/forums`           |
//! | new     | GET    | `/forums/new`       |
//! | create  | POST   | `/forums`           |
//! | show    | GET    | `/forums/{id}`      |
//! | edit    | GET    | `/forums/{id}/edit` |
//! | update  | PUT    | `/forums/{id}`      |
//! | destroy | DELETE | `/forums/{id}`      |
//!
//! On top of the table you get:
//!
//! - **Autoloading** — a per-resource loader resolves the path identifier to
//!   a record before the handler runs; a missing record short-circuits the
//!   request with `404` and the handler is never invoked.
//! - **Nesting** — resources compose into trees
//!   (`/forums/{forum_id}/threads`), with ancestor loaders running
//!   root-to-leaf so a handler can reach every record on the chain.
//! - **Ad-hoc routes** — extra member or collection routes under the
//!   resource's base path.
//!
//! Routes mount onto anything implementing [`Mount`]. A matchit-backed
//! [`Router`] ships in the box for standalone use and testing.
//!
//! ## Quick start
//!
//! ```rust
//! use resourceful::{Action, Request, Resources, Response, Router};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut app = Resources::new();
//! app.resource("forums")
//!     .on(Action::Index, list_forums)
//!     .on(Action::Show, show_forum);
//!
//! let mut router = Router::new();
//! app.mount(&mut router);
//!
//! let res = router.dispatch(http::Method::GET, "/forums/12").await;
//! assert_eq!(res.status_code(), http::StatusCode::OK);
//! # }
//!
//! async fn list_forums(_req: Request) -> Response {
//!     Response::json(br#"["rust","ferrets"]"#.to_vec())
//! }
//!
//! async fn show_forum(req: Request) -> Response {
//!     let id = req.param("id").unwrap_or("unknown");
//!     Response::text(format!("forum {id}"))
//! }
//! ```

mod action;
mod error;
mod handler;
mod loader;
mod pipeline;
mod request;
mod resource;
mod response;
mod router;

pub use action::Action;
pub use error::Error;
pub use handler::{BoxedHandler, Handler};
#[doc(hidden)]
pub use handler::ErasedHandler;
pub use request::Request;
pub use resource::{Resource, Resources, Route};
pub use response::{IntoResponse, Response};
pub use router::{Mount, Router};
