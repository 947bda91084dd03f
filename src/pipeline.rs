//! The autoload pipeline: resolve stages composed before the handler.
//!
//! Each materialized route with at least one loader on its resource chain is
//! wrapped in a [`Pipeline`] — an ordered list of resolve [`Stage`]s followed
//! by the action handler. Stages run root-to-leaf: the parent record is
//! attached before the child loader runs, so a child loader or the final
//! handler can reference every ancestor record. The first stage that comes
//! up empty ends the request with `404`; the handler never runs.

use http::StatusCode;
use tracing::trace;

use crate::handler::{BoxFuture, BoxedHandler, ErasedHandler};
use crate::loader::BoxedLoader;
use crate::request::Request;
use crate::response::Response;

/// One resolve step: pull `param` from the path, run the loader, attach the
/// record under `key`.
#[derive(Clone)]
pub(crate) struct Stage {
    pub(crate) param: String,
    pub(crate) key: String,
    pub(crate) loader: BoxedLoader,
}

pub(crate) struct Pipeline {
    stages: Vec<Stage>,
    handler: BoxedHandler,
}

impl Pipeline {
    /// Wraps `handler`, or returns it untouched when there is nothing to
    /// resolve.
    pub(crate) fn wrap(stages: Vec<Stage>, handler: BoxedHandler) -> BoxedHandler {
        if stages.is_empty() {
            handler
        } else {
            std::sync::Arc::new(Self { stages, handler })
        }
    }
}

impl ErasedHandler for Pipeline {
    fn call(&self, req: Request) -> BoxFuture {
        let stages = self.stages.clone();
        let handler = std::sync::Arc::clone(&self.handler);

        Box::pin(async move {
            let mut req = req;
            for stage in &stages {
                // The param is always present in the template; a miss here
                // means the host matched a different route shape.
                let Some(id) = req.param(&stage.param).map(str::to_owned) else {
                    return Response::status(StatusCode::NOT_FOUND);
                };

                match (stage.loader)(id).await {
                    Some(record) => req.attach(&stage.key, record),
                    None => {
                        trace!(record = %stage.key, "loader found nothing, short-circuiting");
                        return Response::status(StatusCode::NOT_FOUND);
                    }
                }
            }
            handler.call(req).await
        })
    }
}
