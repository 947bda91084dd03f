//! Minimal resourceful example — nested forum/thread resources with
//! autoloading, dispatched in memory against the bundled router.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example forum

use http::Method;
use resourceful::{Action, Request, Resources, Response, Router};

struct Forum {
    title: String,
}

struct Thread {
    title: String,
}

// Real app: a database lookup. Absence maps to None — the route answers 404
// and the handler never runs.
async fn get_forum(id: String) -> Option<Forum> {
    (id == "12").then(|| Forum { title: "Ferrets".to_owned() })
}

async fn get_thread(id: String) -> Option<Thread> {
    (id == "1").then(|| Thread { title: "Tobi rules".to_owned() })
}

// GET /forum/{forum_id}/thread/{id}
//
// Both loaders have already run — the records are on the request.
async fn show_thread(req: Request) -> Response {
    let forum: &Forum = req.record("forum").unwrap();
    let thread: &Thread = req.record("thread").unwrap();
    Response::text(format!("{}: {}", forum.title, thread.title))
}

// GET /forum/{forum_id}/thread
async fn list_threads(req: Request) -> Response {
    let forum: &Forum = req.record("forum").unwrap();
    Response::text(format!("threads of {}", forum.title))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let mut app = Resources::new();
    app.resource("forum").load(get_forum);
    app.resource("thread")
        .load(get_thread)
        .on(Action::Index, list_threads)
        .on(Action::Show, show_thread);
    app.nest("forum", "thread").expect("nesting failed");

    let mut router = Router::new();
    app.mount(&mut router);

    for path in ["/forum/12/thread/1", "/forum/12/thread", "/forum/99/thread/1"] {
        let res = router.dispatch(Method::GET, path).await;
        println!("GET {path} → {} {}", res.status_code(), res.body_text());
    }
}
