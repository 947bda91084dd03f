//! Autoloading and nesting: loaders resolving path identifiers, 404
//! short-circuits, and root-to-leaf loader composition on nested routes.

use http::{Method, StatusCode};
use resourceful::{Action, Error, Request, Resources, Response, Router};

fn mounted(app: &Resources) -> Router {
    let mut router = Router::new();
    app.mount(&mut router);
    router
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

struct Forum {
    title: String,
}

struct Thread {
    title: String,
}

async fn get_forum(id: String) -> Option<Forum> {
    (id == "12").then(|| Forum { title: "Ferrets".to_owned() })
}

async fn get_thread(id: String) -> Option<Thread> {
    (id == "1").then(|| Thread { title: "Tobi rules".to_owned() })
}

const PETS: [&str; 3] = ["tobi", "jane", "loki"];

async fn get_pet(id: String) -> Option<String> {
    let idx: usize = id.parse().ok()?;
    PETS.get(idx).map(|name| (*name).to_owned())
}

// ── Autoloading ──────────────────────────────────────────────────────────────

async fn show_forum_title(req: Request) -> Response {
    let forum: &Forum = req.record("forum").unwrap();
    Response::text(forum.title.clone())
}

#[tokio::test]
async fn attaches_the_loaded_record() {
    let mut app = Resources::new();
    app.resource("forum").load(get_forum).on(Action::Show, show_forum_title);

    let router = mounted(&app);
    let res = router.dispatch(Method::GET, "/forum/12").await;
    assert_eq!(res.status_code(), StatusCode::OK);
    assert_eq!(res.body_text(), "Ferrets");
}

async fn show_must_not_run(_req: Request) -> Response {
    panic!("handler ran for a record the loader never produced");
}

#[tokio::test]
async fn missing_record_short_circuits_with_404() {
    let mut app = Resources::new();
    app.resource("pets").load(get_pet).on(Action::Show, show_must_not_run);

    let router = mounted(&app);
    let res = router.dispatch(Method::GET, "/pets/9").await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn collection_routes_skip_the_loader() {
    let mut app = Resources::new();
    app.resource("pets")
        .load(|_id: String| async { None::<String> })
        .on(Action::Index, |_req: Request| async { Response::text("pet index") });

    // index carries no identifier — a loader that always fails must not
    // affect it
    let router = mounted(&app);
    let res = router.dispatch(Method::GET, "/pets").await;
    assert_eq!(res.body_text(), "pet index");
}

#[tokio::test]
async fn member_mappings_run_the_loader() {
    let mut app = Resources::new();
    app.resource("pets")
        .load(get_pet)
        .map(Method::GET, "feed", |req: Request| async move {
            let pet: &String = req.record("pet").unwrap();
            Response::text(format!("fed {pet}"))
        });

    let router = mounted(&app);
    assert_eq!(router.dispatch(Method::GET, "/pets/0/feed").await.body_text(), "fed tobi");

    let res = router.dispatch(Method::GET, "/pets/9/feed").await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

// ── Nesting ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn nested_routes_prefix_the_parent_path() {
    let mut app = Resources::new();
    app.resource("users");
    app.resource("pets")
        .load(get_pet)
        .on(Action::Index, |_req: Request| async {
            Response::json(br#"["tobi","jane","loki"]"#.to_vec())
        })
        .on(Action::Show, |req: Request| async move {
            let pet: &String = req.record("pet").unwrap();
            Response::text(pet.clone())
        });
    app.nest("users", "pets").unwrap();

    let router = mounted(&app);

    let res = router.dispatch(Method::GET, "/users/1/pets").await;
    assert_eq!(res.body_text(), r#"["tobi","jane","loki"]"#);

    let res = router.dispatch(Method::GET, "/users/1/pets/0").await;
    assert_eq!(res.body_text(), "tobi");

    // the un-nested collection path no longer exists
    let res = router.dispatch(Method::GET, "/pets").await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn loaders_compose_root_to_leaf() {
    let mut app = Resources::new();
    app.resource("forum").load(get_forum);
    app.resource("thread")
        .load(get_thread)
        .on(Action::Show, |req: Request| async move {
            let forum: &Forum = req.record("forum").unwrap();
            let thread: &Thread = req.record("thread").unwrap();
            Response::text(format!("{}: {}", forum.title, thread.title))
        });
    app.nest("forum", "thread").unwrap();

    let router = mounted(&app);
    let res = router.dispatch(Method::GET, "/forum/12/thread/1").await;
    assert_eq!(res.status_code(), StatusCode::OK);
    assert_eq!(res.body_text(), "Ferrets: Tobi rules");
}

#[tokio::test]
async fn ancestor_loader_failure_aborts_the_chain() {
    let mut app = Resources::new();
    app.resource("forum").load(get_forum);
    app.resource("thread").load(get_thread).on(Action::Show, show_must_not_run);
    app.nest("forum", "thread").unwrap();

    let router = mounted(&app);

    // unknown forum — the thread loader and handler must never run
    let res = router.dispatch(Method::GET, "/forum/99/thread/1").await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);

    // known forum, unknown thread
    let res = router.dispatch(Method::GET, "/forum/12/thread/9").await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn parent_member_routes_share_the_namespaced_parameter() {
    let mut app = Resources::new();
    app.resource("forum")
        .load(get_forum)
        .on(Action::Show, show_forum_title);
    app.resource("thread").on(Action::Index, |req: Request| async move {
        let forum: &Forum = req.record("forum").unwrap();
        Response::text(format!("threads of {}", forum.title))
    });
    app.nest("forum", "thread").unwrap();

    let mut paths: Vec<String> = app.routes().iter().map(|r| r.path().to_owned()).collect();
    paths.sort();
    assert_eq!(
        paths,
        vec!["/forum/{forum_id}".to_owned(), "/forum/{forum_id}/thread".to_owned()],
    );

    let router = mounted(&app);
    assert_eq!(router.dispatch(Method::GET, "/forum/12").await.body_text(), "Ferrets");
    assert_eq!(
        router.dispatch(Method::GET, "/forum/12/thread").await.body_text(),
        "threads of Ferrets",
    );
}

// ── Nesting errors ───────────────────────────────────────────────────────────

#[test]
fn nest_rejects_unknown_names() {
    let mut app = Resources::new();
    app.resource("forums");
    assert_eq!(
        app.nest("forums", "threads"),
        Err(Error::UnknownResource("threads".to_owned())),
    );
    assert_eq!(
        app.nest("boards", "forums"),
        Err(Error::UnknownResource("boards".to_owned())),
    );
}

#[test]
fn nest_rejects_double_nesting() {
    let mut app = Resources::new();
    app.resource("users");
    app.resource("forums");
    app.resource("pets");
    app.nest("users", "pets").unwrap();
    assert_eq!(
        app.nest("forums", "pets"),
        Err(Error::AlreadyNested { child: "pets".to_owned(), parent: "users".to_owned() }),
    );
}

#[test]
fn nest_rejects_cycles() {
    let mut app = Resources::new();
    app.resource("forums");
    app.resource("threads");
    app.nest("forums", "threads").unwrap();

    assert_eq!(
        app.nest("threads", "forums"),
        Err(Error::NestingCycle { parent: "threads".to_owned(), child: "forums".to_owned() }),
    );
    assert_eq!(
        app.nest("forums", "forums"),
        Err(Error::NestingCycle { parent: "forums".to_owned(), child: "forums".to_owned() }),
    );
}
