//! End-to-end API tests driving the router directly with tower's oneshot.
//!
//! Each test gets its own SQLite database in a tempdir.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use blogd_server::db::{create_pool, migrations};
use blogd_server::http::{build_router, AppState};

struct TestApp {
    app: Router,
    // Keep the tempdir alive for the duration of the test
    _dir: tempfile::TempDir,
}

async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("tempdir");
    let pool = create_pool(dir.path().join("blog.db"))
        .await
        .expect("pool creation failed");
    migrations::run(&pool).await.expect("migrations failed");

    TestApp {
        app: build_router(AppState { pool }),
        _dir: dir,
    }
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read failed");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("invalid JSON body")
    };

    (status, value)
}

fn minimal_blog() -> Value {
    json!({
        "title": "Ownership in Rust",
        "author": "jane",
        "read_time": "8 min",
        "date": "2024-05-01"
    })
}

fn full_blog() -> Value {
    json!({
        "title": "Async Rust Patterns",
        "author": "Morgan",
        "read_time": "12 min",
        "date": "2024-06-15",
        "github_link": "https://github.com/morgan/async-patterns",
        "introduction": {
            "summary": "Why async is hard and what to do about it",
            "images": "intro.png",
            "topics": ["executors", "pinning", "cancellation"]
        },
        "paragraph": [
            {
                "order": 1,
                "title": "Executors",
                "content": "An executor polls futures to completion.",
                "images": "executors.png",
                "bullets": ["tokio", "smol"]
            },
            {
                "order": 2,
                "title": "Pinning",
                "content": "Pin prevents moves of self-referential futures.",
                "bullets": []
            }
        ],
        "resources": ["https://tokio.rs", "https://rust-lang.github.io/async-book/"],
        "acknowledgments": ["the async WG"]
    })
}

async fn create(app: &Router, payload: Value) -> i64 {
    let (status, body) = send(app, "POST", "/api/blog", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
    assert_eq!(body["status"], true);
    body["blog_id"].as_i64().expect("blog_id missing")
}

#[tokio::test]
async fn create_minimal_blog_yields_empty_sections() {
    let harness = spawn_app().await;
    let id = create(&harness.app, minimal_blog()).await;

    let (status, body) = send(&harness.app, "GET", &format!("/api/blog/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], true);

    let data = &body["data"];
    assert_eq!(data["introduction"]["summary"], "");
    assert_eq!(data["introduction"]["images"], "");
    assert_eq!(data["introduction"]["topics"], json!([]));
    assert_eq!(data["paragraph"], json!([]));
    assert_eq!(data["resources"], json!([]));
    assert_eq!(data["acknowledgments"], json!([]));
    assert!(data["github_link"].is_null());
}

#[tokio::test]
async fn get_by_id_omits_id_but_list_includes_it() {
    let harness = spawn_app().await;
    let id = create(&harness.app, minimal_blog()).await;

    let (_, by_id) = send(&harness.app, "GET", &format!("/api/blog/{}", id), None).await;
    assert!(by_id["data"].get("id").is_none(), "get-by-id must omit id");

    let (status, list) = send(&harness.app, "GET", "/api/blogs", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["data"][0]["id"], id);
}

#[tokio::test]
async fn missing_required_field_is_400_and_persists_nothing() {
    let harness = spawn_app().await;

    for field in ["title", "author", "read_time", "date"] {
        let mut payload = minimal_blog();
        payload.as_object_mut().unwrap().remove(field);
        let (status, body) = send(&harness.app, "POST", "/api/blog", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "field: {}", field);
        assert!(body["error"].is_string());
    }

    // Empty string counts as missing too
    let mut payload = minimal_blog();
    payload["title"] = json!("");
    let (status, _) = send(&harness.app, "POST", "/api/blog", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send(&harness.app, "GET", "/api/blogs", None).await;
    assert_eq!(list["data"], json!([]));

    // A corrected retry creates exactly one blog
    create(&harness.app, minimal_blog()).await;
    let (_, list) = send(&harness.app, "GET", "/api/blogs", None).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_paragraph_is_400_and_persists_nothing() {
    let harness = spawn_app().await;

    // One bad paragraph rejects the whole create; no partial document
    // may be visible afterwards.
    let mut payload = full_blog();
    payload["paragraph"]
        .as_array_mut()
        .unwrap()
        .push(json!({ "order": 3, "title": "broken" }));

    let (status, _) = send(&harness.app, "POST", "/api/blog", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send(&harness.app, "GET", "/api/blogs", None).await;
    assert_eq!(list["data"], json!([]));
}

#[tokio::test]
async fn nested_structure_round_trips() {
    let harness = spawn_app().await;
    let id = create(&harness.app, full_blog()).await;

    let (status, body) = send(&harness.app, "GET", &format!("/api/blog/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];

    assert_eq!(data["title"], "Async Rust Patterns");
    assert_eq!(data["author"], "Morgan");
    assert_eq!(data["read_time"], "12 min");
    assert_eq!(data["date"], "2024-06-15");
    assert_eq!(data["github_link"], "https://github.com/morgan/async-patterns");

    let intro = &data["introduction"];
    assert_eq!(intro["summary"], "Why async is hard and what to do about it");
    assert_eq!(intro["images"], "intro.png");
    assert_eq!(intro["topics"], json!(["executors", "pinning", "cancellation"]));

    let paragraphs = data["paragraph"].as_array().unwrap();
    assert_eq!(paragraphs.len(), 2);
    assert_eq!(paragraphs[0]["order"], 1);
    assert_eq!(paragraphs[0]["bullets"], json!(["tokio", "smol"]));
    assert_eq!(paragraphs[1]["order"], 2);
    assert_eq!(paragraphs[1]["bullets"], json!([]));
    // Absent optional images on a stored paragraph serializes as null
    assert!(paragraphs[1]["images"].is_null());

    assert_eq!(
        data["resources"],
        json!(["https://tokio.rs", "https://rust-lang.github.io/async-book/"])
    );
    assert_eq!(data["acknowledgments"], json!(["the async WG"]));
}

#[tokio::test]
async fn paragraphs_keep_insertion_order_not_order_field() {
    let harness = spawn_app().await;

    let mut payload = minimal_blog();
    payload["paragraph"] = json!([
        { "order": 9, "title": "submitted first", "content": "a" },
        { "order": 1, "title": "submitted second", "content": "b" }
    ]);
    let id = create(&harness.app, payload).await;

    let (_, body) = send(&harness.app, "GET", &format!("/api/blog/{}", id), None).await;
    let paragraphs = body["data"]["paragraph"].as_array().unwrap();
    assert_eq!(paragraphs[0]["title"], "submitted first");
    assert_eq!(paragraphs[0]["order"], 9);
    assert_eq!(paragraphs[1]["title"], "submitted second");
}

#[tokio::test]
async fn empty_summary_skips_introduction_entirely() {
    let harness = spawn_app().await;

    let mut payload = minimal_blog();
    payload["introduction"] = json!({
        "summary": "",
        "images": "cover.png",
        "topics": ["dropped", "with", "the", "introduction"]
    });
    let id = create(&harness.app, payload).await;

    let (_, body) = send(&harness.app, "GET", &format!("/api/blog/{}", id), None).await;
    let intro = &body["data"]["introduction"];
    assert_eq!(intro["summary"], "");
    assert_eq!(intro["images"], "");
    assert_eq!(intro["topics"], json!([]));
}

#[tokio::test]
async fn get_unknown_id_is_404_not_found() {
    let harness = spawn_app().await;

    let (status, body) = send(&harness.app, "GET", "/api/blog/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let message = body["error"].as_str().unwrap();
    assert!(message.to_lowercase().contains("not found"), "got: {}", message);
}

#[tokio::test]
async fn search_matches_title_author_and_github_link() {
    let harness = spawn_app().await;
    create(&harness.app, full_blog()).await;
    create(&harness.app, minimal_blog()).await;

    // Title substring, mixed case
    let (status, body) = send(&harness.app, "GET", "/api/blogs/search?keyword=ASYNC", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["title"], "Async Rust Patterns");

    // Author
    let (_, body) = send(&harness.app, "GET", "/api/blogs/search?keyword=morgan", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // github_link substring
    let (_, body) = send(
        &harness.app,
        "GET",
        "/api/blogs/search?keyword=github.com",
        None,
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // Search documents carry ids
    assert!(body["data"][0]["id"].is_i64());
}

#[tokio::test]
async fn search_without_match_is_200_empty() {
    let harness = spawn_app().await;
    create(&harness.app, minimal_blog()).await;

    let (status, body) = send(
        &harness.app,
        "GET",
        "/api/blogs/search?keyword=zzznomatch",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], true);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn search_without_keyword_is_400_with_status_false() {
    let harness = spawn_app().await;

    for uri in ["/api/blogs/search", "/api/blogs/search?keyword="] {
        let (status, body) = send(&harness.app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
        assert_eq!(body["status"], false);
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn health_endpoint_responds() {
    let harness = spawn_app().await;

    let (status, body) = send(&harness.app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
