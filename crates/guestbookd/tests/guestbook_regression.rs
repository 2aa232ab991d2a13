//! Guestbook end-to-end regression tests.
//!
//! Drives the full router the way the fronting platform would: ticket
//! headers, query parameters, urlencoded form posts.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use guestbook_auth::AuthUrls;
use guestbook_state::GreetingStore;
use guestbook_web::cache::LastWriteCache;
use guestbook_web::fetch::{ContentFetcher, FetchResult};
use guestbook_web::{WebState, build_router};

struct StaticFetcher(&'static str);

#[async_trait]
impl ContentFetcher for StaticFetcher {
    async fn fetch(&self, _url: &str) -> FetchResult<Vec<u8>> {
        Ok(self.0.as_bytes().to_vec())
    }
}

fn test_state(payload: &'static str) -> WebState {
    WebState {
        store: GreetingStore::open_in_memory().unwrap(),
        cache: LastWriteCache::new(),
        fetcher: Arc::new(StaticFetcher(payload)),
        auth_urls: AuthUrls::new("/auth"),
    }
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-guestbook-api-ticket", "ticket-1")
        .body(Body::empty())
        .unwrap()
}

fn sign_request(uri: &str, user: Option<(&str, &str)>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("x-guestbook-api-ticket", "ticket-1")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some((user_id, email)) = user {
        builder = builder
            .header("x-guestbook-user-id", user_id)
            .header("x-guestbook-user-email", email);
    }
    builder
        .body(Body::from("content=http%3A%2F%2Fexample.com%2Fhello"))
        .unwrap()
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn index_renders_empty_guestbook() {
    let router = build_router(test_state("unused"));

    let resp = router.oneshot(get_request("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp).await;
    assert!(body.contains("default_guestbook"));
}

#[tokio::test]
async fn sign_then_list_shows_greeting() {
    let state = test_state("hello from example.com");
    let router = build_router(state);

    let resp = router
        .clone()
        .oneshot(sign_request("/sign?guestbook_name=test", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp.headers().get("location").unwrap().to_str().unwrap();
    assert_eq!(location, "/?guestbook_name=test");

    let resp = router
        .oneshot(get_request("/?guestbook_name=test"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("hello from example.com"));
}

#[tokio::test]
async fn greetings_do_not_cross_guestbooks() {
    let state = test_state("greetings payload");
    let router = build_router(state);

    router
        .clone()
        .oneshot(sign_request("/sign?guestbook_name=alpha", None))
        .await
        .unwrap();

    let resp = router
        .oneshot(get_request("/?guestbook_name=beta"))
        .await
        .unwrap();
    let body = body_string(resp).await;
    assert!(!body.contains("greetings payload"));
}

#[tokio::test]
async fn authenticated_sign_shows_author() {
    let state = test_state("signed note");
    let router = build_router(state);

    router
        .clone()
        .oneshot(sign_request(
            "/sign?guestbook_name=test",
            Some(("user-42", "visitor@example.com")),
        ))
        .await
        .unwrap();

    let resp = router
        .oneshot(get_request("/?guestbook_name=test"))
        .await
        .unwrap();
    let body = body_string(resp).await;
    assert!(body.contains("user-42 (visitor@example.com)"));
}

#[tokio::test]
async fn anonymous_sign_stores_no_author() {
    let state = test_state("anon note");
    let router = build_router(state.clone());

    router
        .oneshot(sign_request("/sign?guestbook_name=test", None))
        .await
        .unwrap();

    let greetings = state.store.list_greetings("test", 10).unwrap();
    assert_eq!(greetings.len(), 1);
    assert!(greetings[0].author.is_none());
}

#[tokio::test]
async fn newest_greetings_render_first() {
    let state = test_state("entry");
    let router = build_router(state.clone());

    for _ in 0..3 {
        router
            .clone()
            .oneshot(sign_request("/sign?guestbook_name=test", None))
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let greetings = state.store.list_greetings("test", 10).unwrap();
    assert_eq!(greetings.len(), 3);
    for pair in greetings.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
async fn missing_ticket_fails_both_routes() {
    let router = build_router(test_state("unused"));

    let resp = router
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/sign")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("content=http%3A%2F%2Fexample.com"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn last_write_footer_appears_after_sign() {
    let state = test_state("note");
    let router = build_router(state);

    let before = body_string(router.clone().oneshot(get_request("/")).await.unwrap()).await;
    assert!(!before.contains("Last write:"));

    router
        .clone()
        .oneshot(sign_request("/sign", None))
        .await
        .unwrap();

    let after = body_string(router.oneshot(get_request("/")).await.unwrap()).await;
    assert!(after.contains("Last write:"));
}
