//! HTTP API tests
//!
//! Each test spawns the full Axum app over a fresh in-memory store.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, location, publish, register, register_body, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));

    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready_follows_store() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    server.store.set_unavailable(true);
    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
}

// ============================================================================
// Public pages
// ============================================================================

#[tokio::test]
async fn test_about_and_unknown_route() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/about").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["title"], "About");

    let response = server.get("/no/such/page").await.unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_home_pagination() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["items"], json!([]));
    assert_eq!(body["pagination"]["number"], 1);

    let alice = register(&server, "alice").await.unwrap();
    for i in 0..6 {
        publish(&server, &alice.access_token, &format!("Post {i}"), "body")
            .await
            .unwrap();
    }

    let response = server.get("/").await.unwrap();
    let page: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let items = page["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["title"], "Post 5");
    assert_eq!(page["pagination"]["has_next"], true);

    let response = server.get("/?page=last").await.unwrap();
    let page: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page["pagination"]["number"], 2);
    assert_eq!(page["items"][0]["title"], "Post 0");

    for query in ["/?page=0", "/?page=abc", "/?page=3"] {
        let response = server.get(query).await.unwrap();
        let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
        assert_eq!(body["error"]["code"], "INVALID_PAGE", "{query}");
    }
}

#[tokio::test]
async fn test_user_posts() {
    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server, "alice").await.unwrap();
    let bob = register(&server, "bob").await.unwrap();
    publish(&server, &alice.access_token, "By alice", "x").await.unwrap();
    publish(&server, &bob.access_token, "By bob", "y").await.unwrap();

    let response = server.get("/user/alice").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["author"]["username"], "alice");
    let posts = body["posts"]["items"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["author"], "alice");

    let response = server.get("/user/nobody").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    let server = TestServer::start().await.expect("Failed to start server");

    let session = register(&server, "alice").await.unwrap();
    assert_eq!(session.user.username, "alice");
    assert_eq!(session.user.email, "alice@example.com");
    assert!(!session.access_token.is_empty());

    let response = server
        .post(
            "/login",
            &json!({ "username": "alice", "password": integration_tests::PASSWORD }),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["user"]["id"], session.user.id);

    let response = server
        .post("/login", &json!({ "username": "alice", "password": "wrong-password" }))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_register_errors() {
    let server = TestServer::start().await.expect("Failed to start server");
    register(&server, "alice").await.unwrap();

    let response = server.post("/register", &register_body("alice")).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server
        .post(
            "/register",
            &json!({ "username": "bob", "email": "not-an-email", "password": "plum-Orchard-42" }),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(body["error"]["details"]["email"].is_array());

    let response = server
        .post(
            "/register",
            &json!({ "username": "carol", "email": "carol@example.com", "password": "password" }),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(body["error"]["details"]["password"].is_array());
}

#[tokio::test]
async fn test_refresh_token() {
    let server = TestServer::start().await.expect("Failed to start server");
    let session = register(&server, "alice").await.unwrap();

    let response = server
        .post(
            "/token/refresh",
            &json!({ "refresh_token": session.refresh_token }),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["access_token"].is_string());

    let response = server
        .post("/token/refresh", &json!({ "refresh_token": "garbage" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_login_required_redirects() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/post/new").await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response).as_deref(),
        Some("/login?next=%2Fpost%2Fnew")
    );

    let response = server
        .post("/post/new", &json!({ "title": "t", "content": "c" }))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = server.get("/profile").await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response).as_deref(),
        Some("/login?next=%2Fprofile")
    );
    assert!(server.store.post(blog_core::PostId::new(1)).is_none());
}

#[tokio::test]
async fn test_bad_token_is_unauthorized() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get_auth("/post/new", "not-a-token").await.unwrap();
    let body: Value = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");

    let session = register(&server, "alice").await.unwrap();
    let response = server
        .get_auth("/post/new", &session.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_post_lifecycle_between_two_users() {
    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server, "alice").await.unwrap();
    let bob = register(&server, "bob").await.unwrap();

    let response = server
        .post_auth(
            "/post/new",
            &alice.access_token,
            &json!({ "title": "Hello", "content": "World" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let path = location(&response).unwrap();
    let created: Value = response.json().await.unwrap();
    assert_eq!(path, format!("/post/{}", created["id"]));

    let response = server.get(&path).await.unwrap();
    let detail: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail["author"], "alice");
    assert_eq!(detail["has_code"], false);
    assert_eq!(detail["code"], "");

    let response = server
        .post_auth(
            &format!("{path}/update"),
            &bob.access_token,
            &json!({ "title": "Hijacked", "content": "World" }),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_POST_AUTHOR");

    let response = server
        .post_auth(
            &format!("{path}/update"),
            &alice.access_token,
            &json!({ "title": "Hello v2", "content": "World" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some(path.as_str()));

    let response = server.get(&path).await.unwrap();
    let detail: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail["title"], "Hello v2");
    assert_eq!(detail["author"], "alice");
}

#[tokio::test]
async fn test_non_author_update_is_forbidden_whatever_the_body() {
    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server, "alice").await.unwrap();
    let bob = register(&server, "bob").await.unwrap();
    let id = publish(&server, &alice.access_token, "Hello", "World")
        .await
        .unwrap();
    let path = format!("/post/{id}/update");

    let response = server
        .post_raw_auth(
            &path,
            &bob.access_token,
            "application/x-www-form-urlencoded",
            "title=Hijacked&content=by+bob",
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_POST_AUTHOR");

    let response = server
        .post_raw_auth(&path, &bob.access_token, "application/json", "{\"title\": ")
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_empty_auth(&path, &bob.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The author still hears about the unreadable body
    let response = server
        .post_raw_auth(&path, &alice.access_token, "application/json", "{\"title\": ")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_BODY");

    let response = server.get(&format!("/post/{id}")).await.unwrap();
    let detail: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail["title"], "Hello");
}

#[tokio::test]
async fn test_forms_and_delete() {
    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server, "alice").await.unwrap();
    let bob = register(&server, "bob").await.unwrap();
    let id = publish(&server, &alice.access_token, "Hello", "World")
        .await
        .unwrap();

    let response = server.get_auth("/post/new", &bob.access_token).await.unwrap();
    let form: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(form["title"], "");

    let response = server
        .get_auth(&format!("/post/{id}/update"), &alice.access_token)
        .await
        .unwrap();
    let form: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(form["title"], "Hello");

    let response = server
        .get_auth(&format!("/post/{id}/delete"), &bob.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_empty_auth(&format!("/post/{id}/delete"), &bob.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .get_auth(&format!("/post/{id}/delete"), &alice.access_token)
        .await
        .unwrap();
    let confirm: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(confirm["post"]["title"], "Hello");

    let response = server
        .post_empty_auth(&format!("/post/{id}/delete"), &alice.access_token)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/"));

    let response = server.get(&format!("/post/{id}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_invalid_post_form() {
    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server, "alice").await.unwrap();

    let response = server
        .post_auth("/post/new", &alice.access_token, &json!({}))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["details"]["title"][0]["code"], "required");
    assert_eq!(body["error"]["details"]["content"][0]["code"], "required");

    let response = server.get("/").await.unwrap();
    let page: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page["items"], json!([]));
}

#[tokio::test]
async fn test_post_with_code_sample() {
    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server, "alice").await.unwrap();

    let response = server
        .post_auth(
            "/post/new",
            &alice.access_token,
            &json!({
                "title": "Rust",
                "content": "Hello world in Rust",
                "has_code": true,
                "code": "fn main() { println!(\"hi\"); }",
            }),
        )
        .await
        .unwrap();
    let post: Value = assert_json(response, StatusCode::SEE_OTHER).await.unwrap();
    assert_eq!(post["has_code"], true);
    assert_eq!(post["code"], "fn main() { println!(\"hi\"); }");
}

#[tokio::test]
async fn test_unknown_posts_are_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server, "alice").await.unwrap();

    for path in ["/post/999", "/post/abc", "/post/0"] {
        let response = server.get(path).await.unwrap();
        assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    }

    let response = server
        .post_auth(
            "/post/999/update",
            &alice.access_token,
            &json!({ "title": "t", "content": "c" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_profile() {
    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server, "alice").await.unwrap();
    register(&server, "bob").await.unwrap();

    let response = server.get_auth("/profile", &alice.access_token).await.unwrap();
    let profile: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile["user"]["username"], "alice");
    assert_eq!(profile["image"], "default.jpg");

    let response = server
        .post_auth(
            "/profile",
            &alice.access_token,
            &json!({ "email": "alice@example.org", "image": "alice.png" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/profile"));

    let response = server.get_auth("/profile", &alice.access_token).await.unwrap();
    let profile: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile["user"]["email"], "alice@example.org");
    assert_eq!(profile["image_url"], "/media/alice.png");

    let response = server
        .post_auth("/profile", &alice.access_token, &json!({ "username": "bob" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}
