//! Test fixtures and data generators

use anyhow::Result;
use blog_core::{NewUser, User};
use blog_service::dto::{PostForm, RegisterRequest};
use blog_service::{AccountService, ServiceContext};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::helpers::{assert_json, TestServer};

/// Password that satisfies the password policy
pub const PASSWORD: &str = "plum-Orchard-42";

/// Registration body for `username`
pub fn register_request(username: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: PASSWORD.to_string(),
    }
}

/// Registration body as JSON
pub fn register_body(username: &str) -> Value {
    json!({
        "username": username,
        "email": format!("{username}@example.com"),
        "password": PASSWORD,
    })
}

/// Post form with no code sample
pub fn post_form(title: &str, content: &str) -> PostForm {
    PostForm {
        title: title.to_string(),
        content: content.to_string(),
        ..PostForm::default()
    }
}

/// Insert a user and its profile straight through the account service
pub async fn create_user(ctx: &ServiceContext, username: &str) -> User {
    let (user, _profile) = AccountService::new(ctx)
        .create_user(
            &NewUser::new(username, format!("{username}@example.com")),
            "not-a-real-hash",
        )
        .await
        .expect("user is created");
    user
}

/// A registered user signed in over HTTP
#[derive(Debug, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: SessionUser,
}

#[derive(Debug, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Register `username` over HTTP and return its tokens
pub async fn register(server: &TestServer, username: &str) -> Result<Session> {
    let response = server.post("/register", &register_body(username)).await?;
    assert_json(response, StatusCode::CREATED).await
}

/// Publish a post over HTTP and return its id
pub async fn publish(server: &TestServer, token: &str, title: &str, content: &str) -> Result<i64> {
    let response = server
        .post_auth(
            "/post/new",
            token,
            &json!({ "title": title, "content": content }),
        )
        .await?;
    let post: Value = assert_json(response, StatusCode::SEE_OTHER).await?;
    post["id"]
        .as_i64()
        .ok_or_else(|| anyhow::anyhow!("post id missing from {post}"))
}
