//! Shared test utilities for `Cheeseboard`.
//!
//! This module provides common helper functions for setting up test
//! databases, creating test entities with sensible defaults, and driving
//! the router the way a browser would.

use crate::{
    config,
    core::cheese::{Firmness, NewCheese, create_cheese},
    core::user::create_user,
    entities,
    errors::Result,
    web::{AppState, auth::SESSION_COOKIE, routes},
};
use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test account whose token is derived from the username
/// (`"alice"` gets `"tok-alice"`).
pub async fn create_test_user(
    db: &DatabaseConnection,
    username: &str,
) -> Result<entities::user::Model> {
    create_user(db, username, &format!("tok-{username}")).await
}

/// Creates a test cheese with sensible defaults.
///
/// # Defaults
/// * `description`: "A test cheese"
/// * `firmness`: semi-soft
/// * `country_of_origin`: France
/// * `creator_id`: None
pub async fn create_test_cheese(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::cheese::Model> {
    create_cheese(
        db,
        NewCheese {
            name: name.to_string(),
            description: "A test cheese".to_string(),
            firmness: Firmness::SemiSoft,
            country_of_origin: Some("FR".to_string()),
            creator_id: None,
        },
    )
    .await
}

/// Creates a test cheese with custom parameters.
/// Use this when a test needs specific field values.
pub async fn create_custom_cheese(
    db: &DatabaseConnection,
    name: &str,
    description: &str,
    firmness: Firmness,
    country_of_origin: Option<&str>,
    creator_id: Option<i64>,
) -> Result<entities::cheese::Model> {
    create_cheese(
        db,
        NewCheese {
            name: name.to_string(),
            description: description.to_string(),
            firmness,
            country_of_origin: country_of_origin.map(str::to_string),
            creator_id,
        },
    )
    .await
}

/// Builds the full application router over a test database.
pub fn test_router(db: &DatabaseConnection) -> Router {
    routes::router(AppState { db: db.clone() })
}

fn with_session(builder: axum::http::request::Builder, token: Option<&str>) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header(header::COOKIE, format!("{SESSION_COOKIE}={token}")),
        None => builder,
    }
}

/// Sends a GET request, optionally authenticated with an account token.
pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> Response {
    let request = with_session(Request::builder().uri(uri), token)
        .body(Body::empty())
        .expect("request construction cannot fail");
    app.clone()
        .oneshot(request)
        .await
        .expect("router call is infallible")
}

/// Sends a urlencoded form POST, optionally authenticated.
pub async fn post_form(app: &Router, uri: &str, token: Option<&str>, body: &str) -> Response {
    let request = with_session(Request::builder().method("POST").uri(uri), token)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request construction cannot fail");
    app.clone()
        .oneshot(request)
        .await
        .expect("router call is infallible")
}

/// Collects a response body into a `String` for content assertions.
pub async fn body_string(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collection cannot fail")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("pages are valid UTF-8")
}
