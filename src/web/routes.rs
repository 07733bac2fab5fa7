//! Route table and named path reversal.
//!
//! The four views are registered from the constants below, and every link,
//! redirect, and canonical URL in the application goes through the reversal
//! helpers, so a path only ever exists in one place.

use crate::web::{AppState, views};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Pattern for the cheese list view.
pub const LIST_PATTERN: &str = "/cheeses/";
/// Pattern for the create view. Registered statically, so it wins over the
/// dynamic detail pattern.
pub const ADD_PATTERN: &str = "/cheeses/add/";
/// Pattern for the detail view.
pub const DETAIL_PATTERN: &str = "/cheeses/{slug}/";
/// Pattern for the update view.
pub const UPDATE_PATTERN: &str = "/cheeses/{slug}/update/";

/// Path of the list view.
#[must_use]
pub const fn list_path() -> &'static str {
    LIST_PATTERN
}

/// Path of the create view.
#[must_use]
pub const fn add_path() -> &'static str {
    ADD_PATTERN
}

/// Path of the detail view for `slug`.
#[must_use]
pub fn detail_path(slug: &str) -> String {
    format!("/cheeses/{slug}/")
}

/// Path of the update view for `slug`.
#[must_use]
pub fn update_path(slug: &str) -> String {
    format!("/cheeses/{slug}/update/")
}

/// Builds the application router over the shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(LIST_PATTERN, get(views::list_cheeses))
        .route(
            ADD_PATTERN,
            get(views::add_cheese_form).post(views::add_cheese),
        )
        .route(DETAIL_PATTERN, get(views::cheese_detail))
        .route(
            UPDATE_PATTERN,
            get(views::update_cheese_form).post(views::update_cheese),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
