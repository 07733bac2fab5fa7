//! HTTP interface - routes, views, forms, pages, and request authentication.
//!
//! Everything request-shaped lives here; the handlers translate between the
//! HTTP surface and the framework-agnostic operations in [`crate::core`].

/// Request authentication via the `session` cookie
pub mod auth;
/// Form payloads and field-level validation
pub mod forms;
/// Server-side HTML rendering
pub mod pages;
/// Route table, named path reversal, and router construction
pub mod routes;
/// Request handlers for the list/detail/create/update views
pub mod views;

use sea_orm::DatabaseConnection;

/// Shared state available to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Database handle, cheap to clone per request
    pub db: DatabaseConnection,
}
