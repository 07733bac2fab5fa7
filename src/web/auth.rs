//! Request authentication.
//!
//! Mutating views require a known account. Requests identify themselves with
//! a `session` cookie holding an account token (the tokens are seeded from
//! config.toml); anything else is rejected with 403 before the handler runs.

use crate::{
    core::user::get_user_by_token,
    entities::user,
    errors::Error,
    web::AppState,
};
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

/// Name of the cookie carrying the account token.
pub const SESSION_COOKIE: &str = "session";

/// The authenticated account behind the current request.
///
/// Extracting this in a handler is what makes a view login-required.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub user::Model);

/// Pulls the `session` cookie value out of the request headers.
fn session_token(headers: &HeaderMap) -> Option<&str> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers).ok_or(Error::Unauthorized)?;
        let user = get_user_by_token(&state.db, token)
            .await?
            .ok_or(Error::Unauthorized)?;
        Ok(Self(user))
    }
}
