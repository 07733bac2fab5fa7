//! Account business logic - lookups backing seeding and request auth.

use crate::{
    entities::{User, user},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};

/// Creates a new account with the given username and token.
pub async fn create_user(
    db: &DatabaseConnection,
    username: &str,
    token: &str,
) -> Result<user::Model> {
    if username.trim().is_empty() {
        return Err(Error::Validation {
            field: "username",
            message: "Username cannot be empty".to_string(),
        });
    }

    let user = user::ActiveModel {
        username: Set(username.trim().to_string()),
        token: Set(token.to_string()),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };

    user.insert(db).await.map_err(Into::into)
}

/// Resolves a request token to its account, None for unknown tokens.
pub async fn get_user_by_token(
    db: &DatabaseConnection,
    token: &str,
) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::Token.eq(token))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds an account by username, None when it does not exist.
pub async fn get_user_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await
        .map_err(Into::into)
}
