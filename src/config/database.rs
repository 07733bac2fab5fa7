//! Database configuration module.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. Tables
//! are generated straight from the entity definitions via
//! `Schema::create_table_from_entity`, so the database schema always matches
//! the Rust structs without hand-written SQL.

use crate::entities::{Cheese, User};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Default database location when `DATABASE_URL` is unset.
const DEFAULT_DATABASE_URL: &str = "sqlite://data/cheeseboard.sqlite?mode=rwc";

/// Gets the database URL from the environment or the default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes the database connection.
///
/// Reads `DATABASE_URL` and falls back to a local `SQLite` file, so a fresh
/// checkout runs without any environment setup.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions.
///
/// Idempotent enough for startup use: creation runs with IF NOT EXISTS, so
/// an existing database is left untouched.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    // Users first: cheeses carry a foreign key to them
    let mut user_table = schema.create_table_from_entity(User);
    let mut cheese_table = schema.create_table_from_entity(Cheese);

    db.execute(builder.build(user_table.if_not_exists())).await?;
    db.execute(builder.build(cheese_table.if_not_exists())).await?;

    Ok(())
}
