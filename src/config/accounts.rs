//! Seed-account configuration loading from config.toml
//!
//! The accounts listed in config.toml are the only ones allowed to create or
//! update cheeses. They are seeded into the database on startup; usernames
//! that already exist are skipped so restarts never duplicate or clobber
//! accounts.

use crate::core::user::{create_user, get_user_by_username};
use crate::errors::{Error, Result};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of accounts to seed
    pub accounts: Vec<AccountConfig>,
}

/// Configuration for a single account
#[derive(Debug, Deserialize, Clone)]
pub struct AccountConfig {
    /// Login name, unique across accounts
    pub username: String,
    /// Token the account presents in its `session` cookie
    pub token: String,
}

/// Loads account configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads account configuration from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

/// Seeds the configured accounts into the database.
///
/// Existing usernames are left untouched, so tokens rotated in config.toml
/// only apply to accounts created after the change.
pub async fn seed_accounts(db: &DatabaseConnection, config: &Config) -> Result<()> {
    info!(
        "Seeding accounts. Found {} configurations from TOML.",
        config.accounts.len()
    );

    for account in &config.accounts {
        if get_user_by_username(db, &account.username).await?.is_some() {
            warn!(
                "Account '{}' already exists. Skipping.",
                account.username
            );
            continue;
        }

        create_user(db, &account.username, &account.token).await?;
        info!("Seeded account '{}'", account.username);
    }

    Ok(())
}
