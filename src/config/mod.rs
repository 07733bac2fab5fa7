/// Database configuration and connection management
pub mod database;

/// Seed-account configuration loading from config.toml
pub mod accounts;
