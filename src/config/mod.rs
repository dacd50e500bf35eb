/// Seed-bean configuration loading from config.toml
pub mod beans;

/// Database configuration and connection management
pub mod database;
