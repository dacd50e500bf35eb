//! Seed-bean configuration loading from config.toml
//!
//! This module provides functionality to load initial bean definitions from a
//! TOML configuration file. The beans defined in config.toml are used by the
//! `seed` command to populate the database with a starting inventory.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of bean definitions to seed
    pub beans: Vec<BeanConfig>,
}

/// Configuration for a single seed bean
#[derive(Debug, Deserialize, Clone)]
pub struct BeanConfig {
    /// Unique bean name
    pub name: String,
    /// Country or region of origin
    pub origin: String,
    /// Roaster name; falls back to the stock default when omitted
    pub roaster: Option<String>,
    /// Processing method (washed, natural, ...)
    pub process: Option<String>,
    /// Cost per kilogram; falls back to the stock default when omitted
    pub cost_per_kg: Option<f64>,
    /// Initial grams in stock
    pub grams_in_stock: f64,
}

/// Loads bean configuration from a TOML file
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

/// Loads bean configuration from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}
