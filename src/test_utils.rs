//! Shared test utilities for `BeanThere`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::drink::{self, DrinkDetail},
    core::inventory,
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test bean with sensible defaults.
///
/// # Defaults
/// * `origin`: "Testland"
/// * `roaster` and `cost_per_kg`: stock defaults
/// * `grams_in_stock`: 500.0
pub async fn create_test_bean(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::bean::Model> {
    inventory::create_bean(db, name, "Testland", None, None, None, 500.0).await
}

/// Creates a test bean with custom origin, cost, and stock.
/// Use this when the report math depends on specific values.
pub async fn create_custom_bean(
    db: &DatabaseConnection,
    name: &str,
    origin: &str,
    cost_per_kg: f64,
    grams_in_stock: f64,
) -> Result<entities::bean::Model> {
    inventory::create_bean(db, name, origin, None, None, Some(cost_per_kg), grams_in_stock).await
}

/// Logs a test drink with sensible defaults.
///
/// # Defaults
/// * `grams`: 18.0
/// * `price`: 4.5
/// * `rating`: 5
/// * `notes`: "Test drink"
/// * no flavors
pub async fn log_test_drink(db: &DatabaseConnection, bean_name: &str) -> Result<DrinkDetail> {
    drink::log_drink(db, bean_name, 18.0, 4.5, 5, "Test drink", &[]).await
}

/// Logs a test drink with custom parameters.
pub async fn log_custom_drink(
    db: &DatabaseConnection,
    bean_name: &str,
    grams: f64,
    price: f64,
    rating: i32,
    notes: &str,
    flavors: &[&str],
) -> Result<DrinkDetail> {
    let flavor_names: Vec<String> = flavors.iter().map(|s| (*s).to_string()).collect();
    drink::log_drink(db, bean_name, grams, price, rating, notes, &flavor_names).await
}

/// Sets up a complete test environment with one bean.
/// Returns (db, bean) for common test scenarios.
pub async fn setup_with_bean() -> Result<(DatabaseConnection, entities::bean::Model)> {
    let db = setup_test_db().await?;
    let bean = create_test_bean(&db, "Test Bean").await?;
    Ok((db, bean))
}
