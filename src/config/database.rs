//! Database configuration module for `BeanThere`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary
//! tables based on the entity definitions. The module uses `SeaORM`'s
//! `Schema::create_table_from_entity` method to generate SQL statements from the entity
//! models, so the database schema matches the Rust struct definitions without manual SQL.
//! Table creation runs on every CLI invocation, so all statements are `IF NOT EXISTS`.

use crate::entities::{Bean, Drink, DrinkFlavor, Flavor};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Default `SQLite` file used when `DATABASE_URL` is not set.
/// `mode=rwc` lets `SQLite` create the file on first run.
const DEFAULT_DATABASE_URL: &str = "sqlite://beanthere.sqlite?mode=rwc";

/// Gets the database URL from the environment or returns the default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL`
/// environment variable, falling back to a local file next to the binary.
///
/// The connection is acquired once per command invocation and dropped when the
/// invocation ends, success or failure.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation
/// from the entity definitions.
///
/// Creates the beans, flavors, drinks, and drink-flavor association tables.
/// Safe to call repeatedly: every statement carries `IF NOT EXISTS`.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut bean_table = schema.create_table_from_entity(Bean);
    let mut flavor_table = schema.create_table_from_entity(Flavor);
    let mut drink_table = schema.create_table_from_entity(Drink);
    let mut drink_flavor_table = schema.create_table_from_entity(DrinkFlavor);

    db.execute(builder.build(bean_table.if_not_exists())).await?;
    db.execute(builder.build(flavor_table.if_not_exists())).await?;
    db.execute(builder.build(drink_table.if_not_exists())).await?;
    db.execute(builder.build(drink_flavor_table.if_not_exists()))
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        bean::Model as BeanModel, drink::Model as DrinkModel,
        drink_flavor::Model as DrinkFlavorModel, flavor::Model as FlavorModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<BeanModel> = Bean::find().limit(1).all(&db).await?;
        let _: Vec<FlavorModel> = Flavor::find().limit(1).all(&db).await?;
        let _: Vec<DrinkModel> = Drink::find().limit(1).all(&db).await?;
        let _: Vec<DrinkFlavorModel> = DrinkFlavor::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let _: Vec<BeanModel> = Bean::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[test]
    fn test_default_database_url() {
        // With no DATABASE_URL in the environment the local file is used
        if std::env::var("DATABASE_URL").is_err() {
            assert_eq!(get_database_url(), DEFAULT_DATABASE_URL);
        }
    }
}
