//! Inventory business logic - Handles all bean-related operations.
//!
//! Provides functions for listing beans, looking them up by name, creating or
//! restocking them, and seeding the inventory from configuration. All
//! functions are async and return Result types for error handling.

use crate::{
    config::beans::Config,
    entities::{Bean, bean},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::debug;

/// Roaster recorded when none is given
pub const DEFAULT_ROASTER: &str = "Local Roaster";
/// Cost per kilogram recorded when none is given
pub const DEFAULT_COST_PER_KG: f64 = 90.0;
/// Stock at or below this many grams is flagged as low
pub const LOW_STOCK_THRESHOLD_GRAMS: f64 = 250.0;

/// Outcome of [`add_or_restock_bean`], so callers can phrase their message.
#[derive(Debug, Clone)]
pub enum StockChange {
    /// The name was new and a bean was created
    Created(bean::Model),
    /// The name existed and its stock was adjusted
    Restocked(bean::Model),
}

impl StockChange {
    /// The bean state after the operation, whichever way it went.
    #[must_use]
    pub fn bean(&self) -> &bean::Model {
        match self {
            Self::Created(bean) | Self::Restocked(bean) => bean,
        }
    }
}

/// Status label for a stock level: "GOOD" above the low-stock threshold,
/// "LOW STOCK" at or below it.
#[must_use]
pub fn stock_status(grams_in_stock: f64) -> &'static str {
    if grams_in_stock > LOW_STOCK_THRESHOLD_GRAMS {
        "GOOD"
    } else {
        "LOW STOCK"
    }
}

/// Retrieves all beans from the database, ordered alphabetically by name.
pub async fn get_all_beans(db: &DatabaseConnection) -> Result<Vec<bean::Model>> {
    Bean::find()
        .order_by_asc(bean::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific bean by its name, returning None if not found.
pub async fn get_bean_by_name<C>(db: &C, name: &str) -> Result<Option<bean::Model>>
where
    C: ConnectionTrait,
{
    Bean::find()
        .filter(bean::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new bean with the specified parameters, performing input validation.
///
/// The name is trimmed and must be non empty. Roaster and cost per kilogram
/// fall back to the stock defaults when not given. Initial stock must be a
/// finite, non-negative number of grams.
pub async fn create_bean<C>(
    db: &C,
    name: &str,
    origin: &str,
    roaster: Option<&str>,
    process: Option<&str>,
    cost_per_kg: Option<f64>,
    grams_in_stock: f64,
) -> Result<bean::Model>
where
    C: ConnectionTrait,
{
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Bean name cannot be empty".to_string(),
        });
    }

    if !grams_in_stock.is_finite() || grams_in_stock < 0.0 {
        return Err(Error::InvalidAmount {
            amount: grams_in_stock,
        });
    }

    let cost_per_kg = cost_per_kg.unwrap_or(DEFAULT_COST_PER_KG);
    if !cost_per_kg.is_finite() || cost_per_kg < 0.0 {
        return Err(Error::InvalidAmount { amount: cost_per_kg });
    }

    let bean = bean::ActiveModel {
        name: Set(name.trim().to_string()),
        origin: Set(origin.to_string()),
        roaster: Set(roaster.unwrap_or(DEFAULT_ROASTER).to_string()),
        process: Set(process.map(ToString::to_string)),
        cost_per_kg: Set(cost_per_kg),
        grams_in_stock: Set(grams_in_stock),
        ..Default::default()
    };

    let result = bean.insert(db).await?;
    Ok(result)
}

/// Adds a new bean or restocks an existing one, as a single atomic operation.
///
/// If a bean named `name` exists its stock is adjusted by `grams`; otherwise a
/// bean is created with `origin`, the stock defaults, and `grams` as initial
/// stock. Negative `grams` on an existing bean is an explicit stock
/// correction; it fails with `InsufficientStock` rather than taking stock
/// below zero.
pub async fn add_or_restock_bean(
    db: &DatabaseConnection,
    name: &str,
    origin: &str,
    grams: f64,
) -> Result<StockChange> {
    if !grams.is_finite() {
        return Err(Error::InvalidAmount { amount: grams });
    }

    let txn = db.begin().await?;

    let change = match get_bean_by_name(&txn, name.trim()).await? {
        Some(bean) => {
            if bean.grams_in_stock + grams < 0.0 {
                return Err(Error::InsufficientStock {
                    name: bean.name,
                    available: bean.grams_in_stock,
                    requested: -grams,
                });
            }
            let updated = adjust_stock_atomic(&txn, bean.id, grams).await?;
            StockChange::Restocked(updated)
        }
        None => {
            let created = create_bean(&txn, name, origin, None, None, None, grams).await?;
            StockChange::Created(created)
        }
    };

    txn.commit().await?;
    debug!(bean = %change.bean().name, grams, "stock changed");
    Ok(change)
}

/// Adjusts the stock of an existing bean by atomically adding a gram delta.
///
/// Instead of reading the current stock, modifying it, and writing it back,
/// this issues a single column-expression UPDATE:
/// `UPDATE beans SET grams_in_stock = grams_in_stock + delta WHERE id = ?`
///
/// # Returns
/// The updated bean model
pub async fn adjust_stock_atomic<C>(db: &C, bean_id: i64, grams_delta: f64) -> Result<bean::Model>
where
    C: ConnectionTrait,
{
    use sea_orm::sea_query::Expr;

    // First verify the bean exists
    let _bean = Bean::find_by_id(bean_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::BeanNotFound {
            name: bean_id.to_string(),
        })?;

    Bean::update_many()
        .col_expr(
            bean::Column::GramsInStock,
            Expr::col(bean::Column::GramsInStock).add(grams_delta),
        )
        .filter(bean::Column::Id.eq(bean_id))
        .exec(db)
        .await?;

    Bean::find_by_id(bean_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::BeanNotFound {
            name: bean_id.to_string(),
        })
}

/// Seeds the inventory with every configured bean whose name is not already
/// present. Idempotent; returns the number of beans inserted.
pub async fn seed_beans(db: &DatabaseConnection, config: &Config) -> Result<usize> {
    let mut inserted = 0;
    for entry in &config.beans {
        if get_bean_by_name(db, &entry.name).await?.is_some() {
            continue;
        }
        create_bean(
            db,
            &entry.name,
            &entry.origin,
            entry.roaster.as_deref(),
            entry.process.as_deref(),
            entry.cost_per_kg,
            entry.grams_in_stock,
        )
        .await?;
        debug!(bean = %entry.name, "seeded");
        inserted += 1;
    }
    Ok(inserted)
}
