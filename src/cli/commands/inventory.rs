//! Stock management commands: `inventory`, `addbean`, and `seed`.

use crate::core::inventory::{StockChange, stock_status};
use crate::errors::Result;
use sea_orm::DatabaseConnection;

/// Lists all beans with their origin, stock level, and a low-stock warning.
pub async fn inventory(db: &DatabaseConnection) -> Result<()> {
    let beans = crate::core::inventory::get_all_beans(db).await?;
    if beans.is_empty() {
        println!("No beans in inventory yet.");
        return Ok(());
    }

    println!("{:<20} {:<15} {:>10} Status", "Bean", "Origin", "Stock(g)");
    println!("{}", "-".repeat(60));
    for bean in &beans {
        println!(
            "{:<20} {:<15} {:>10.0} {}",
            bean.name,
            bean.origin,
            bean.grams_in_stock,
            stock_status(bean.grams_in_stock)
        );
    }

    Ok(())
}

/// Adds a new bean or restocks an existing one.
pub async fn addbean(db: &DatabaseConnection, name: &str, origin: &str, grams: f64) -> Result<()> {
    match crate::core::inventory::add_or_restock_bean(db, name, origin, grams).await? {
        StockChange::Created(bean) => {
            println!("Added new bean: {} from {}", bean.name, bean.origin);
        }
        StockChange::Restocked(bean) => {
            println!(
                "Restocked {} {}{}g (now {:.0}g)",
                bean.name,
                if grams >= 0.0 { "+" } else { "" },
                grams,
                bean.grams_in_stock
            );
        }
    }
    Ok(())
}

/// Seeds the inventory from the `[[beans]]` entries in config.toml.
pub async fn seed(db: &DatabaseConnection) -> Result<()> {
    let config = crate::config::beans::load_default_config()?;
    let inserted = crate::core::inventory::seed_beans(db, &config).await?;
    println!("Seeded {inserted} new bean(s) from config.toml");
    Ok(())
}
