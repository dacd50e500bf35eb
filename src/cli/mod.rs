//! Command-line interface - the presentation layer.
//!
//! Parses the command surface with clap and dispatches to one command
//! implementation per concern. All domain behavior lives in [`crate::core`];
//! this layer only collects arguments, prompts for omitted fields, and
//! renders results as text.

pub mod commands;

use crate::errors::Result;
use clap::{Parser, Subcommand};
use sea_orm::DatabaseConnection;

/// BeanThere - Coffee Shop Management CLI
#[derive(Parser, Debug)]
#[command(name = "beanthere", version, about)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The command surface.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show current bean inventory with low-stock warnings
    Inventory,
    /// Add a new bean or restock existing ones
    Addbean {
        /// Bean name
        name: String,
        /// Country or region of origin
        origin: String,
        /// Grams to add (negative corrects stock downward)
        #[arg(allow_negative_numbers = true)]
        grams: f64,
    },
    /// Log a drink - automatically deducts from inventory
    Log {
        /// Name of the bean the drink consumed
        bean_name: String,
        /// Grams of bean used
        grams: f64,
        /// Price the customer paid
        price: f64,
        /// Rating from 1 to 5; prompted when omitted
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..=5))]
        rating: Option<i32>,
        /// Tasting notes; prompted when omitted
        #[arg(long)]
        notes: Option<String>,
        /// Comma-separated flavor tags; prompted when omitted
        #[arg(long)]
        flavors: Option<String>,
    },
    /// Daily sales, profit, and vibe check
    Report,
    /// Export today's drinks to CSV
    Export,
    /// Seed the inventory with the beans from config.toml
    Seed,
}

/// Dispatches a parsed invocation to its command implementation.
pub async fn run(db: &DatabaseConnection, cli: Cli) -> Result<()> {
    match cli.command {
        Command::Inventory => commands::inventory::inventory(db).await,
        Command::Addbean {
            name,
            origin,
            grams,
        } => commands::inventory::addbean(db, &name, &origin, grams).await,
        Command::Log {
            bean_name,
            grams,
            price,
            rating,
            notes,
            flavors,
        } => commands::drink::log(db, &bean_name, grams, price, rating, notes, flavors).await,
        Command::Report => commands::report::report(db).await,
        Command::Export => commands::report::export(db).await,
        Command::Seed => commands::inventory::seed(db).await,
    }
}
