//! Unified error types for the whole crate.
//!
//! Every fallible operation returns the crate-wide [`Result`] alias. Domain
//! failures (missing bean, insufficient stock, bad rating) get their own
//! variants so the CLI can surface them as plain messages; infrastructure
//! failures convert in via `#[from]`.

use thiserror::Error;

/// All errors that can occur in `BeanThere`.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A bean was referenced by a name that does not exist
    #[error("Bean '{name}' not found")]
    BeanNotFound {
        /// The name that missed
        name: String,
    },

    /// A stock deduction or correction would take a bean below zero grams
    #[error("Not enough {name}: {available:.0}g in stock, {requested:.0}g requested")]
    InsufficientStock {
        /// Bean name
        name: String,
        /// Grams currently in stock
        available: f64,
        /// Grams the operation needed
        requested: f64,
    },

    /// A rating outside the 1-5 scale
    #[error("Invalid rating: {rating} (must be between 1 and 5)")]
    InvalidRating {
        /// The rejected rating
        rating: i32,
    },

    /// A non-finite or otherwise unusable numeric argument
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// Database error from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
