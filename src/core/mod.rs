//! Core business logic module - framework-agnostic operations.
//!
//! Contains the domain operations for inventory management, drink logging,
//! daily reporting, and CSV export. These modules are independent of the CLI
//! layer and take an explicit database handle, so they can be driven by any
//! presentation front end or by tests.

/// Drink logging and queries over logged drinks
pub mod drink;
/// Daily CSV export
pub mod export;
/// Bean inventory operations
pub mod inventory;
/// Daily report computation
pub mod report;
