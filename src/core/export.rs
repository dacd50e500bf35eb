//! Daily CSV export.
//!
//! Writes the drinks logged since local midnight to a date-stamped CSV file,
//! one row per drink, overwriting any export from earlier in the day.

use crate::{
    core::drink::{self, DrinkDetail},
    errors::Result,
};
use chrono::{DateTime, Local};
use sea_orm::DatabaseConnection;
use std::path::{Path, PathBuf};

/// Column headers of the export file.
pub const CSV_HEADER: [&str; 8] = [
    "Time", "Bean", "Origin", "Grams", "Price", "Rating", "Notes", "Flavors",
];

/// Exports today's drinks to `beanthere_<YYYY-MM-DD>.csv` inside `dir`,
/// overwriting an existing file for the same date. A day with no drinks
/// still produces the file, header only.
///
/// # Returns
/// The path of the written file.
pub async fn export_daily_csv(
    db: &DatabaseConnection,
    now: DateTime<Local>,
    dir: &Path,
) -> Result<PathBuf> {
    let details = drink::drinks_since(db, drink::local_day_start(now)).await?;
    let path = dir.join(format!("beanthere_{}.csv", now.format("%Y-%m-%d")));
    write_csv(&path, &details)?;
    Ok(path)
}

fn write_csv(path: &Path, details: &[DrinkDetail]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;

    for detail in details {
        let flavors = detail
            .flavors
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        writer.write_record([
            detail
                .drink
                .created_at
                .with_timezone(&Local)
                .format("%H:%M")
                .to_string(),
            detail.bean.name.clone(),
            detail.bean.origin.clone(),
            detail.drink.grams_used.to_string(),
            detail.drink.price_paid.to_string(),
            detail.drink.rating.to_string(),
            detail.drink.notes.clone(),
            flavors,
        ])?;
    }

    writer.flush()?;
    Ok(())
}
