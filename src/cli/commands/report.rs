//! Daily figures commands: `report` and `export`.

use crate::errors::Result;
use chrono::Local;
use sea_orm::DatabaseConnection;
use std::path::Path;

/// Prints the daily sales, profit, and vibe check.
pub async fn report(db: &DatabaseConnection) -> Result<()> {
    let Some(report) = crate::core::report::daily_report(db, Local::now()).await? else {
        println!("No drinks logged today yet.");
        return Ok(());
    };

    println!();
    println!("BeanThere Daily Report");
    println!("Drinks served : {}", report.drink_count);
    println!("Revenue       : ${:.2}", report.revenue);
    println!("Bean cost     : ${:.2}", report.cost);
    println!("Profit        : ${:.2}", report.profit);
    println!(
        "Vibe check    : {:.2}/5 ({})",
        report.avg_rating, report.vibe
    );
    println!(
        "Top bean      : {} ({} drinks)",
        report.top_bean, report.top_bean_drinks
    );

    Ok(())
}

/// Writes today's drinks to a date-stamped CSV in the working directory.
pub async fn export(db: &DatabaseConnection) -> Result<()> {
    let path = crate::core::export::export_daily_csv(db, Local::now(), Path::new(".")).await?;
    println!("Exported to {}", path.display());
    Ok(())
}
