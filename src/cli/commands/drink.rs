//! The `log` command: record one drink sale.
//!
//! Rating, notes, and flavors can be passed as flags; anything omitted is
//! prompted for interactively, matching the original workflow of logging a
//! drink right after serving it.

use crate::errors::Result;
use dialoguer::Input;
use sea_orm::DatabaseConnection;

/// Logs a drink, prompting for any of rating/notes/flavors not given as flags.
pub async fn log(
    db: &DatabaseConnection,
    bean_name: &str,
    grams: f64,
    price: f64,
    rating: Option<i32>,
    notes: Option<String>,
    flavors: Option<String>,
) -> Result<()> {
    let rating = match rating {
        Some(rating) => rating,
        None => prompt_rating()?,
    };
    let notes = match notes {
        Some(notes) => notes,
        None => prompt_text("Tasting notes")?,
    };
    let flavors = match flavors {
        Some(flavors) => flavors,
        None => prompt_text("Flavors (comma-separated)")?,
    };

    // Core normalizes (trims, dedups, drops empties); just split here
    let flavor_names: Vec<String> = flavors.split(',').map(str::to_string).collect();

    let logged =
        crate::core::drink::log_drink(db, bean_name, grams, price, rating, &notes, &flavor_names)
            .await?;

    println!(
        "Logged {grams}g of {} (${price:.2}, {rating} stars)",
        logged.bean.name
    );
    if !logged.flavors.is_empty() {
        let tags = logged
            .flavors
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!("Flavors: {tags}");
    }
    println!(
        "{} left: {:.0}g",
        logged.bean.name, logged.bean.grams_in_stock
    );

    Ok(())
}

fn prompt_rating() -> Result<i32> {
    let rating = Input::<i32>::new()
        .with_prompt("Rating (1-5)")
        .validate_with(|rating: &i32| {
            if (1..=5).contains(rating) {
                Ok(())
            } else {
                Err("rating must be between 1 and 5")
            }
        })
        .interact_text()?;
    Ok(rating)
}

fn prompt_text(prompt: &str) -> Result<String> {
    let text = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(text)
}
