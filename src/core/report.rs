//! Daily report business logic.
//!
//! Computes the day's revenue, bean cost, profit, average rating, vibe label,
//! and top bean from the drinks logged since local midnight. The computation
//! is a pure function over the queried rows; the CLI layer does the
//! formatting.

use crate::{
    core::drink::{self, DrinkDetail},
    errors::Result,
};
use chrono::{DateTime, Local};
use sea_orm::DatabaseConnection;

/// Aggregate figures for one day of sales.
#[derive(Debug, Clone)]
pub struct DailyReport {
    /// Number of drinks served today
    pub drink_count: usize,
    /// Total price paid across today's drinks
    pub revenue: f64,
    /// Total bean cost (grams used x cost per kilogram)
    pub cost: f64,
    /// Revenue minus cost
    pub profit: f64,
    /// Mean rating across today's drinks
    pub avg_rating: f64,
    /// Qualitative bucket for the average rating
    pub vibe: &'static str,
    /// Bean with the most drinks today
    pub top_bean: String,
    /// How many drinks the top bean accounted for
    pub top_bean_drinks: usize,
}

/// Generates the daily report for the local calendar date of `now`.
///
/// Returns `None` when no drinks have been logged today; there is nothing to
/// compute in that case.
pub async fn daily_report(
    db: &DatabaseConnection,
    now: DateTime<Local>,
) -> Result<Option<DailyReport>> {
    let details = drink::drinks_since(db, drink::local_day_start(now)).await?;
    Ok(build_report(&details))
}

/// Computes the report figures from resolved drink rows. Pure; no storage
/// access and no side effects.
#[must_use]
pub fn build_report(details: &[DrinkDetail]) -> Option<DailyReport> {
    if details.is_empty() {
        return None;
    }

    let revenue: f64 = details.iter().map(|d| d.drink.price_paid).sum();
    let cost: f64 = details
        .iter()
        .map(|d| (d.drink.grams_used / 1000.0) * d.bean.cost_per_kg)
        .sum();
    let profit = revenue - cost;

    // Row counts are tiny; the cast cannot lose precision in practice
    #[allow(clippy::cast_precision_loss)]
    let avg_rating =
        details.iter().map(|d| f64::from(d.drink.rating)).sum::<f64>() / details.len() as f64;

    let (top_bean, top_bean_drinks) = top_bean(details);

    Some(DailyReport {
        drink_count: details.len(),
        revenue,
        cost,
        profit,
        avg_rating,
        vibe: vibe_label(avg_rating),
        top_bean,
        top_bean_drinks,
    })
}

/// Qualitative bucket for an average rating. Thresholds are evaluated
/// highest-first and boundaries are inclusive.
#[must_use]
pub fn vibe_label(avg_rating: f64) -> &'static str {
    if avg_rating >= 4.7 {
        "Transcendent"
    } else if avg_rating >= 4.2 {
        "Excellent"
    } else if avg_rating >= 3.5 {
        "Good"
    } else {
        "Needs work"
    }
}

/// The bean name with the highest drink count, with its count. On equal
/// counts the bean seen first in query order wins, which makes the tie-break
/// deterministic: drinks are queried in insertion order.
fn top_bean(details: &[DrinkDetail]) -> (String, usize) {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for detail in details {
        match counts.iter_mut().find(|(name, _)| *name == detail.bean.name) {
            Some((_, count)) => *count += 1,
            None => counts.push((detail.bean.name.clone(), 1)),
        }
    }

    let mut best: (String, usize) = (String::new(), 0);
    for (name, count) in counts {
        if count > best.1 {
            best = (name, count);
        }
    }
    best
}
