//! Drink business logic - logging sales and querying logged drinks.
//!
//! Logging a drink validates the request, then performs one database
//! transaction covering the bean lookup, the stock check, flavor
//! find-or-create, the drink insert, the join-table inserts, and the atomic
//! stock decrement. Queries resolve bean and flavor associations eagerly with
//! bulk lookups so reporting never does per-row fetches.

use crate::{
    core::inventory,
    entities::{Bean, Drink, DrinkFlavor, Flavor, bean, drink, drink_flavor, flavor},
    errors::{Error, Result},
};
use chrono::{DateTime, Duration, Local, NaiveTime, TimeZone, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// A drink with its bean and flavor associations resolved.
#[derive(Debug, Clone)]
pub struct DrinkDetail {
    /// The drink record itself
    pub drink: drink::Model,
    /// The bean it consumed
    pub bean: bean::Model,
    /// Its flavor tags, in association order
    pub flavors: Vec<flavor::Model>,
}

/// Logs a drink sale, deducting the grams used from the bean's stock.
///
/// Validates rating (1-5), grams (finite, positive), and price (finite,
/// non-negative) before touching storage. Flavor names are trimmed, empties
/// discarded, and duplicates dropped keeping first-seen order. The bean
/// lookup, stock check, flavor creation, drink insert, and stock decrement
/// all commit as one transaction; any failure leaves prior state unchanged.
pub async fn log_drink(
    db: &DatabaseConnection,
    bean_name: &str,
    grams: f64,
    price: f64,
    rating: i32,
    notes: &str,
    flavor_names: &[String],
) -> Result<DrinkDetail> {
    if !(1..=5).contains(&rating) {
        return Err(Error::InvalidRating { rating });
    }

    if !grams.is_finite() || grams <= 0.0 {
        return Err(Error::InvalidAmount { amount: grams });
    }

    if !price.is_finite() || price < 0.0 {
        return Err(Error::InvalidAmount { amount: price });
    }

    let names = normalize_flavor_names(flavor_names);

    // One transaction for the whole logical operation; dropping it on any
    // early return rolls everything back.
    let txn = db.begin().await?;

    let bean = inventory::get_bean_by_name(&txn, bean_name)
        .await?
        .ok_or_else(|| Error::BeanNotFound {
            name: bean_name.to_string(),
        })?;

    if bean.grams_in_stock < grams {
        return Err(Error::InsufficientStock {
            name: bean.name,
            available: bean.grams_in_stock,
            requested: grams,
        });
    }

    // Flavors are resolved before the drink row so the association rows can
    // be written in the same transaction.
    let mut flavors = Vec::with_capacity(names.len());
    for name in &names {
        flavors.push(find_or_create_flavor(&txn, name).await?);
    }

    let drink = drink::ActiveModel {
        bean_id: Set(bean.id),
        grams_used: Set(grams),
        price_paid: Set(price),
        rating: Set(rating),
        notes: Set(notes.to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    if !flavors.is_empty() {
        let links = flavors.iter().map(|f| drink_flavor::ActiveModel {
            drink_id: Set(drink.id),
            flavor_id: Set(f.id),
        });
        DrinkFlavor::insert_many(links).exec(&txn).await?;
    }

    let bean = inventory::adjust_stock_atomic(&txn, bean.id, -grams).await?;

    txn.commit().await?;
    debug!(bean = %bean.name, grams, price, rating, "drink logged");

    Ok(DrinkDetail {
        drink,
        bean,
        flavors,
    })
}

/// Looks up a flavor by name, creating it if this is the first time the name
/// has been seen. Flavor rows are never duplicated or deleted.
async fn find_or_create_flavor<C>(db: &C, name: &str) -> Result<flavor::Model>
where
    C: ConnectionTrait,
{
    let existing = Flavor::find()
        .filter(flavor::Column::Name.eq(name))
        .one(db)
        .await?;

    match existing {
        Some(found) => Ok(found),
        None => flavor::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(Into::into),
    }
}

/// Trims flavor names, discards empties, and drops duplicates while keeping
/// first-seen order.
#[must_use]
pub fn normalize_flavor_names(raw: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for entry in raw {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            names.push(trimmed.to_string());
        }
    }
    names
}

/// The UTC instant of local midnight on the calendar date of `now`.
#[must_use]
pub fn local_day_start(now: DateTime<Local>) -> DateTime<Utc> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    Local.from_local_datetime(&midnight).earliest().map_or_else(
        || {
            // Midnight falls in a DST gap: reuse the current UTC offset
            let offset_secs = i64::from(now.offset().local_minus_utc());
            Utc.from_utc_datetime(&(midnight - Duration::seconds(offset_secs)))
        },
        |dt| dt.with_timezone(&Utc),
    )
}

/// Retrieves all drinks created at or after `since`, ordered by id ascending
/// (insertion order), with bean and flavor associations eagerly resolved.
///
/// Runs at most four queries regardless of row count: drinks, join rows,
/// flavors, beans.
pub async fn drinks_since(db: &DatabaseConnection, since: DateTime<Utc>) -> Result<Vec<DrinkDetail>> {
    let drinks = Drink::find()
        .filter(drink::Column::CreatedAt.gte(since))
        .order_by_asc(drink::Column::Id)
        .all(db)
        .await?;

    if drinks.is_empty() {
        return Ok(Vec::new());
    }

    let drink_ids: Vec<i64> = drinks.iter().map(|d| d.id).collect();
    let links = DrinkFlavor::find()
        .filter(drink_flavor::Column::DrinkId.is_in(drink_ids))
        .all(db)
        .await?;

    let flavor_ids: Vec<i64> = links
        .iter()
        .map(|link| link.flavor_id)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    let flavors_by_id: HashMap<i64, flavor::Model> = if flavor_ids.is_empty() {
        HashMap::new()
    } else {
        Flavor::find()
            .filter(flavor::Column::Id.is_in(flavor_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|f| (f.id, f))
            .collect()
    };

    let mut flavors_by_drink: HashMap<i64, Vec<flavor::Model>> = HashMap::new();
    for link in links {
        if let Some(found) = flavors_by_id.get(&link.flavor_id) {
            flavors_by_drink
                .entry(link.drink_id)
                .or_default()
                .push(found.clone());
        }
    }

    let bean_ids: Vec<i64> = drinks
        .iter()
        .map(|d| d.bean_id)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    let beans_by_id: HashMap<i64, bean::Model> = Bean::find()
        .filter(bean::Column::Id.is_in(bean_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|b| (b.id, b))
        .collect();

    drinks
        .into_iter()
        .map(|d| {
            let bean = beans_by_id
                .get(&d.bean_id)
                .cloned()
                .ok_or_else(|| Error::BeanNotFound {
                    name: d.bean_id.to_string(),
                })?;
            let flavors = flavors_by_drink.remove(&d.id).unwrap_or_default();
            Ok(DrinkDetail {
                drink: d,
                bean,
                flavors,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{
        create_test_bean, log_custom_drink, log_test_drink, setup_test_db, setup_with_bean,
    };

    fn strings(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_normalize_flavor_names() {
        let raw = strings(&["  Citrus ", "", "Berry", "Citrus", "   ", "Floral"]);
        assert_eq!(
            normalize_flavor_names(&raw),
            strings(&["Citrus", "Berry", "Floral"])
        );
    }

    #[test]
    fn test_local_day_start_is_midnight_today() {
        let now = Local::now();
        let start = local_day_start(now);
        let start_local = start.with_timezone(&Local);

        assert_eq!(start_local.date_naive(), now.date_naive());
        assert_eq!(start_local.time(), NaiveTime::MIN);
        assert!(start <= now.with_timezone(&Utc));
    }

    #[tokio::test]
    async fn test_log_drink_validation() -> Result<()> {
        let db = setup_test_db().await?;

        // Rating outside 1-5
        let result = log_drink(&db, "Kenya AA", 18.0, 4.5, 0, "", &[]).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidRating { rating: 0 }
        ));

        let result = log_drink(&db, "Kenya AA", 18.0, 4.5, 6, "", &[]).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidRating { rating: 6 }
        ));

        // Non-positive and non-finite grams
        let result = log_drink(&db, "Kenya AA", 0.0, 4.5, 5, "", &[]).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidAmount { .. }));

        let result = log_drink(&db, "Kenya AA", f64::NAN, 4.5, 5, "", &[]).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidAmount { .. }));

        // Negative price
        let result = log_drink(&db, "Kenya AA", 18.0, -1.0, 5, "", &[]).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidAmount { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_log_drink_unknown_bean() -> Result<()> {
        let db = setup_test_db().await?;

        let result = log_drink(&db, "Nonexistent", 18.0, 4.5, 5, "", &[]).await;
        assert!(matches!(result.unwrap_err(), Error::BeanNotFound { .. }));

        // No drink row was created
        let drinks = Drink::find().all(&db).await?;
        assert!(drinks.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_log_drink_deducts_stock() -> Result<()> {
        // Kenya AA at 400g, log 20g: stock lands at 380g with the drink recorded
        let db = setup_test_db().await?;
        crate::core::inventory::create_bean(&db, "Kenya AA", "Kenya", None, None, None, 400.0)
            .await?;

        let logged =
            log_custom_drink(&db, "Kenya AA", 20.0, 5.0, 5, "bright", &["Citrus"]).await?;

        assert_eq!(logged.bean.grams_in_stock, 380.0);
        assert_eq!(logged.drink.rating, 5);
        assert_eq!(logged.drink.grams_used, 20.0);
        assert_eq!(logged.flavors.len(), 1);
        assert_eq!(logged.flavors[0].name, "Citrus");

        Ok(())
    }

    #[tokio::test]
    async fn test_log_drink_insufficient_stock_leaves_state_unchanged() -> Result<()> {
        let (db, bean) = setup_with_bean().await?;

        let result = log_drink(&db, &bean.name, 600.0, 4.5, 5, "", &strings(&["Citrus"])).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InsufficientStock {
                available,
                requested,
                ..
            } if available == 500.0 && requested == 600.0
        ));

        // Nothing was written: no drink, no flavor, stock untouched
        assert!(Drink::find().all(&db).await?.is_empty());
        assert!(Flavor::find().all(&db).await?.is_empty());
        let bean = crate::core::inventory::get_bean_by_name(&db, &bean.name)
            .await?
            .unwrap();
        assert_eq!(bean.grams_in_stock, 500.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_flavor_idempotence() -> Result<()> {
        // Two drinks sharing a flavor name create exactly one flavor row
        let (db, bean) = setup_with_bean().await?;

        let first = log_custom_drink(&db, &bean.name, 18.0, 4.5, 5, "", &["Citrus", "Berry"])
            .await?;
        let second = log_custom_drink(&db, &bean.name, 20.0, 5.0, 4, "", &["Citrus"]).await?;

        let all_flavors = Flavor::find().all(&db).await?;
        assert_eq!(all_flavors.len(), 2);

        let citrus_first = first.flavors.iter().find(|f| f.name == "Citrus").unwrap();
        let citrus_second = second.flavors.iter().find(|f| f.name == "Citrus").unwrap();
        assert_eq!(citrus_first.id, citrus_second.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_flavor_names_are_normalized() -> Result<()> {
        let (db, bean) = setup_with_bean().await?;

        let logged = log_custom_drink(
            &db,
            &bean.name,
            18.0,
            4.5,
            5,
            "",
            &[" Citrus ", "Citrus", "", "Berry"],
        )
        .await?;

        let names: Vec<&str> = logged.flavors.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Citrus", "Berry"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_drinks_since_resolves_associations() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_bean(&db, "Kenya AA").await?;
        create_test_bean(&db, "Brazil Santos").await?;

        log_custom_drink(&db, "Kenya AA", 18.0, 4.5, 5, "bright", &["Citrus"]).await?;
        log_custom_drink(&db, "Brazil Santos", 20.0, 5.0, 4, "nutty", &["Nutty", "Caramel"])
            .await?;

        let details = drinks_since(&db, local_day_start(Local::now())).await?;
        assert_eq!(details.len(), 2);

        // Query order is insertion order
        assert_eq!(details[0].bean.name, "Kenya AA");
        assert_eq!(details[1].bean.name, "Brazil Santos");

        assert_eq!(details[0].flavors.len(), 1);
        assert_eq!(details[1].flavors.len(), 2);
        assert_eq!(details[1].drink.notes, "nutty");

        Ok(())
    }

    #[tokio::test]
    async fn test_drinks_since_excludes_older_drinks() -> Result<()> {
        let (db, bean) = setup_with_bean().await?;

        // One drink logged now, one backdated to yesterday
        log_test_drink(&db, &bean.name).await?;
        drink::ActiveModel {
            bean_id: Set(bean.id),
            grams_used: Set(18.0),
            price_paid: Set(4.5),
            rating: Set(4),
            notes: Set(String::new()),
            created_at: Set(Utc::now() - Duration::days(1)),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let today = drinks_since(&db, local_day_start(Local::now())).await?;
        assert_eq!(today.len(), 1);

        let everything = drinks_since(&db, Utc::now() - Duration::days(2)).await?;
        assert_eq!(everything.len(), 2);

        Ok(())
    }
}
