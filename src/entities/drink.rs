//! Drink entity - Represents one logged sale.
//!
//! Each drink references the bean it consumed, the grams used, the price
//! paid, a 1-5 rating, free-text notes, and its creation timestamp (UTC).
//! Drinks are immutable once created and are never deleted. Flavor tags
//! attach through the `drink_flavors` join table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Drink database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "drinks")]
pub struct Model {
    /// Unique identifier for the drink
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the bean this drink consumed
    pub bean_id: i64,
    /// Grams of bean used
    pub grams_used: f64,
    /// Price the customer paid in dollars
    pub price_paid: f64,
    /// Customer rating, 1 through 5
    pub rating: i32,
    /// Free-text tasting notes
    pub notes: String,
    /// When the drink was logged
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Drink and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each drink consumed exactly one bean
    #[sea_orm(
        belongs_to = "super::bean::Entity",
        from = "Column::BeanId",
        to = "super::bean::Column::Id"
    )]
    Bean,
    /// Join rows linking this drink to flavors
    #[sea_orm(has_many = "super::drink_flavor::Entity")]
    DrinkFlavors,
}

impl Related<super::bean::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bean.def()
    }
}

impl Related<super::drink_flavor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DrinkFlavors.def()
    }
}

impl Related<super::flavor::Entity> for Entity {
    fn to() -> RelationDef {
        super::drink_flavor::Relation::Flavor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::drink_flavor::Relation::Drink.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
