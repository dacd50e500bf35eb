//! Flavor entity - A tasting-note tag, many-to-many with drinks.
//!
//! Flavors are created lazily the first time a drink references an unseen
//! name and are never deleted. The association to drinks goes through the
//! explicit `drink_flavors` join table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Flavor database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "flavors")]
pub struct Model {
    /// Unique identifier for the flavor
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique tag name (e.g., "Citrus")
    #[sea_orm(unique)]
    pub name: String,
}

/// Defines relationships between Flavor and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Join rows linking this flavor to drinks
    #[sea_orm(has_many = "super::drink_flavor::Entity")]
    DrinkFlavors,
}

impl Related<super::drink_flavor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DrinkFlavors.def()
    }
}

impl Related<super::drink::Entity> for Entity {
    fn to() -> RelationDef {
        super::drink_flavor::Relation::Drink.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::drink_flavor::Relation::Flavor.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
