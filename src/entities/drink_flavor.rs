//! Drink-flavor join entity - the explicit many-to-many association table.
//!
//! One row per (drink, flavor) pair, composite primary key. Rows are written
//! together with their drink inside the same transaction.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Drink-flavor association model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "drink_flavors")]
pub struct Model {
    /// ID of the drink side of the association
    #[sea_orm(primary_key, auto_increment = false)]
    pub drink_id: i64,
    /// ID of the flavor side of the association
    #[sea_orm(primary_key, auto_increment = false)]
    pub flavor_id: i64,
}

/// Defines relationships between the join table and its two sides
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each join row belongs to one drink
    #[sea_orm(
        belongs_to = "super::drink::Entity",
        from = "Column::DrinkId",
        to = "super::drink::Column::Id"
    )]
    Drink,
    /// Each join row belongs to one flavor
    #[sea_orm(
        belongs_to = "super::flavor::Entity",
        from = "Column::FlavorId",
        to = "super::flavor::Column::Id"
    )]
    Flavor,
}

impl Related<super::drink::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Drink.def()
    }
}

impl Related<super::flavor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flavor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
