//! Bean entity - Represents a coffee-bean stock-keeping unit.
//!
//! Each bean has a unique name, an origin, roaster and process metadata,
//! a cost per kilogram, and the grams currently in stock. Stock rises on
//! restock and falls as drinks are logged against it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Bean database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "beans")]
pub struct Model {
    /// Unique identifier for the bean
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique human-readable name (e.g., "Kenya AA")
    #[sea_orm(unique)]
    pub name: String,
    /// Country or region of origin
    pub origin: String,
    /// Roaster the beans came from
    pub roaster: String,
    /// Processing method (washed, natural, ...), if known
    pub process: Option<String>,
    /// Cost per kilogram in dollars
    pub cost_per_kg: f64,
    /// Grams currently available for sale
    pub grams_in_stock: f64,
}

/// Defines relationships between Bean and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One bean has many drinks logged against it
    #[sea_orm(has_many = "super::drink::Entity")]
    Drinks,
}

impl Related<super::drink::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Drinks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
