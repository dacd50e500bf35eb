//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod bean;
pub mod drink;
pub mod drink_flavor;
pub mod flavor;

// Re-export specific types to avoid conflicts
pub use bean::{Column as BeanColumn, Entity as Bean, Model as BeanModel};
pub use drink::{Column as DrinkColumn, Entity as Drink, Model as DrinkModel};
pub use drink_flavor::{
    Column as DrinkFlavorColumn, Entity as DrinkFlavor, Model as DrinkFlavorModel,
};
pub use flavor::{Column as FlavorColumn, Entity as Flavor, Model as FlavorModel};
