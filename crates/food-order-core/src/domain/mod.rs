//! Domain Layer
//!
//! Menu entities and the cart arithmetic.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod food_item;
mod cart;
mod price;

pub use entity::Entity;
pub use food_item::FoodItem;
pub use cart::{Cart, CartLine};
pub use price::format_price;
