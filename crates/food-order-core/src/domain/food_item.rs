//! Food Item Entity
//!
//! One purchasable menu entry as read from the catalog.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A menu entry. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Catalog document id
    pub id: String,
    /// Display name
    pub name: String,
    /// Unit price, never negative
    pub price: f64,
    /// Image URI
    pub image: String,
}

impl FoodItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

impl Entity for FoodItem {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}
