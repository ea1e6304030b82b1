//! Menu Screen State
//!
//! Catalog grid, per-item quantity selectors and the cart being built.

use std::collections::HashMap;

use crate::catalog::CatalogSource;
use crate::domain::{Cart, CartLine, FoodItem};
use super::handoff::encode_cart;
use super::route::Route;

/// Read the whole menu. A failed read is logged and yields an empty menu.
pub async fn fetch_menu<S: CatalogSource + ?Sized>(source: &S) -> Vec<FoodItem> {
    log::info!("fetching menu items");
    match source.list_items().await {
        Ok(items) => {
            log::info!("loaded {} menu items", items.len());
            items
        }
        Err(e) => {
            log::error!("Error fetching menu items: {}", e);
            Vec::new()
        }
    }
}

/// State of one menu session. A fresh session has no items and an empty cart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuScreen {
    items: Vec<FoodItem>,
    /// Set once a catalog read has finished, even an empty one
    loaded: bool,
    quantities: HashMap<String, u32>,
    cart: Cart,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn show_items(&mut self, items: Vec<FoodItem>) {
        self.items = items;
        self.loaded = true;
    }

    /// Whether this session already read the catalog
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Selector value for `id`; 1 until touched
    pub fn selected_quantity(&self, id: &str) -> u32 {
        self.quantities.get(id).copied().unwrap_or(1)
    }

    pub fn increase(&mut self, id: &str) -> u32 {
        let next = self.selected_quantity(id).saturating_add(1);
        self.quantities.insert(id.to_string(), next);
        next
    }

    pub fn decrease(&mut self, id: &str) -> u32 {
        let next = self.selected_quantity(id).saturating_sub(1).max(1);
        self.quantities.insert(id.to_string(), next);
        next
    }

    /// Merge the selected quantity of `item` into the cart and return the
    /// resulting line. The selector keeps its value afterwards.
    pub fn add_to_cart(&mut self, item: &FoodItem) -> Option<CartLine> {
        let quantity = self.selected_quantity(&item.id);
        let line = self.cart.add_item(item, quantity).cloned();
        if let Some(line) = &line {
            log::info!("added {} x {} to cart (now {})", quantity, item.name, line.quantity);
        }
        line
    }

    /// Cart badge count
    pub fn total_items(&self) -> u32 {
        self.cart.total_quantity()
    }

    /// Route to the cart screen carrying a copy of this cart
    pub fn checkout(&self) -> Route {
        Route::Cart { cart: Some(encode_cart(&self.cart)) }
    }
}
