//! Cart Screen State
//!
//! Review the received cart and edit line quantities. Lines are never added
//! or removed here.

use crate::domain::{Cart, CartLine};
use super::handoff::{encode_cart, receive_cart};
use super::route::Route;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartScreen {
    cart: Cart,
}

impl CartScreen {
    /// Build from the `cart` navigation parameter
    pub fn from_param(payload: Option<&str>) -> Self {
        Self { cart: receive_cart(payload) }
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn quantity(&self, id: &str) -> Option<u32> {
        self.cart.get(id).map(|line| line.quantity)
    }

    pub fn increment(&mut self, id: &str) -> Option<u32> {
        self.cart.adjust_quantity(id, 1)
    }

    pub fn decrement(&mut self, id: &str) -> Option<u32> {
        self.cart.adjust_quantity(id, -1)
    }

    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    /// Route to the summary screen carrying a copy of this cart
    pub fn place_order(&self) -> Route {
        Route::Summary { cart: Some(encode_cart(&self.cart)) }
    }
}
