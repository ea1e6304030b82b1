//! Order Summary Screen State
//!
//! Read-only breakdown of the final cart.

use crate::domain::{format_price, Cart, CartLine};
use super::handoff::receive_cart;
use super::route::Route;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryScreen {
    cart: Cart,
}

impl SummaryScreen {
    pub fn from_param(payload: Option<&str>) -> Self {
        Self { cart: receive_cart(payload) }
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    /// Acknowledge the order. The cart is dropped; the session restarts at
    /// a fresh menu.
    pub fn confirm(self) -> Route {
        log::info!(
            "order confirmed: {} lines, total {}",
            self.cart.len(),
            format_price(self.cart.total())
        );
        Route::Menu
    }
}
