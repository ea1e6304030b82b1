//! Cart Entity
//!
//! An ordered list of lines, at most one per food item id, in insertion order.
//! Quantities never drop below 1.

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::food_item::FoodItem;

/// A food item plus how many of it are being ordered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: FoodItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(item: FoodItem, quantity: u32) -> Self {
        Self { item, quantity: quantity.max(1) }
    }

    /// price × quantity
    pub fn subtotal(&self) -> f64 {
        self.item.price * f64::from(self.quantity)
    }
}

impl Entity for CartLine {
    type Id = str;

    fn id(&self) -> &str {
        self.item.id()
    }
}

/// Ordered cart. Cloning it is the only way to share it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Merge `quantity` of `item` into the cart.
    ///
    /// An existing line keeps its position and grows by `quantity`; otherwise a new
    /// line is appended. A zero quantity leaves the cart untouched and returns `None`.
    pub fn add_item(&mut self, item: &FoodItem, quantity: u32) -> Option<&CartLine> {
        if quantity == 0 {
            return None;
        }
        let index = match self.lines.iter().position(|line| line.id() == item.id()) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(quantity);
                index
            }
            None => {
                self.lines.push(CartLine::new(item.clone(), quantity));
                self.lines.len() - 1
            }
        };
        self.lines.get(index)
    }

    /// Set the matching line's quantity to `max(1, quantity + delta)`.
    ///
    /// Returns the new quantity, or `None` (cart unchanged) when no line has `id`.
    pub fn adjust_quantity(&mut self, id: &str, delta: i32) -> Option<u32> {
        let line = self.lines.iter_mut().find(|line| line.id() == id)?;
        let adjusted = (i64::from(line.quantity) + i64::from(delta)).clamp(1, i64::from(u32::MAX));
        line.quantity = adjusted as u32;
        Some(line.quantity)
    }

    /// Sum of price × quantity over all lines; 0 for an empty cart
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of quantities (the cart badge count)
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// True when every line has quantity >= 1, a finite non-negative price, and no id repeats
    pub fn is_well_formed(&self) -> bool {
        self.lines.iter().enumerate().all(|(i, line)| {
            line.quantity >= 1
                && line.item.price.is_finite()
                && line.item.price >= 0.0
                && self.lines[..i].iter().all(|prev| prev.id() != line.id())
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: u8) -> FoodItem {
        FoodItem::new(format!("i{id}"), format!("Item {id}"), f64::from(id) * 10.0, "")
    }

    /// Carts built from a random sequence of adds over a small id space
    fn arb_cart() -> impl Strategy<Value = Cart> {
        prop::collection::vec((0u8..6, 1u32..20), 0..12).prop_map(|adds| {
            let mut cart = Cart::new();
            for (id, quantity) in adds {
                cart.add_item(&item(id), quantity);
            }
            cart
        })
    }

    proptest! {
        #[test]
        fn add_grows_total_quantity_by_exactly_q(cart in arb_cart(), id in 0u8..6, q in 1u32..1000) {
            let mut cart = cart;
            let before = cart.total_quantity();
            cart.add_item(&item(id), q);
            prop_assert_eq!(cart.total_quantity(), before + q);
            prop_assert!(cart.is_well_formed());
        }

        #[test]
        fn add_present_item_keeps_line_count(cart in arb_cart(), q in 1u32..1000) {
            prop_assume!(!cart.is_empty());
            let mut cart = cart;
            let ids: Vec<String> = cart.lines().iter().map(|l| l.id().to_string()).collect();
            let target = cart.lines()[ids.len() / 2].item.clone();

            cart.add_item(&target, q);

            let after: Vec<String> = cart.lines().iter().map(|l| l.id().to_string()).collect();
            prop_assert_eq!(after, ids);
        }

        #[test]
        fn adjust_is_max_one_of_sum(cart in arb_cart(), pick in 0usize..12, delta in -200i32..200) {
            prop_assume!(!cart.is_empty());
            let mut cart = cart;
            let line = cart.lines()[pick % cart.len()].clone();
            let others: Vec<CartLine> =
                cart.lines().iter().filter(|l| l.id() != line.id()).cloned().collect();

            let got = cart.adjust_quantity(line.id(), delta).unwrap();

            let expected = (i64::from(line.quantity) + i64::from(delta)).max(1) as u32;
            prop_assert_eq!(got, expected);
            prop_assert!(got >= 1);
            let untouched: Vec<CartLine> =
                cart.lines().iter().filter(|l| l.id() != line.id()).cloned().collect();
            prop_assert_eq!(untouched, others);
        }
    }
}
