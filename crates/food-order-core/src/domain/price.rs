//! Price formatting shared by every screen.

/// Currency prefix used throughout the storefront
pub const CURRENCY: &str = "₹";

/// `₹250`, `₹2.5`: the shortest form of the amount, no trailing `.0`
pub fn format_price(amount: f64) -> String {
    format!("{}{}", CURRENCY, amount)
}
