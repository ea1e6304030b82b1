//! Cart handoff between screens
//!
//! The cart travels as the JSON text of its lines under the `cart` parameter.

use crate::domain::Cart;

/// Name of the navigation parameter carrying the cart
pub const CART_PARAM: &str = "cart";

/// Why a received payload could not be turned into a cart
#[derive(Debug, Clone, PartialEq)]
pub enum HandoffError {
    /// Not a JSON list of cart lines
    Malformed(String),
    /// Parsed, but breaks a cart invariant (zero quantity, negative price, repeated id)
    Invalid(String),
}

impl std::fmt::Display for HandoffError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandoffError::Malformed(msg) => write!(f, "Malformed cart payload: {}", msg),
            HandoffError::Invalid(msg) => write!(f, "Invalid cart payload: {}", msg),
        }
    }
}

impl std::error::Error for HandoffError {}

pub fn encode_cart(cart: &Cart) -> String {
    match serde_json::to_string(cart) {
        Ok(json) => json,
        Err(e) => {
            log::error!("failed to encode cart: {}", e);
            "[]".to_string()
        }
    }
}

pub fn decode_cart(payload: &str) -> Result<Cart, HandoffError> {
    let cart: Cart = serde_json::from_str(payload).map_err(|e| HandoffError::Malformed(e.to_string()))?;
    if !cart.is_well_formed() {
        return Err(HandoffError::Invalid("zero quantity, negative price or repeated item id".to_string()));
    }
    Ok(cart)
}

/// Cart for a screen that was handed `payload`: absent or unreadable means empty
pub fn receive_cart(payload: Option<&str>) -> Cart {
    let Some(payload) = payload else {
        return Cart::new();
    };
    decode_cart(payload).unwrap_or_else(|e| {
        log::warn!("{}; starting with an empty cart", e);
        Cart::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FoodItem;

    #[test]
    fn test_round_trip_keeps_lines() {
        let mut cart = Cart::new();
        cart.add_item(&FoodItem::new("p1", "Pizza", 250.0, "u"), 3);
        cart.add_item(&FoodItem::new("f1", "Fries", 59.5, "v"), 1);

        let received = receive_cart(Some(encode_cart(&cart).as_str()));
        assert_eq!(received, cart);
    }

    #[test]
    fn test_round_trip_empty() {
        assert_eq!(encode_cart(&Cart::new()), "[]");
        assert!(receive_cart(Some("[]")).is_empty());
    }

    #[test]
    fn test_absent_payload_is_empty_cart() {
        assert!(receive_cart(None).is_empty());
    }

    #[test]
    fn test_malformed_payload_is_empty_cart() {
        for payload in [
            "",
            "not json",
            "{}",
            r#"[{"id":"p1"}]"#,
            r#"[{"id":"a","name":"A","price":1,"image":"","quantity":0}]"#,
            r#"[{"id":"p1","name":"Pizza","price":-250,"image":"u","quantity":2}]"#,
        ] {
            assert!(receive_cart(Some(payload)).is_empty(), "payload {:?}", payload);
        }
    }

    #[test]
    fn test_decode_reports_reason() {
        assert!(matches!(decode_cart("nope"), Err(HandoffError::Malformed(_))));
        let dup = r#"[{"id":"a","name":"A","price":1,"image":"","quantity":1},
                      {"id":"a","name":"A","price":1,"image":"","quantity":1}]"#;
        assert!(matches!(decode_cart(dup), Err(HandoffError::Invalid(_))));
    }

    #[test]
    fn test_accepts_payload_from_js_client() {
        // Integer prices as written by JSON.stringify
        let cart = decode_cart(r#"[{"id":"p1","name":"Pizza","price":250,"image":"u","quantity":4}]"#).unwrap();
        assert_eq!(cart.total(), 1000.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::FoodItem;
    use crate::screens::Route;
    use proptest::prelude::*;

    fn arb_item() -> impl Strategy<Value = FoodItem> {
        // Quarter prices survive the JSON text exactly
        ("[a-z0-9]{1,6}", "\\PC{0,16}", 0u32..400_000, "\\PC{0,24}")
            .prop_map(|(id, name, quarters, image)| FoodItem::new(id, name, f64::from(quarters) / 4.0, image))
    }

    fn arb_cart() -> impl Strategy<Value = Cart> {
        prop::collection::vec((arb_item(), 1u32..50), 0..10).prop_map(|adds| {
            let mut cart = Cart::new();
            for (item, quantity) in adds {
                cart.add_item(&item, quantity);
            }
            cart
        })
    }

    proptest! {
        #[test]
        fn handoff_round_trip_preserves_cart(cart in arb_cart()) {
            let received = receive_cart(Some(encode_cart(&cart).as_str()));
            prop_assert_eq!(received, cart);
        }

        #[test]
        fn handoff_through_route_path_preserves_cart(cart in arb_cart(), summary in any::<bool>()) {
            let payload = Some(encode_cart(&cart));
            let route = if summary {
                Route::Summary { cart: payload }
            } else {
                Route::Cart { cart: payload }
            };

            let arrived = Route::parse(&format!("#{}", route.to_path()));

            prop_assert_eq!(&arrived, &route);
            prop_assert_eq!(receive_cart(arrived.cart_param()), cart);
        }
    }
}
