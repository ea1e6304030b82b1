//! Navigation routes
//!
//! `/`, `/cart?cart=...` and `/summary?cart=...`; the cart JSON is
//! percent-encoded into the query.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use super::handoff::CART_PARAM;

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Menu,
    Cart { cart: Option<String> },
    Summary { cart: Option<String> },
}

impl Route {
    /// The serialized cart this route carries, if any
    pub fn cart_param(&self) -> Option<&str> {
        match self {
            Route::Menu => None,
            Route::Cart { cart } | Route::Summary { cart } => cart.as_deref(),
        }
    }

    pub fn to_path(&self) -> String {
        let (base, cart) = match self {
            Route::Menu => return "/".to_string(),
            Route::Cart { cart } => ("/cart", cart),
            Route::Summary { cart } => ("/summary", cart),
        };
        match cart {
            Some(json) => format!("{}?{}={}", base, CART_PARAM, utf8_percent_encode(json, NON_ALPHANUMERIC)),
            None => base.to_string(),
        }
    }

    /// Parse a path (optionally `#`-prefixed, as found in a URL hash).
    /// Anything unrecognised lands on the menu.
    pub fn parse(path: &str) -> Route {
        let path = path.trim_start_matches('#');
        let (base, query) = match path.split_once('?') {
            Some((base, query)) => (base, Some(query)),
            None => (path, None),
        };
        let cart = query.and_then(|q| {
            q.split('&')
                .filter_map(|pair| pair.split_once('='))
                .find(|(key, _)| *key == CART_PARAM)
                .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
        });

        match base.trim_end_matches('/') {
            "/cart" | "cart" => Route::Cart { cart },
            "/summary" | "summary" => Route::Summary { cart },
            _ => Route::Menu,
        }
    }
}
