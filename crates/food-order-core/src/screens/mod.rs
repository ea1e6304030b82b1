//! Screens
//!
//! One state object per screen. A screen owns its cart outright; moving to the
//! next screen serializes the cart into a [`Route`] and the next screen decodes
//! its own copy, so no two screens ever share a cart. A [`Session`] keeps the
//! screens of one order alive across Back navigation.

mod handoff;
mod route;
mod menu;
mod cart;
mod summary;
mod session;


pub use handoff::{decode_cart, encode_cart, receive_cart, HandoffError, CART_PARAM};
pub use route::Route;
pub use menu::{fetch_menu, MenuScreen};
pub use cart::CartScreen;
pub use summary::SummaryScreen;
pub use session::Session;
