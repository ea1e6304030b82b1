//! Food Order Core
//!
//! Layered architecture:
//! - domain: food items, cart lines and the cart operations
//! - catalog: the read-only menu source (Firestore REST, in-memory)
//! - screens: per-screen state objects and the navigation/handoff codec
//!
//! Nothing in here touches the DOM, so all of it runs under `cargo test`.

pub mod domain;
pub mod catalog;
pub mod screens;

pub use domain::{format_price, Cart, CartLine, Entity, FoodItem};
pub use catalog::{CatalogConfig, CatalogError, CatalogResult, CatalogSource, FirestoreCatalog, InMemoryCatalog};
pub use screens::{fetch_menu, CartScreen, HandoffError, MenuScreen, Route, Session, SummaryScreen, CART_PARAM};
