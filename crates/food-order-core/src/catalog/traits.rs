//! Catalog Layer - Core Traits

use async_trait::async_trait;
use crate::domain::FoodItem;
use super::error::CatalogResult;

/// A read-only source of menu items.
///
/// `?Send` because browser fetch futures are not `Send`.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Read every item in the collection, in the order the source returns them
    async fn list_items(&self) -> CatalogResult<Vec<FoodItem>>;
}
