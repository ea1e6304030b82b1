//! In-memory catalog

use async_trait::async_trait;
use crate::domain::FoodItem;
use super::error::{CatalogError, CatalogResult};
use super::traits::CatalogSource;

/// Fixed item list, or a fixed failure
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: Vec<FoodItem>,
    failure: Option<CatalogError>,
}

impl InMemoryCatalog {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self { items, failure: None }
    }

    /// A catalog whose every read fails with `error`
    pub fn failing(error: CatalogError) -> Self {
        Self { items: Vec::new(), failure: Some(error) }
    }
}

#[async_trait(?Send)]
impl CatalogSource for InMemoryCatalog {
    async fn list_items(&self) -> CatalogResult<Vec<FoodItem>> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.items.clone()),
        }
    }
}
