//! Catalog configuration
//!
//! Where the menu collection lives.

use serde::{Deserialize, Serialize};
use super::error::{CatalogError, CatalogResult};

pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_COLLECTION: &str = "menuItems";
pub const DEFAULT_PAGE_SIZE: u32 = 300;

/// Firestore project + collection holding the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    pub project_id: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl CatalogConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            api_key: None,
            collection: default_collection(),
            base_url: default_base_url(),
            page_size: default_page_size(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        self.api_key = if key.is_empty() { None } else { Some(key) };
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn validate(&self) -> CatalogResult<()> {
        if self.project_id.trim().is_empty() {
            return Err(CatalogError::Config("project id is empty".to_string()));
        }
        if self.collection.trim().is_empty() {
            return Err(CatalogError::Config("collection is empty".to_string()));
        }
        if self.page_size == 0 {
            return Err(CatalogError::Config("page size must be positive".to_string()));
        }
        Ok(())
    }

    /// `{base}/projects/{project}/databases/(default)/documents/{collection}`
    pub fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            self.base_url.trim_end_matches('/'),
            self.project_id,
            self.collection,
        )
    }
}
