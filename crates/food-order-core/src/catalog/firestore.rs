//! Firestore catalog
//!
//! Reads the menu collection through the Firestore REST API
//! (`documents.list`). Each document looks like:
//!
//! ```json
//! {
//!   "name": "projects/p/databases/(default)/documents/menuItems/abc123",
//!   "fields": {
//!     "name":  { "stringValue": "Pizza" },
//!     "price": { "integerValue": "250" },
//!     "image": { "stringValue": "https://..." }
//!   }
//! }
//! ```
//!
//! The item id is the last segment of `name`. Pages are followed through
//! `nextPageToken` until the whole collection has been read.

use std::future::Future;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::FoodItem;
use super::config::CatalogConfig;
use super::error::{CatalogError, CatalogResult};
use super::traits::CatalogSource;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    // An empty collection comes back as `{}`
    #[serde(default)]
    documents: Vec<Document>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

impl Document {
    fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    fn string_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key)?.get("stringValue")?.as_str()
    }

    fn number_field(&self, key: &str) -> Option<f64> {
        let value = self.fields.get(key)?;
        if let Some(int) = value.get("integerValue") {
            // int64 values are transported as strings
            return match int {
                Value::String(s) => s.parse::<i64>().ok().map(|n| n as f64),
                other => other.as_i64().map(|n| n as f64),
            };
        }
        value.get("doubleValue")?.as_f64()
    }

    fn into_food_item(self) -> Option<FoodItem> {
        let id = self.id();
        if id.is_empty() {
            log::warn!("skipping menu document with empty name");
            return None;
        }
        let Some(name) = self.string_field("name") else {
            log::warn!("skipping menu document {}: missing name", id);
            return None;
        };
        let price = match self.number_field("price") {
            Some(price) if price.is_finite() && price >= 0.0 => price,
            _ => {
                log::warn!("skipping menu document {}: missing or invalid price", id);
                return None;
            }
        };
        let image = self.string_field("image").unwrap_or_default();
        Some(FoodItem::new(id, name, price, image))
    }
}

/// Decode one `documents.list` page into items plus the next page token
pub fn parse_documents(body: &str) -> CatalogResult<Page> {
    let page: ListDocumentsResponse =
        serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))?;
    let items = page.documents.into_iter().filter_map(Document::into_food_item).collect();
    let next = page.next_page_token.filter(|token| !token.is_empty());
    Ok((items, next))
}

/// Menu collection in a Firestore database
#[derive(Debug, Clone)]
pub struct FirestoreCatalog {
    config: CatalogConfig,
    client: reqwest::Client,
}

impl FirestoreCatalog {
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            client: reqwest::Client::new(),
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    async fn fetch_page(&self, page_token: Option<String>) -> CatalogResult<Page> {
        let mut query = vec![("pageSize", self.config.page_size.to_string())];
        if let Some(key) = &self.config.api_key {
            query.push(("key", key.clone()));
        }
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response = self
            .client
            .get(self.config.documents_url())
            .query(&query)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        read_page(status, &body)
    }
}

/// Items of one page plus the token of the next one
pub type Page = (Vec<FoodItem>, Option<String>);

/// Turn a `documents.list` response into a page; any non-2xx status is an error
pub fn read_page(status: u16, body: &str) -> CatalogResult<Page> {
    if !(200..300).contains(&status) {
        return Err(CatalogError::Status(status, body.to_string()));
    }
    parse_documents(body)
}

/// Read pages from `fetch_page` starting with no token and following each
/// `nextPageToken` until none is left. The first failing page aborts the read.
pub async fn collect_pages<F, Fut>(mut fetch_page: F) -> CatalogResult<Vec<FoodItem>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = CatalogResult<Page>>,
{
    let (mut items, mut next) = fetch_page(None).await?;
    while let Some(token) = next.take() {
        let (page, following) = fetch_page(Some(token.clone())).await?;
        items.extend(page);
        // A server echoing the same token would loop forever
        next = following.filter(|t| *t != token);
    }
    Ok(items)
}

#[async_trait(?Send)]
impl CatalogSource for FirestoreCatalog {
    async fn list_items(&self) -> CatalogResult<Vec<FoodItem>> {
        collect_pages(|token| self.fetch_page(token)).await
    }
}
