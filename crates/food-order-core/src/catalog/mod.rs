//! Catalog Layer
//!
//! Read-only access to the menu collection.
//! Implementations can use Firestore over REST, in-memory, etc.

mod error;
mod config;
mod traits;
mod firestore;
mod memory;

#[cfg(test)]
mod tests;

pub use error::{CatalogError, CatalogResult};
pub use config::CatalogConfig;
pub use traits::CatalogSource;
pub use firestore::{collect_pages, parse_documents, read_page, FirestoreCatalog, Page};
pub use memory::InMemoryCatalog;
