//! Catalog Wiring
//!
//! Builds the Firestore catalog from build-time settings.

use food_order_core::{fetch_menu, CatalogConfig, FirestoreCatalog, FoodItem};

/// Project the storefront was first deployed against
const DEFAULT_PROJECT_ID: &str = "foodorderapp-334f7";

pub fn catalog_config() -> CatalogConfig {
    let project_id = option_env!("FOOD_ORDER_FIREBASE_PROJECT_ID").unwrap_or(DEFAULT_PROJECT_ID);
    let config = CatalogConfig::new(project_id);
    match option_env!("FOOD_ORDER_FIREBASE_API_KEY") {
        Some(key) => config.with_api_key(key),
        None => config,
    }
}

/// Read the menu; any failure is logged and yields no items
pub async fn load_menu() -> Vec<FoodItem> {
    match FirestoreCatalog::new(catalog_config()) {
        Ok(catalog) => fetch_menu(&catalog).await,
        Err(e) => {
            log::error!("Error fetching menu items: {}", e);
            Vec::new()
        }
    }
}
