//! Catalog Tests
//!
//! Firestore page decoding, paging and the in-memory source.

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::catalog::{
        collect_pages, parse_documents, read_page, CatalogConfig, CatalogError, CatalogResult, CatalogSource,
        FirestoreCatalog, InMemoryCatalog, Page,
    };
    use crate::domain::FoodItem;

    fn item(id: &str) -> FoodItem {
        FoodItem::new(id, id.to_uppercase(), 10.0, "")
    }

    fn page(ids: &[&str], next: Option<&str>) -> CatalogResult<Page> {
        Ok((ids.iter().map(|id| item(id)).collect(), next.map(str::to_string)))
    }

    /// Serves `pages` in order and records the token each request carried
    async fn read_canned(pages: Vec<CatalogResult<Page>>) -> (CatalogResult<Vec<FoodItem>>, Vec<Option<String>>) {
        let mut pages = VecDeque::from(pages);
        let mut requested = Vec::new();
        let result = collect_pages(|token| {
            requested.push(token);
            let page = pages
                .pop_front()
                .unwrap_or_else(|| Err(CatalogError::Http("no more canned pages".to_string())));
            async move { page }
        })
        .await;
        (result, requested)
    }

    const PAGE: &str = r#"{
        "documents": [
            {
                "name": "projects/demo/databases/(default)/documents/menuItems/p1",
                "fields": {
                    "name": {"stringValue": "Pizza"},
                    "price": {"integerValue": "250"},
                    "image": {"stringValue": "https://img.example/pizza.png"}
                },
                "createTime": "2025-06-01T10:00:00.000000Z",
                "updateTime": "2025-06-01T10:00:00.000000Z"
            },
            {
                "name": "projects/demo/databases/(default)/documents/menuItems/f1",
                "fields": {
                    "name": {"stringValue": "Fries"},
                    "price": {"doubleValue": 59.5},
                    "image": {"stringValue": "https://img.example/fries.png"}
                }
            }
        ],
        "nextPageToken": "abc"
    }"#;

    #[test]
    fn test_parse_documents() {
        let (items, next) = parse_documents(PAGE).expect("parse failed");

        assert_eq!(items, vec![
            FoodItem::new("p1", "Pizza", 250.0, "https://img.example/pizza.png"),
            FoodItem::new("f1", "Fries", 59.5, "https://img.example/fries.png"),
        ]);
        assert_eq!(next.as_deref(), Some("abc"));
    }

    #[test]
    fn test_parse_empty_collection() {
        let (items, next) = parse_documents("{}").unwrap();
        assert!(items.is_empty());
        assert!(next.is_none());
    }

    #[test]
    fn test_parse_skips_incomplete_documents() {
        let body = r#"{"documents": [
            {"name": "projects/d/databases/(default)/documents/menuItems/a",
             "fields": {"price": {"integerValue": "10"}}},
            {"name": "projects/d/databases/(default)/documents/menuItems/b",
             "fields": {"name": {"stringValue": "B"}, "price": {"stringValue": "10"}}},
            {"name": "projects/d/databases/(default)/documents/menuItems/c",
             "fields": {"name": {"stringValue": "C"}, "price": {"integerValue": "-5"}}},
            {"name": "projects/d/databases/(default)/documents/menuItems/d",
             "fields": {"name": {"stringValue": "D"}, "price": {"integerValue": "7"}}}
        ]}"#;

        let (items, _) = parse_documents(body).unwrap();
        assert_eq!(items, vec![FoodItem::new("d", "D", 7.0, "")]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_documents("<html>quota exceeded</html>").unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn test_empty_page_token_ends_paging() {
        let (_, next) = parse_documents(r#"{"documents": [], "nextPageToken": ""}"#).unwrap();
        assert!(next.is_none());
    }

    #[test]
    fn test_firestore_catalog_rejects_bad_config() {
        let err = FirestoreCatalog::new(CatalogConfig::new("")).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[tokio::test]
    async fn test_in_memory_catalog() {
        let catalog = InMemoryCatalog::new(vec![FoodItem::new("p1", "Pizza", 250.0, "u")]);
        let items = catalog.list_items().await.expect("list failed");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Pizza");
    }

    #[tokio::test]
    async fn test_failing_catalog() {
        let catalog = InMemoryCatalog::failing(CatalogError::Status(503, "unavailable".into()));
        let err = catalog.list_items().await.unwrap_err();
        assert_eq!(err.to_string(), "Unexpected status 503: unavailable");
    }

    #[tokio::test]
    async fn test_collect_pages_follows_tokens() {
        let (result, requested) = read_canned(vec![
            page(&["a", "b"], Some("t1")),
            page(&["c"], None),
        ])
        .await;

        let ids: Vec<String> = result.unwrap().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(requested, vec![None, Some("t1".to_string())]);
    }

    #[tokio::test]
    async fn test_collect_pages_stops_on_echoed_token() {
        let (result, requested) = read_canned(vec![
            page(&["a"], Some("same")),
            page(&["b"], Some("same")),
            page(&["never"], None),
        ])
        .await;

        assert_eq!(result.unwrap().len(), 2);
        assert_eq!(requested.len(), 2);
    }

    #[tokio::test]
    async fn test_collect_pages_propagates_later_page_error() {
        let (result, requested) = read_canned(vec![
            page(&["a"], Some("t1")),
            Err(CatalogError::Status(500, "backend error".to_string())),
            page(&["never"], None),
        ])
        .await;

        assert_eq!(result.unwrap_err(), CatalogError::Status(500, "backend error".to_string()));
        assert_eq!(requested.len(), 2);
    }

    #[test]
    fn test_read_page_maps_error_status() {
        let err = read_page(403, "permission denied").unwrap_err();
        assert_eq!(err, CatalogError::Status(403, "permission denied".to_string()));
        assert_eq!(err.to_string(), "Unexpected status 403: permission denied");

        // The body of a failed response is never decoded
        assert!(matches!(read_page(503, "{}"), Err(CatalogError::Status(503, _))));

        let (items, next) = read_page(200, PAGE).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(next.as_deref(), Some("abc"));
    }
}
