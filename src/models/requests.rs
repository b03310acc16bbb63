//! Request DTOs for the cache admin API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for storing a collection
/// (PUT /caches/:kind/:company/:customer)
///
/// `items` is required; a missing or null list is rejected rather than
/// treated as empty.
#[derive(Debug, Clone, Deserialize)]
pub struct SetItemsRequest<T> {
    pub items: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_items_deserialize() {
        let json = r#"{"items": [1, 2, 3]}"#;
        let req: SetItemsRequest<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(req.items, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_items_allowed() {
        let req: SetItemsRequest<u32> = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(req.items.is_empty());
    }

    #[test]
    fn test_missing_or_null_items_rejected() {
        assert!(serde_json::from_str::<SetItemsRequest<u32>>("{}").is_err());
        assert!(serde_json::from_str::<SetItemsRequest<u32>>(r#"{"items": null}"#).is_err());
    }
}
