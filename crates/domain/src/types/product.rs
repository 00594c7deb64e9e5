//! Product catalog types

use serde::{Deserialize, Serialize};

/// A product listing
///
/// Only `id` and `name` are guaranteed on every dump: nested snapshots
/// (a cart line's product, an order line's product) carry a trimmed field
/// set, and `seller_id` never appears on the wire at all. Everything else
/// defaults to zero/absent so one type decodes every nesting level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub seller_id: i64,
    #[serde(default)]
    pub category_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub is_deleted: bool,
    /// Server-assigned image records; absent on listings that omit them
    #[serde(default)]
    pub images: Option<Vec<ProductImage>>,
}

/// One uploaded product image, identified by a server-assigned id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: i64,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_decodes_without_optional_fields() {
        let json = r#"{
            "id": 7,
            "seller_id": 2,
            "category_id": 3,
            "name": "Sneaker",
            "description": null,
            "price": 49.9,
            "stock": 12
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.rating, 0.0);
        assert!(!product.is_deleted);
        assert!(product.images.is_none());
    }

    #[test]
    fn test_product_decodes_full_catalog_dump() {
        // The catalog dump carries category_name but no seller_id.
        let json = r#"{
            "id": 7,
            "name": "Sneaker",
            "description": "Running shoe",
            "price": 49.9,
            "stock": 12,
            "category_id": 3,
            "category_name": "Shoes",
            "images": [{"id": 1, "url": "/uploads/1.jpg"}]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category_id, 3);
        assert_eq!(product.seller_id, 0);
        assert_eq!(product.price, 49.9);
    }

    #[test]
    fn test_product_decodes_order_line_snapshot() {
        // Order lines embed only id, name and images.
        let json = r#"{
            "id": 7,
            "name": "Sneaker",
            "images": []
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "Sneaker");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.stock, 0);
        assert!(product.images.unwrap().is_empty());
    }

    #[test]
    fn test_product_decodes_with_images() {
        let json = r#"{
            "id": 7,
            "seller_id": 2,
            "category_id": 3,
            "name": "Sneaker",
            "description": "Running shoe",
            "price": 49.9,
            "stock": 12,
            "rating": 4.5,
            "is_deleted": false,
            "images": [{"id": 1, "url": "/uploads/1.jpg"}]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        let images = product.images.unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].url, "/uploads/1.jpg");
    }
}
