/// Products as seen from the shipping service.
///
/// Only `quantity` is consulted, as a capacity check when a shipping line is created. This
/// service never decrements it.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of a product returned by `GET {products}/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteProduct {
    pub product_id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_unit: Option<f64>,
    /// Units available.
    pub quantity: u32,
}

impl RemoteProduct {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            product_title: None,
            price_unit: None,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_product_service_payload() {
        let json = r#"{
            "productId": 2,
            "productTitle": "Desk lamp",
            "imageUrl": "xxx",
            "sku": "dfqejklejrkn",
            "priceUnit": 35.0,
            "quantity": 50
        }"#;
        let product: RemoteProduct = serde_json::from_str(json).unwrap();
        assert_eq!(product.product_id, ProductId(2));
        assert_eq!(product.product_title.as_deref(), Some("Desk lamp"));
        assert_eq!(product.quantity, 50);
    }

    #[test]
    fn test_negative_quantity_is_rejected() {
        let result = serde_json::from_str::<RemoteProduct>(r#"{"productId": 2, "quantity": -1}"#);
        assert!(result.is_err());
    }
}
