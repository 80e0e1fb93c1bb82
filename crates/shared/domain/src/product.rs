//! Product domain entity and its public views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub product_type: String,
    pub description: String,
    /// Stock count. Expected to be non-negative, not enforced.
    pub amount: i32,
    pub price_in_cents: i32,
    /// Account that created the product
    pub owner_user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Data needed to persist a new product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub product_type: String,
    pub description: String,
    pub amount: i32,
    pub price_in_cents: i32,
    pub owner_user_id: Uuid,
}

/// Partial update of a product.
///
/// `None` keeps the stored value. The description is always rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub amount: Option<i32>,
    pub description: String,
    pub price_in_cents: Option<i32>,
}

/// Full product view returned by id lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub description: String,
    pub amount: i32,
    pub price_in_cents: i32,
    pub owner_user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            product_type: product.product_type,
            description: product.description,
            amount: product.amount,
            price_in_cents: product.price_in_cents,
            owner_user_id: product.owner_user_id,
            created_at: product.created_at,
        }
    }
}

/// Catalog listing entry. Stock is deliberately left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: Uuid,
    pub name: String,
    pub price_in_cents: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price_in_cents: product.price_in_cents,
            created_at: product.created_at,
        }
    }
}

/// Hot products entry, carrying the stock the ranking was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct HotProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price_in_cents: i32,
    pub amount: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for HotProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price_in_cents: product.price_in_cents,
            amount: product.amount,
            created_at: product.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product {
            id: Uuid::new_v4(),
            name: "Widget".to_string(),
            product_type: "tool".to_string(),
            description: "A widget".to_string(),
            amount: 10,
            price_in_cents: 500,
            owner_user_id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_summary_omits_amount() {
        let json = serde_json::to_value(ProductSummary::from(widget())).unwrap();

        assert!(json.get("amount").is_none());
        assert_eq!(json["priceInCents"], 500);
        assert_eq!(json["name"], "Widget");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_hot_view_keeps_amount() {
        let json = serde_json::to_value(HotProductResponse::from(widget())).unwrap();
        assert_eq!(json["amount"], 10);
    }

    #[test]
    fn test_full_view_uses_type_key() {
        let product = widget();
        let owner = product.owner_user_id;
        let json = serde_json::to_value(ProductResponse::from(product)).unwrap();

        assert_eq!(json["type"], "tool");
        assert_eq!(json["ownerUserId"], owner.to_string());
        assert_eq!(json["description"], "A widget");
    }
}
