//! Purchase records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An immutable purchase of some amount of a product by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: Uuid,
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub amount: i32,
    pub created_at: DateTime<Utc>,
}

/// Data needed to record a purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewPurchase {
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub amount: i32,
}
