//! Purchase repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{NewPurchase, Purchase};
use store::entities::purchase::ActiveModel;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Purchase repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    /// Record a purchase. Unknown product or user yields `NotFound`.
    async fn create(&self, purchase: NewPurchase) -> AppResult<Purchase>;
}

/// Concrete implementation of PurchaseRepository
pub struct PurchaseStore {
    db: Arc<DatabaseConnection>,
}

impl PurchaseStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PurchaseRepository for PurchaseStore {
    async fn create(&self, purchase: NewPurchase) -> AppResult<Purchase> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(purchase.product_id),
            user_id: Set(purchase.user_id),
            amount: Set(purchase.amount),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::from_write(e, "Purchase"))?;
        Ok(Purchase::from(model))
    }
}
