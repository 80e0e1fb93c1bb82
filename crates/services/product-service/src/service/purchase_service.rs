//! Purchase service.
//!
//! Purchases are recorded as-is. Product stock is not checked or decremented.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use common::AppResult;
use domain::{NewPurchase, Purchase};

use crate::repository::PurchaseRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Purchase service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PurchaseService: Send + Sync {
    /// Record a purchase of `amount` units
    async fn record(&self, purchase: NewPurchase) -> AppResult<Purchase>;
}

/// Concrete implementation of PurchaseService using repository.
pub struct PurchaseRecorder {
    repo: Arc<dyn PurchaseRepository>,
}

impl PurchaseRecorder {
    pub fn new(repo: Arc<dyn PurchaseRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl PurchaseService for PurchaseRecorder {
    async fn record(&self, purchase: NewPurchase) -> AppResult<Purchase> {
        let purchase = self.repo.create(purchase).await?;
        info!(
            purchase_id = %purchase.id,
            product_id = %purchase.product_id,
            amount = purchase.amount,
            "Purchase recorded"
        );
        Ok(purchase)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use common::AppError;
    use uuid::Uuid;

    use super::*;
    use crate::repository::MockPurchaseRepository;

    #[tokio::test]
    async fn test_record_persists_purchase() {
        let mut repo = MockPurchaseRepository::new();
        repo.expect_create().times(1).returning(|p| {
            Ok(Purchase {
                id: Uuid::new_v4(),
                product_id: p.product_id,
                user_id: p.user_id,
                amount: p.amount,
                created_at: Utc::now(),
            })
        });

        let service = PurchaseRecorder::new(Arc::new(repo));
        let input = NewPurchase {
            product_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            amount: 3,
        };

        let purchase = service.record(input).await.unwrap();
        assert_eq!(purchase.product_id, input.product_id);
        assert_eq!(purchase.amount, 3);
    }

    #[tokio::test]
    async fn test_record_unknown_product_is_not_found() {
        let mut repo = MockPurchaseRepository::new();
        repo.expect_create().returning(|_| Err(AppError::NotFound));

        let service = PurchaseRecorder::new(Arc::new(repo));
        let result = service
            .record(NewPurchase {
                product_id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                amount: 1,
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
