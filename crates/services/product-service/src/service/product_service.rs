//! Product service - Catalog business logic.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{NewProduct, Product, ProductChanges};

use super::ranking::rank_hot;
use crate::repository::ProductRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Catalog entry as submitted by a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProduct {
    pub name: String,
    pub product_type: String,
    pub description: String,
    pub amount: i32,
    pub price_in_cents: i32,
}

/// Product service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Add a product owned by `owner`. Names are unique.
    async fn create(&self, input: CreateProduct, owner: Uuid) -> AppResult<Product>;

    /// Whole catalog in insertion order
    async fn list(&self) -> AppResult<Vec<Product>>;

    /// Up to five products selected by stock
    async fn hot(&self) -> AppResult<Vec<Product>>;

    async fn get(&self, id: Uuid) -> AppResult<Product>;

    async fn update(&self, id: Uuid, changes: ProductChanges) -> AppResult<()>;

    async fn patch_amount(&self, id: Uuid, amount: i32) -> AppResult<()>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ProductService using repository.
pub struct ProductCatalog {
    repo: Arc<dyn ProductRepository>,
}

impl ProductCatalog {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ProductService for ProductCatalog {
    async fn create(&self, input: CreateProduct, owner: Uuid) -> AppResult<Product> {
        if self.repo.find_by_name(&input.name).await?.is_some() {
            debug!(name = %input.name, "Product name already taken");
            return Err(AppError::conflict("Product"));
        }

        let product = self
            .repo
            .create(NewProduct {
                name: input.name,
                product_type: input.product_type,
                description: input.description,
                amount: input.amount,
                price_in_cents: input.price_in_cents,
                owner_user_id: owner,
            })
            .await?;

        info!(product_id = %product.id, owner = %owner, "Product created");
        Ok(product)
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        self.repo.list().await
    }

    async fn hot(&self) -> AppResult<Vec<Product>> {
        let catalog = self.repo.list().await?;
        Ok(rank_hot(catalog))
    }

    async fn get(&self, id: Uuid) -> AppResult<Product> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update(&self, id: Uuid, changes: ProductChanges) -> AppResult<()> {
        self.repo.update(id, changes).await?;
        debug!(product_id = %id, "Product updated");
        Ok(())
    }

    async fn patch_amount(&self, id: Uuid, amount: i32) -> AppResult<()> {
        self.repo.set_amount(id, amount).await?;
        debug!(product_id = %id, amount, "Product amount set");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await?;
        info!(product_id = %id, "Product deleted");
        Ok(())
    }
}
