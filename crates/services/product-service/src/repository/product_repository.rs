//! Product repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{NewProduct, Product, ProductChanges};
use store::entities::product::{self, ActiveModel, Entity as ProductEntity};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find product by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Find product by exact, case-sensitive name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Product>>;

    /// Create a new product
    async fn create(&self, product: NewProduct) -> AppResult<Product>;

    /// List the whole catalog in insertion order
    async fn list(&self) -> AppResult<Vec<Product>>;

    /// Apply a partial update in a single statement.
    ///
    /// Fails with `NotFound` when no row has the given id.
    async fn update(&self, id: Uuid, changes: ProductChanges) -> AppResult<()>;

    /// Overwrite the stock amount
    async fn set_amount(&self, id: Uuid, amount: i32) -> AppResult<()>;

    /// Delete product by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ProductRepository
pub struct ProductStore {
    db: Arc<DatabaseConnection>,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id).one(self.db.as_ref()).await?;

        Ok(result.map(Product::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Product>> {
        let result = ProductEntity::find()
            .filter(product::Column::Name.eq(name))
            .one(self.db.as_ref())
            .await?;

        Ok(result.map(Product::from))
    }

    async fn create(&self, product: NewProduct) -> AppResult<Product> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(product.name),
            product_type: Set(product.product_type),
            description: Set(product.description),
            amount: Set(product.amount),
            price_in_cents: Set(product.price_in_cents),
            user_id: Set(product.owner_user_id),
            created_at: Set(chrono::Utc::now()),
        };

        // Owner vanished between token issue and insert
        let model = active_model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::from_write(e, "Product"))?;
        Ok(Product::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .order_by_asc(product::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn update(&self, id: Uuid, changes: ProductChanges) -> AppResult<()> {
        let mut update = ProductEntity::update_many()
            .col_expr(product::Column::Description, Expr::value(changes.description));

        if let Some(name) = changes.name {
            update = update.col_expr(product::Column::Name, Expr::value(name));
        }
        if let Some(amount) = changes.amount {
            update = update.col_expr(product::Column::Amount, Expr::value(amount));
        }
        if let Some(price_in_cents) = changes.price_in_cents {
            update = update.col_expr(product::Column::PriceInCents, Expr::value(price_in_cents));
        }

        let result = update
            .filter(product::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn set_amount(&self, id: Uuid, amount: i32) -> AppResult<()> {
        let result = ProductEntity::update_many()
            .col_expr(product::Column::Amount, Expr::value(amount))
            .filter(product::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ProductEntity::delete_by_id(id).exec(self.db.as_ref()).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
