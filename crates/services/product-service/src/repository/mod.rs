//! Repository layer - Data access abstraction.

mod product_repository;
mod purchase_repository;

pub use product_repository::{ProductRepository, ProductStore};
pub use purchase_repository::{PurchaseRepository, PurchaseStore};

#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use purchase_repository::MockPurchaseRepository;
