//! Catalog and purchase business logic.

mod product_service;
mod purchase_service;
mod ranking;

pub use product_service::{CreateProduct, ProductCatalog, ProductService};
pub use purchase_service::{PurchaseRecorder, PurchaseService};
pub use ranking::rank_hot;

#[cfg(any(test, feature = "test-utils"))]
pub use product_service::MockProductService;
#[cfg(any(test, feature = "test-utils"))]
pub use purchase_service::MockPurchaseService;
