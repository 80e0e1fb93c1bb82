//! Product Service Library
//!
//! Catalog management, hot product ranking and purchase recording on top of
//! the shared relational store.

pub mod repository;
pub mod service;

pub use repository::{ProductRepository, ProductStore, PurchaseRepository, PurchaseStore};
pub use service::{
    rank_hot, CreateProduct, ProductCatalog, ProductService, PurchaseRecorder, PurchaseService,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::{MockProductRepository, MockPurchaseRepository};
#[cfg(any(test, feature = "test-utils"))]
pub use service::{MockProductService, MockPurchaseService};
