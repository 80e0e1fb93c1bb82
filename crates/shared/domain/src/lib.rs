//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Users, products and purchases are shared by every service crate and the
//! HTTP gateway.

pub mod constants;
pub mod error;
pub mod password;
pub mod product;
pub mod purchase;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use product::{
    HotProductResponse, NewProduct, Product, ProductChanges, ProductResponse, ProductSummary,
};
pub use purchase::{NewPurchase, Purchase};
pub use user::{NewUser, User, UserResponse};
