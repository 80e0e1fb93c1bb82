//! Relational store shared by the user and product services.
//!
//! Owns the connection pool lifecycle, the SeaORM entity definitions for
//! `users`, `products` and `purchases`, and the schema migrations.

pub mod db;
pub mod entities;
pub mod migrations;

pub use db::Database;
pub use migrations::Migrator;
