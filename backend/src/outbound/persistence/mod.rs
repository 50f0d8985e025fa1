//! PostgreSQL persistence adapters using Diesel.
//!
//! Products are stored as documents: each row carries an embedded JSONB copy
//! of its category, so reads never join. Row structs and the schema stay
//! private to this module.

mod diesel_basic_error_mapping;
mod diesel_category_repository;
mod diesel_product_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_category_repository::DieselCategoryRepository;
pub use diesel_product_repository::DieselProductRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
