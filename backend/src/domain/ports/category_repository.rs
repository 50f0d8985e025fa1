//! Driven port for the category collection.

use async_trait::async_trait;

use crate::domain::{Category, CategoryId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by category persistence adapters.
    pub enum CategoryRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } => "category store connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } => "category store query failed: {message}",
    }
}

/// Port for category lookups. Categories are read-only here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Return every category ordered by name.
    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError>;

    /// Fetch one category.
    async fn find_by_id(&self, id: &CategoryId)
    -> Result<Option<Category>, CategoryRepositoryError>;
}

/// Empty category collection used when no database is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCategoryRepository;

#[async_trait]
impl CategoryRepository for FixtureCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(
        &self,
        _id: &CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        Ok(None)
    }
}
