//! Driven port for the product collection.

use async_trait::async_trait;

use crate::domain::{Product, ProductId, ProductRecord};

use super::define_port_error;

define_port_error! {
    /// Errors raised by product persistence adapters.
    pub enum ProductRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } => "product store connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } => "product store query failed: {message}",
    }
}

/// Port for reading and writing product documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Return every product ordered by name.
    async fn list_all(&self) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Fetch one product.
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductRepositoryError>;

    /// Insert or replace a product and return the stored document.
    ///
    /// A record without an id is inserted with a store-assigned id. A record
    /// with an id replaces the stored fields; when `record.picture` is `None`
    /// the stored picture name is kept.
    async fn save(&self, record: &ProductRecord) -> Result<Product, ProductRepositoryError>;

    /// Remove a product, returning `false` when nothing matched.
    async fn delete(&self, id: &ProductId) -> Result<bool, ProductRepositoryError>;
}

/// Empty store used when no database is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProductRepository;

#[async_trait]
impl ProductRepository for FixtureProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: &ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        Ok(None)
    }

    async fn save(&self, record: &ProductRecord) -> Result<Product, ProductRepositoryError> {
        Ok(Product {
            id: record.id.unwrap_or_else(ProductId::random),
            name: record.name.clone(),
            description: record.description.clone(),
            price: record.price,
            created_at: record.created_at,
            picture: record.picture.clone(),
            category: record.category.clone(),
        })
    }

    async fn delete(&self, _id: &ProductId) -> Result<bool, ProductRepositoryError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, CategoryId};
    use chrono::NaiveDate;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_save_echoes_record_with_assigned_id() {
        let record = ProductRecord {
            id: None,
            name: "Desk".to_owned(),
            description: String::new(),
            price: 10.0,
            created_at: NaiveDate::from_ymd_opt(2026, 5, 1).expect("valid date"),
            picture: None,
            category: Category::new(CategoryId::random(), "Office"),
        };
        let saved = FixtureProductRepository
            .save(&record)
            .await
            .expect("fixture save succeeds");
        assert_eq!(saved.name, "Desk");
        assert!(FixtureProductRepository.list_all().await.expect("list").is_empty());
    }
}
