//! Driving port for catalog reads.

use async_trait::async_trait;

use crate::domain::{Category, Error, PictureFile, PictureName, Product, ProductId};

/// Driving port consumed by the HTML pages, the JSON API and downloads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductQuery: Send + Sync {
    /// All products ordered by name, as stored.
    async fn list_products(&self) -> Result<Vec<Product>, Error>;

    /// All products ordered by name with uppercased names.
    async fn list_products_for_display(&self) -> Result<Vec<Product>, Error>;

    async fn find_product(&self, id: &ProductId) -> Result<Option<Product>, Error>;

    /// Categories ordered by name, used as form options.
    async fn list_categories(&self) -> Result<Vec<Category>, Error>;

    /// Load a stored picture; `None` when no such file exists.
    async fn load_picture(&self, name: &PictureName) -> Result<Option<PictureFile>, Error>;
}

/// Query port over an empty catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProductQuery;

#[async_trait]
impl ProductQuery for FixtureProductQuery {
    async fn list_products(&self) -> Result<Vec<Product>, Error> {
        Ok(Vec::new())
    }

    async fn list_products_for_display(&self) -> Result<Vec<Product>, Error> {
        Ok(Vec::new())
    }

    async fn find_product(&self, _id: &ProductId) -> Result<Option<Product>, Error> {
        Ok(None)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, Error> {
        Ok(Vec::new())
    }

    async fn load_picture(&self, _name: &PictureName) -> Result<Option<PictureFile>, Error> {
        Ok(None)
    }
}
