//! Catalog service implementing the product command and query ports.
//!
//! Saving follows a fixed sequence: validate the submission, resolve its
//! category, default the creation date, name the picture, persist the
//! record, and only then write the picture bytes. There is no compensation
//! step; a failed picture write leaves the committed record pointing at a
//! missing file.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info, warn};

use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, DeleteOutcome, PictureStore, PictureStoreError,
    ProductCommand, ProductQuery, ProductRepository, ProductRepositoryError, SaveProductOutcome,
};
use crate::domain::{
    Category, Error, FieldErrors, PictureFile, PictureName, PictureUpload, Product, ProductId,
    ProductRecord, ProductSubmission,
};

fn map_product_error(error: ProductRepositoryError) -> Error {
    match error {
        ProductRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("product store unavailable: {message}"))
        }
        ProductRepositoryError::Query { message } => {
            Error::internal(format!("product store error: {message}"))
        }
    }
}

fn map_category_error(error: CategoryRepositoryError) -> Error {
    match error {
        CategoryRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("category store unavailable: {message}"))
        }
        CategoryRepositoryError::Query { message } => {
            Error::internal(format!("category store error: {message}"))
        }
    }
}

fn map_picture_error(error: PictureStoreError) -> Error {
    match error {
        PictureStoreError::Unavailable { message } => {
            Error::service_unavailable(format!("picture storage unavailable: {message}"))
        }
        PictureStoreError::Io { name, message } => {
            Error::internal(format!("picture storage failed for {name}: {message}"))
        }
    }
}

/// Product catalog service backed by product, category and picture ports.
#[derive(Clone)]
pub struct ProductCatalogService<P, C, S> {
    products: Arc<P>,
    categories: Arc<C>,
    pictures: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<P, C, S> ProductCatalogService<P, C, S> {
    /// Create a service over the given ports.
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use catalog::domain::ProductCatalogService;
    /// # use catalog::domain::ports::{
    /// #     FixtureCategoryRepository, FixturePictureStore, FixtureProductRepository, ProductQuery,
    /// # };
    /// # use mockable::DefaultClock;
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let service = ProductCatalogService::new(
    ///     Arc::new(FixtureProductRepository),
    ///     Arc::new(FixtureCategoryRepository),
    ///     Arc::new(FixturePictureStore),
    ///     Arc::new(DefaultClock),
    /// );
    /// assert!(service.list_products().await.unwrap().is_empty());
    /// # });
    /// ```
    pub fn new(
        products: Arc<P>,
        categories: Arc<C>,
        pictures: Arc<S>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            products,
            categories,
            pictures,
            clock,
        }
    }
}

impl<P, C, S> ProductCatalogService<P, C, S>
where
    P: ProductRepository,
    C: CategoryRepository,
    S: PictureStore,
{
    async fn write_picture(
        &self,
        product: &Product,
        name: &PictureName,
        bytes: &[u8],
    ) -> Result<(), Error> {
        self.pictures.write(name, bytes).await.map_err(|err| {
            error!(
                product_id = %product.id,
                picture = %name,
                error = %err,
                "picture write failed after product was saved"
            );
            map_picture_error(err)
        })
    }
}

#[async_trait]
impl<P, C, S> ProductCommand for ProductCatalogService<P, C, S>
where
    P: ProductRepository,
    C: CategoryRepository,
    S: PictureStore,
{
    async fn save(
        &self,
        submission: ProductSubmission,
        upload: Option<PictureUpload>,
    ) -> Result<SaveProductOutcome, Error> {
        let valid = match submission.validate() {
            Ok(valid) => valid,
            Err(errors) => return Ok(SaveProductOutcome::Rejected { errors, submission }),
        };

        let found = self
            .categories
            .find_by_id(&valid.category_id)
            .await
            .map_err(map_category_error)?;
        let Some(category) = found else {
            return Ok(SaveProductOutcome::Rejected {
                errors: FieldErrors::single("categoryId", "category does not exist"),
                submission,
            });
        };

        let upload = upload.and_then(|file| {
            PictureName::for_upload(&file.original_filename).map(|name| (name, file.bytes))
        });

        let record = ProductRecord {
            id: valid.id,
            name: valid.name,
            description: valid.description,
            price: valid.price,
            created_at: valid
                .created_at
                .unwrap_or_else(|| self.clock.local().date_naive()),
            picture: upload.as_ref().map(|(name, _)| name.clone()),
            category,
        };

        let product = self.products.save(&record).await.map_err(map_product_error)?;

        if let Some((name, bytes)) = upload {
            self.write_picture(&product, &name, &bytes).await?;
        }

        info!(product_id = %product.id, "product saved");
        Ok(SaveProductOutcome::Saved(product))
    }

    async fn delete(&self, id: &ProductId) -> Result<DeleteOutcome, Error> {
        let existing = self.products.find_by_id(id).await.map_err(map_product_error)?;
        if existing.is_none() {
            warn!(product_id = %id, "delete requested for unknown product");
            return Ok(DeleteOutcome::NotFound);
        }
        if self.products.delete(id).await.map_err(map_product_error)? {
            info!(product_id = %id, "product deleted");
            Ok(DeleteOutcome::Deleted)
        } else {
            warn!(product_id = %id, "product vanished before delete");
            Ok(DeleteOutcome::NotFound)
        }
    }
}

#[async_trait]
impl<P, C, S> ProductQuery for ProductCatalogService<P, C, S>
where
    P: ProductRepository,
    C: CategoryRepository,
    S: PictureStore,
{
    async fn list_products(&self) -> Result<Vec<Product>, Error> {
        self.products.list_all().await.map_err(map_product_error)
    }

    async fn list_products_for_display(&self) -> Result<Vec<Product>, Error> {
        let products = self.list_products().await?;
        Ok(products.iter().map(Product::for_display).collect())
    }

    async fn find_product(&self, id: &ProductId) -> Result<Option<Product>, Error> {
        self.products.find_by_id(id).await.map_err(map_product_error)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, Error> {
        self.categories.list_all().await.map_err(map_category_error)
    }

    async fn load_picture(&self, name: &PictureName) -> Result<Option<PictureFile>, Error> {
        let bytes = self.pictures.read(name).await.map_err(map_picture_error)?;
        Ok(bytes.map(|bytes| PictureFile {
            name: name.clone(),
            bytes,
        }))
    }
}

#[cfg(test)]
#[path = "catalog_service_tests.rs"]
mod tests;
