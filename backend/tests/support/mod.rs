//! In-memory ports and an app harness for catalog integration tests.
//!
//! The harness runs the real `ProductCatalogService` and HTTP adapters over
//! in-memory product and category stores and a temporary upload directory.

use std::sync::{Arc, Mutex};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;
use catalog::Trace;
use catalog::domain::ports::{
    CategoryRepository, CategoryRepositoryError, ProductRepository, ProductRepositoryError,
};
use catalog::domain::{Category, CategoryId, Product, ProductCatalogService, ProductId, ProductRecord};
use catalog::inbound::http;
use catalog::inbound::http::state::HttpState;
use catalog::inbound::http::views::Views;
use catalog::outbound::storage::PictureDirectory;
use tempfile::TempDir;

pub const BOUNDARY: &str = "catalog-integration-boundary";

/// Product store kept in a vector, with a save counter.
#[derive(Default)]
pub struct InMemoryProducts {
    rows: Mutex<Vec<Product>>,
    saves: Mutex<usize>,
}

impl InMemoryProducts {
    pub fn all(&self) -> Vec<Product> {
        self.rows.lock().expect("products lock").clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().expect("save counter lock")
    }

    pub fn insert(&self, product: Product) {
        self.rows.lock().expect("products lock").push(product);
    }
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn list_all(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        let mut rows = self.all();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        Ok(self.all().into_iter().find(|p| p.id == *id))
    }

    async fn save(&self, record: &ProductRecord) -> Result<Product, ProductRepositoryError> {
        *self.saves.lock().expect("save counter lock") += 1;
        let mut rows = self.rows.lock().expect("products lock");
        let id = record.id.unwrap_or_else(ProductId::random);
        let previous = rows.iter().position(|p| p.id == id);
        let picture = record.picture.clone().or_else(|| {
            previous
                .and_then(|index| rows.get(index))
                .and_then(|p| p.picture.clone())
        });
        let product = Product {
            id,
            name: record.name.clone(),
            description: record.description.clone(),
            price: record.price,
            created_at: record.created_at,
            picture,
            category: record.category.clone(),
        };
        match previous.and_then(|index| rows.get_mut(index)) {
            Some(slot) => *slot = product.clone(),
            None => rows.push(product.clone()),
        }
        Ok(product)
    }

    async fn delete(&self, id: &ProductId) -> Result<bool, ProductRepositoryError> {
        let mut rows = self.rows.lock().expect("products lock");
        let before = rows.len();
        rows.retain(|p| p.id != *id);
        Ok(rows.len() != before)
    }
}

/// Read-only category list.
pub struct InMemoryCategories(pub Vec<Category>);

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        Ok(self.0.clone())
    }

    async fn find_by_id(
        &self,
        id: &CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        Ok(self.0.iter().find(|c| c.id == *id).cloned())
    }
}

/// Shared state for one test: stores, upload directory and handler state.
pub struct CatalogWorld {
    pub products: Arc<InMemoryProducts>,
    pub category: Category,
    pub uploads: TempDir,
    state: web::Data<HttpState>,
}

impl CatalogWorld {
    pub fn new() -> Self {
        let uploads = tempfile::tempdir().expect("temp upload dir");
        let pictures = PictureDirectory::open(uploads.path()).expect("open pictures");
        let category = Category::new(CategoryId::random(), "Electronics");
        let products = Arc::new(InMemoryProducts::default());
        let service = Arc::new(ProductCatalogService::new(
            Arc::clone(&products),
            Arc::new(InMemoryCategories(vec![category.clone()])),
            Arc::new(pictures),
            Arc::new(mockable::DefaultClock),
        ));
        let state = HttpState::new(
            service.clone(),
            service,
            Arc::new(Views::new().expect("templates compile")),
        );
        Self {
            products,
            category,
            uploads,
            state: web::Data::new(state),
        }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(self.state.clone())
            .wrap(Trace)
            .configure(http::configure)
    }

    /// Number of entries in the upload directory.
    pub fn stored_files(&self) -> usize {
        std::fs::read_dir(self.uploads.path())
            .expect("read upload dir")
            .count()
    }
}

/// Encode form fields and an optional `file` part as multipart/form-data.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}
