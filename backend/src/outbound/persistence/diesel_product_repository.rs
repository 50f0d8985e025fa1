//! PostgreSQL-backed `ProductRepository`.
//!
//! Saves are a single `INSERT .. ON CONFLICT (id) DO UPDATE`, so creating
//! and editing share one statement. The embedded category is written as
//! JSONB and decoded on every read.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{ProductRepository, ProductRepositoryError};
use crate::domain::{Category, PictureName, Product, ProductId, ProductRecord};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewProductRow, ProductRow, ProductUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::products;

/// Diesel implementation of the product document port.
#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ProductRepositoryError {
    map_basic_pool_error(error, ProductRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ProductRepositoryError {
    map_basic_diesel_error(
        error,
        ProductRepositoryError::query,
        ProductRepositoryError::connection,
    )
}

fn row_to_product(row: ProductRow) -> Result<Product, ProductRepositoryError> {
    let category: Category = serde_json::from_value(row.category).map_err(|err| {
        warn!(product_id = %row.id, error = %err, "stored category document is malformed");
        ProductRepositoryError::query("stored category document is malformed")
    })?;
    let picture = row
        .picture
        .map(PictureName::parse)
        .transpose()
        .map_err(|err| {
            warn!(product_id = %row.id, error = %err, "stored picture name is invalid");
            ProductRepositoryError::query("stored picture name is invalid")
        })?;
    Ok(Product {
        id: ProductId::from_uuid(row.id),
        name: row.name,
        description: row.description,
        price: row.price,
        created_at: row.created_at,
        picture,
        category,
    })
}

/// Insert row and conflict changeset for one record.
///
/// A record without a new picture yields a changeset without the `picture`
/// column, so an update keeps the stored name.
fn upsert_rows<'a>(
    record: &'a ProductRecord,
    category: &'a serde_json::Value,
) -> (NewProductRow<'a>, ProductUpdate<'a>) {
    let picture = record.picture.as_ref().map(PictureName::as_str);
    let new_row = NewProductRow {
        id: record.id.map(|id| *id.as_uuid()),
        name: &record.name,
        description: &record.description,
        price: record.price,
        created_at: record.created_at,
        picture,
        category,
    };
    let update = ProductUpdate {
        name: &record.name,
        description: &record.description,
        price: record.price,
        created_at: record.created_at,
        picture,
        category,
    };
    (new_row, update)
}

#[async_trait]
impl ProductRepository for DieselProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ProductRow> = products::table
            .order((products::name.asc(), products::id.asc()))
            .select(ProductRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_product).collect()
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ProductRow> = products::table
            .filter(products::id.eq(id.as_uuid()))
            .select(ProductRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_product).transpose()
    }

    async fn save(&self, record: &ProductRecord) -> Result<Product, ProductRepositoryError> {
        let category = serde_json::to_value(&record.category)
            .map_err(|err| ProductRepositoryError::query(format!("category encoding: {err}")))?;
        let (new_row, update) = upsert_rows(record, &category);

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: ProductRow = diesel::insert_into(products::table)
            .values(&new_row)
            .on_conflict(products::id)
            .do_update()
            .set(&update)
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_product(row)
    }

    async fn delete(&self, id: &ProductId) -> Result<bool, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(products::table.filter(products::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}
