//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer.

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{categories, products};

/// Row struct for reading from the categories table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: Uuid,
    pub name: String,
}

/// Row struct for reading from the products table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProductRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: NaiveDate,
    pub picture: Option<String>,
    pub category: serde_json::Value,
}

/// Insertable product; a `None` id lets the database assign one.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = products)]
pub(crate) struct NewProductRow<'a> {
    pub id: Option<Uuid>,
    pub name: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub created_at: NaiveDate,
    pub picture: Option<&'a str>,
    pub category: &'a serde_json::Value,
}

/// Changeset applied when a product id already exists.
///
/// `picture: None` is skipped so an edit without a new upload keeps the
/// stored picture.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = products)]
pub(crate) struct ProductUpdate<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub created_at: NaiveDate,
    pub picture: Option<&'a str>,
    pub category: &'a serde_json::Value,
}
