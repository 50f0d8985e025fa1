//! Product entity and identifier.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Category, PictureName};

/// Store-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for ProductId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog item as held by the store.
///
/// ## Invariants
/// - `category` is the full category document resolved at save time.
/// - `picture`, when set, names a file in the upload directory (the file may
///   be missing if the write after persisting failed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[schema(example = "Sony Camera HD")]
    pub name: String,
    #[schema(example = "Digital camera with optical zoom")]
    pub description: String,
    #[schema(example = 177.89)]
    pub price: f64,
    #[schema(example = "2026-10-16")]
    pub created_at: NaiveDate,
    #[schema(value_type = Option<String>)]
    pub picture: Option<PictureName>,
    pub category: Category,
}

impl Product {
    /// Return a copy with the name uppercased for listing pages.
    ///
    /// # Examples
    /// ```
    /// use catalog::domain::{Category, CategoryId, Product, ProductId};
    /// use chrono::NaiveDate;
    ///
    /// let product = Product {
    ///     id: ProductId::random(),
    ///     name: "Apple iPod".to_owned(),
    ///     description: String::new(),
    ///     price: 46.89,
    ///     created_at: NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date"),
    ///     picture: None,
    ///     category: Category::new(CategoryId::random(), "Electronics"),
    /// };
    /// assert_eq!(product.for_display().name, "APPLE IPOD");
    /// ```
    #[must_use]
    pub fn for_display(&self) -> Self {
        Self {
            name: self.name.to_uppercase(),
            ..self.clone()
        }
    }
}

/// Validated product fields ready to persist.
///
/// Produced by [`ProductSubmission::validate`](super::ProductSubmission::validate)
/// and completed by the save coordinator once the category is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    /// Existing identifier for updates; `None` lets the store assign one.
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: NaiveDate,
    /// New picture name; `None` leaves any stored picture untouched.
    pub picture: Option<PictureName>,
    pub category: Category,
}
