//! Domain entities, validation, services and ports.
//!
//! Public surface:
//! - [`Product`], [`Category`] and [`PictureName`]: catalog entities.
//! - [`ProductSubmission`]: raw form input and its validation.
//! - [`ProductCatalogService`]: implements the command and query ports.
//! - [`Error`]: transport-agnostic failure payload.

pub mod catalog_service;
pub mod category;
pub mod error;
pub mod picture;
pub mod ports;
pub mod product;
pub mod submission;
pub mod trace_id;

pub use self::catalog_service::ProductCatalogService;
pub use self::category::{Category, CategoryId};
pub use self::error::{Error, ErrorCode};
pub use self::picture::{PictureFile, PictureName, PictureNameError, PictureUpload};
pub use self::product::{Product, ProductId, ProductRecord};
pub use self::submission::{FieldErrors, ProductSubmission, ValidSubmission};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use catalog::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
