//! Driving port for product mutations.
//!
//! HTML handlers call [`ProductCommand`] to save form submissions (with an
//! optional picture) and to delete products.

use async_trait::async_trait;

use crate::domain::{
    Error, FieldErrors, PictureUpload, Product, ProductId, ProductSubmission,
};

/// Result of a save attempt that did not hit an infrastructure failure.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveProductOutcome {
    /// The product was persisted (and its picture written, if any).
    Saved(Product),
    /// The submission failed validation; nothing was persisted or written.
    Rejected {
        errors: FieldErrors,
        submission: ProductSubmission,
    },
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Driving port for product writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCommand: Send + Sync {
    /// Validate, resolve the category, persist, then write the picture.
    ///
    /// # Errors
    ///
    /// Returns an error when the store or the picture storage fails. A
    /// picture write failure is reported after the record was committed.
    async fn save(
        &self,
        submission: ProductSubmission,
        upload: Option<PictureUpload>,
    ) -> Result<SaveProductOutcome, Error>;

    /// Delete a product by id.
    async fn delete(&self, id: &ProductId) -> Result<DeleteOutcome, Error>;
}

/// Command port that accepts nothing and finds nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProductCommand;

#[async_trait]
impl ProductCommand for FixtureProductCommand {
    async fn save(
        &self,
        submission: ProductSubmission,
        _upload: Option<PictureUpload>,
    ) -> Result<SaveProductOutcome, Error> {
        Ok(SaveProductOutcome::Rejected {
            errors: FieldErrors::single("categoryId", "category does not exist"),
            submission,
        })
    }

    async fn delete(&self, _id: &ProductId) -> Result<DeleteOutcome, Error> {
        Ok(DeleteOutcome::NotFound)
    }
}
