//! Multipart payload of the product edit form.

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use tracing::error;

use crate::domain::{Error, PictureUpload, ProductSubmission};

/// Raw multipart fields. Everything is optional so missing fields surface as
/// validation messages instead of extractor failures.
#[derive(Debug, MultipartForm)]
pub struct ProductForm {
    pub id: Option<Text<String>>,
    pub name: Option<Text<String>>,
    pub description: Option<Text<String>>,
    pub price: Option<Text<String>>,
    #[multipart(rename = "createdAt")]
    pub created_at: Option<Text<String>>,
    #[multipart(rename = "categoryId")]
    pub category_id: Option<Text<String>>,
    pub file: Option<TempFile>,
}

fn text(field: Option<Text<String>>) -> Option<String> {
    field.map(Text::into_inner)
}

impl ProductForm {
    /// Split the form into the domain submission and the attached file.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the buffered upload cannot be read.
    pub async fn into_parts(self) -> Result<(ProductSubmission, Option<PictureUpload>), Error> {
        let submission = ProductSubmission {
            id: text(self.id),
            name: text(self.name),
            description: text(self.description),
            price: text(self.price),
            created_at: text(self.created_at),
            category_id: text(self.category_id),
        };
        let upload = match self.file {
            None => None,
            Some(file) => {
                let original_filename = file.file_name.unwrap_or_default();
                let bytes = tokio::fs::read(file.file.path()).await.map_err(|err| {
                    error!(error = %err, "failed to read buffered upload");
                    Error::internal("failed to read uploaded file")
                })?;
                Some(PictureUpload {
                    original_filename,
                    bytes,
                })
            }
        };
        Ok((submission, upload))
    }
}
