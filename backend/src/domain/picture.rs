//! Uploaded picture naming.
//!
//! Stored pictures live as flat files in the upload directory. Their names
//! are a random UUID token followed by the sanitised client filename, so two
//! uploads of `my photo.png` never collide.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Characters stripped from client-supplied filenames.
const STRIPPED_CHARS: [char; 4] = [' ', ':', '\\', '/'];

/// Validation errors for picture names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PictureNameError {
    /// The name is empty once trimmed.
    #[error("picture name must not be empty")]
    Empty,
    /// The name is not a single plain path segment.
    #[error("picture name must be a plain file name")]
    NotAFileName,
}

/// Name of a stored picture file, always a single path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PictureName(String);

impl PictureName {
    /// Derive a unique stored name from the filename sent by the client.
    ///
    /// Returns `None` when the client sent no filename, which means no file
    /// was attached.
    ///
    /// # Examples
    /// ```
    /// use catalog::domain::PictureName;
    ///
    /// let name = PictureName::for_upload("C:\\my photo.png").expect("filename present");
    /// assert!(name.as_str().ends_with("Cmyphoto.png"));
    /// assert!(PictureName::for_upload("").is_none());
    /// ```
    pub fn for_upload(original_filename: &str) -> Option<Self> {
        if original_filename.is_empty() {
            return None;
        }
        let sanitised: String = original_filename
            .chars()
            .filter(|c| !STRIPPED_CHARS.contains(c))
            .collect();
        Some(Self(format!("{}{sanitised}", Uuid::new_v4())))
    }

    /// Validate a name received from a request path or read from storage.
    pub fn parse(value: impl Into<String>) -> Result<Self, PictureNameError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(PictureNameError::Empty);
        }
        if value.contains(STRIPPED_CHARS) || value == "." || value == ".." {
            return Err(PictureNameError::NotAFileName);
        }
        Ok(Self(value))
    }

    /// Borrow the name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PictureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PictureName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<PictureName> for String {
    fn from(value: PictureName) -> Self {
        value.0
    }
}

impl TryFrom<String> for PictureName {
    type Error = PictureNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// File attached to a product submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureUpload {
    /// Filename as sent by the client; empty when no file was chosen.
    pub original_filename: String,
    pub bytes: Vec<u8>,
}

/// Picture contents loaded back from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureFile {
    pub name: PictureName,
    pub bytes: Vec<u8>,
}
