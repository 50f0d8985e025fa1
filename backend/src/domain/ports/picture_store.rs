//! Driven port for uploaded picture files.

use async_trait::async_trait;

use crate::domain::PictureName;

use super::define_port_error;

define_port_error! {
    /// Errors raised by picture storage adapters.
    pub enum PictureStoreError {
        /// The upload directory could not be opened.
        Unavailable { message: String } => "picture storage unavailable: {message}",
        /// Reading or writing a file failed.
        Io { name: String, message: String } => "picture storage failed for {name}: {message}",
    }
}

/// Port for storing and loading picture bytes by name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PictureStore: Send + Sync {
    /// Write `bytes` under `name`, replacing any existing file.
    async fn write(&self, name: &PictureName, bytes: &[u8]) -> Result<(), PictureStoreError>;

    /// Read the file called `name`; `None` when it does not exist.
    async fn read(&self, name: &PictureName) -> Result<Option<Vec<u8>>, PictureStoreError>;
}

/// Store that discards writes and holds no files.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePictureStore;

#[async_trait]
impl PictureStore for FixturePictureStore {
    async fn write(&self, _name: &PictureName, _bytes: &[u8]) -> Result<(), PictureStoreError> {
        Ok(())
    }

    async fn read(&self, _name: &PictureName) -> Result<Option<Vec<u8>>, PictureStoreError> {
        Ok(None)
    }
}
