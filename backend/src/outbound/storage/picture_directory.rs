//! Upload directory adapter for the `PictureStore` port.
//!
//! All access goes through a `cap_std::fs::Dir` handle opened on the
//! configured path, so a picture name can never reach outside it. File I/O
//! runs on the blocking pool.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use tracing::debug;
use uuid::Uuid;

use crate::domain::PictureName;
use crate::domain::ports::{PictureStore, PictureStoreError};

/// Picture store rooted at the upload directory.
#[derive(Clone)]
pub struct PictureDirectory {
    dir: Arc<Dir>,
    root: PathBuf,
}

impl PictureDirectory {
    /// Create the directory if needed and open it.
    ///
    /// # Errors
    ///
    /// Returns [`PictureStoreError::Unavailable`] when the directory cannot be
    /// created or opened.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, PictureStoreError> {
        let root = root.into();
        Dir::create_ambient_dir_all(&root, ambient_authority())
            .and_then(|()| Dir::open_ambient_dir(&root, ambient_authority()))
            .map(|dir| Self {
                dir: Arc::new(dir),
                root: root.clone(),
            })
            .map_err(|err| PictureStoreError::unavailable(format!("{}: {err}", root.display())))
    }

    /// Path the directory was opened from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn io_error(name: &PictureName, error: &io::Error) -> PictureStoreError {
    PictureStoreError::io(name.as_str(), error.to_string())
}

fn write_staged(dir: &Dir, name: &PictureName, bytes: &[u8]) -> io::Result<()> {
    let staged = format!(".tmp-upload-{}", Uuid::new_v4().simple());
    if let Err(err) = dir.write(&staged, bytes) {
        let _cleanup = dir.remove_file(&staged);
        return Err(err);
    }
    dir.rename(&staged, dir, name.as_str()).inspect_err(|_| {
        let _cleanup = dir.remove_file(&staged);
    })
}

#[async_trait]
impl PictureStore for PictureDirectory {
    async fn write(&self, name: &PictureName, bytes: &[u8]) -> Result<(), PictureStoreError> {
        let dir = Arc::clone(&self.dir);
        let owned_name = name.clone();
        let owned_bytes = bytes.to_vec();
        let result =
            tokio::task::spawn_blocking(move || write_staged(&dir, &owned_name, &owned_bytes))
                .await
                .map_err(|err| PictureStoreError::io(name.as_str(), err.to_string()))?;
        result.map_err(|err| io_error(name, &err))?;
        debug!(picture = %name, size = bytes.len(), "picture written");
        Ok(())
    }

    async fn read(&self, name: &PictureName) -> Result<Option<Vec<u8>>, PictureStoreError> {
        let dir = Arc::clone(&self.dir);
        let owned_name = name.clone();
        let result = tokio::task::spawn_blocking(move || dir.read(owned_name.as_str()))
            .await
            .map_err(|err| PictureStoreError::io(name.as_str(), err.to_string()))?;
        match result {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(name, &err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp_root() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[rstest]
    #[tokio::test]
    async fn written_pictures_read_back(temp_root: TempDir) {
        let store = PictureDirectory::open(temp_root.path()).expect("open store");
        let name = PictureName::for_upload("cat photo.jpg").expect("filename present");

        store.write(&name, b"jpeg").await.expect("write succeeds");

        let bytes = store.read(&name).await.expect("read succeeds");
        assert_eq!(bytes.as_deref(), Some(&b"jpeg"[..]));
        assert!(temp_root.path().join(name.as_str()).is_file());
    }

    #[rstest]
    #[tokio::test]
    async fn missing_pictures_read_as_none(temp_root: TempDir) {
        let store = PictureDirectory::open(temp_root.path()).expect("open store");
        let name = PictureName::parse("absent.png").expect("valid name");
        assert_eq!(store.read(&name).await.expect("read succeeds"), None);
    }

    #[rstest]
    #[tokio::test]
    async fn rewriting_replaces_contents(temp_root: TempDir) {
        let store = PictureDirectory::open(temp_root.path()).expect("open store");
        let name = PictureName::parse("same.png").expect("valid name");
        store.write(&name, b"first").await.expect("first write");
        store.write(&name, b"second").await.expect("second write");
        assert_eq!(
            store.read(&name).await.expect("read succeeds").as_deref(),
            Some(&b"second"[..])
        );
    }

    #[rstest]
    fn open_creates_nested_directories(temp_root: TempDir) {
        let nested = temp_root.path().join("uploads").join("img");
        let store = PictureDirectory::open(&nested).expect("open store");
        assert!(nested.is_dir());
        assert_eq!(store.root(), nested.as_path());
    }

    #[rstest]
    fn open_fails_when_path_is_a_file(temp_root: TempDir) {
        let file = temp_root.path().join("occupied");
        std::fs::write(&file, b"x").expect("create file");
        let err = PictureDirectory::open(&file).err().expect("opening a file fails");
        assert!(matches!(err, PictureStoreError::Unavailable { .. }));
    }
}
