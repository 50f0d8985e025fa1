//! Filesystem adapters.

mod picture_directory;

pub use picture_directory::PictureDirectory;
