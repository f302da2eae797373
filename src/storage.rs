//! Local disk storage for uploaded product images.
//!
//! Files are written under a single directory and exposed to clients through
//! the static mount at [`UPLOADS_URL_PREFIX`].

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use crate::domain::types::{ImagePath, TypeConstraintError};

/// URL prefix under which stored images are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid image path: {0}")]
    InvalidPath(#[from] TypeConstraintError),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Persists uploaded images and returns the path clients use to fetch them.
pub trait ImageStore {
    /// Copy the file at `source` into the store under a freshly generated name.
    ///
    /// `original_name` is only consulted for its extension.
    fn save_image(&self, source: &Path, original_name: Option<&str>) -> StorageResult<ImagePath>;
}

/// [`ImageStore`] writing into a directory on the local filesystem.
#[derive(Clone, Debug)]
pub struct LocalImageStore {
    directory: PathBuf,
}

impl LocalImageStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory the images are written to.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Create the upload directory (and parents) if missing.
    pub fn ensure_directory(&self) -> StorageResult<()> {
        fs::create_dir_all(&self.directory)?;
        Ok(())
    }
}

impl ImageStore for LocalImageStore {
    fn save_image(&self, source: &Path, original_name: Option<&str>) -> StorageResult<ImagePath> {
        let file_name = generate_file_name(original_name);
        let destination = self.directory.join(&file_name);

        // The multipart temp file may live on another filesystem, so copy
        // instead of renaming.
        fs::copy(source, &destination)?;
        log::info!("Stored image {}", destination.display());

        Ok(ImagePath::new(format!("{UPLOADS_URL_PREFIX}/{file_name}"))?)
    }
}

/// Random file name keeping the original extension when it is plain ASCII.
fn generate_file_name(original_name: Option<&str>) -> String {
    let stem = Uuid::new_v4().simple().to_string();

    let extension = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_ascii_lowercase);

    match extension {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    }
}
