//! Filesystem-backed contact photo store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bridge_traits::error::{BridgeError, Result};
use bridge_traits::photos::{PhotoSize, PhotoStore};
use bytes::Bytes;
use tracing::debug;

/// [`PhotoStore`] reading photo files from one directory.
///
/// Layout: `<root>/<contact_id>.jpg` for the full-resolution photo and
/// `<root>/<contact_id>.thumb.jpg` for the thumbnail. A missing file is
/// absence, not an error, mirroring the platform's empty photo lookup.
pub struct FsPhotoStore {
    root: PathBuf,
}

impl FsPhotoStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn photo_path(&self, contact_id: &str, size: PhotoSize) -> Result<PathBuf> {
        // Ids are opaque platform keys and are used as file names; anything
        // that walks the filesystem is rejected rather than resolved.
        if contact_id.is_empty()
            || contact_id.contains(['/', '\\'])
            || contact_id.contains("..")
        {
            return Err(BridgeError::OperationFailed(format!(
                "invalid contact id for photo lookup: {contact_id:?}"
            )));
        }

        let file_name = match size {
            PhotoSize::Thumbnail => format!("{contact_id}.thumb.jpg"),
            PhotoSize::Full => format!("{contact_id}.jpg"),
        };
        Ok(self.root.join(file_name))
    }
}

impl PhotoStore for FsPhotoStore {
    fn read_photo(&self, contact_id: &str, size: PhotoSize) -> Result<Option<Bytes>> {
        let path = self.photo_path(contact_id, size)?;

        match std::fs::read(&path) {
            Ok(data) => {
                debug!(contact_id, path = %path.display(), bytes = data.len(), "photo read");
                Ok(Some(Bytes::from(data)))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(BridgeError::Io(err)),
        }
    }
}

impl AsRef<Path> for FsPhotoStore {
    fn as_ref(&self) -> &Path {
        &self.root
    }
}
