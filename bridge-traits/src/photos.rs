//! Contact Photo Access
//!
//! Abstracts the platform photo lookup for a single contact. Thumbnails and
//! full-resolution photos live behind different platform lookups but share
//! one contract: bytes, absence, or an I/O failure.

use bytes::Bytes;

use crate::error::Result;

/// Requested photo resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSize {
    /// Small photo stored inline by the provider.
    Thumbnail,
    /// Full-resolution display photo.
    Full,
}

impl PhotoSize {
    /// Decode the wire size hint. Only the literal `"thumbnail"` selects the
    /// thumbnail path; every other value selects the full-resolution path.
    pub fn from_wire(value: &str) -> Self {
        if value == "thumbnail" {
            PhotoSize::Thumbnail
        } else {
            PhotoSize::Full
        }
    }
}

/// Synchronous photo byte access.
///
/// A contact with no stored photo (including an id the platform has never
/// seen) yields `Ok(None)`; `Err` is reserved for I/O failures while reading
/// a photo that should exist.
pub trait PhotoStore: Send + Sync {
    /// Read the photo bytes for one contact at the requested size.
    fn read_photo(&self, contact_id: &str, size: PhotoSize) -> Result<Option<Bytes>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_hint_decoding() {
        assert_eq!(PhotoSize::from_wire("thumbnail"), PhotoSize::Thumbnail);
        assert_eq!(PhotoSize::from_wire("fullsize"), PhotoSize::Full);
        assert_eq!(PhotoSize::from_wire(""), PhotoSize::Full);
    }
}
