use bridge_traits::contacts::ContactSource;
use thiserror::Error;

/// Failures surfaced by the aggregation core.
///
/// The platform collapses every provider problem (permission denied, provider
/// unavailable, malformed row) into one read-failure channel, so the variants
/// here carry a human-readable message plus the stringified cause rather than
/// a finer taxonomy.
#[derive(Error, Debug)]
pub enum ContactsError {
    #[error("Source read failed ({source}): {message}")]
    SourceRead {
        source: ContactSource,
        message: String,
        cause: String,
    },

    #[error("Photo read failed for contact {contact_id}: {message}")]
    PhotoRead {
        contact_id: String,
        message: String,
        cause: String,
    },

    #[error("Source not supported: {0}")]
    UnsupportedSource(ContactSource),
}

impl ContactsError {
    pub(crate) fn source_read(source: ContactSource, err: &bridge_traits::BridgeError) -> Self {
        ContactsError::SourceRead {
            source,
            message: err.to_string(),
            cause: format!("{:?}", err),
        }
    }

    pub(crate) fn photo_read(contact_id: &str, err: &bridge_traits::BridgeError) -> Self {
        ContactsError::PhotoRead {
            contact_id: contact_id.to_string(),
            message: err.to_string(),
            cause: format!("{:?}", err),
        }
    }

    /// Stringified underlying cause, for the generic error channel of the
    /// remote-procedure surface.
    pub fn cause(&self) -> &str {
        match self {
            ContactsError::SourceRead { cause, .. } => cause,
            ContactsError::PhotoRead { cause, .. } => cause,
            ContactsError::UnsupportedSource(_) => "unsupported source",
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactsError>;
