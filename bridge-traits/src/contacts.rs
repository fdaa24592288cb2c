//! Contacts Provider Access
//!
//! Abstracts the platform contacts store as a set of independently queryable
//! data categories (sources). Each source yields flat projection rows; the
//! core folds and merges them into full contact records.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One platform data category that can be queried independently.
///
/// The platform exposes phone numbers and email addresses through separate
/// provider tables, so a full contact snapshot requires one query per source.
/// `Basic` (name-only rows) is reserved and not yet served by any store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactSource {
    Basic,
    Phones,
    Emails,
}

impl ContactSource {
    /// Wire name of the source, as used by the remote-procedure surface.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactSource::Basic => "basic",
            ContactSource::Phones => "phones",
            ContactSource::Emails => "emails",
        }
    }

    /// Parse a wire name. Unknown names fall back to `Basic` so callers get
    /// a deterministic error downstream instead of a decode failure.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "phones" => ContactSource::Phones,
            "emails" => ContactSource::Emails,
            _ => ContactSource::Basic,
        }
    }
}

impl std::fmt::Display for ContactSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for ContactSource {}

/// One projected cursor row from a provider query.
///
/// The projection is identical for every source: the owning contact id, the
/// contact's display name as the provider denormalizes it onto the row, and
/// the source-specific value (a phone number or an email address). Values may
/// be empty strings; the provider does the same for rows with no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    /// Stable contact id assigned by the platform.
    pub contact_id: String,
    /// Display name denormalized onto this row. May be empty.
    pub display_name: String,
    /// The phone number or email address carried by this row.
    pub value: String,
}

impl ContactRow {
    pub fn new(
        contact_id: impl Into<String>,
        display_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            contact_id: contact_id.into(),
            display_name: display_name.into(),
            value: value.into(),
        }
    }
}

/// Synchronous row access to the platform contacts provider.
///
/// `query` blocks on provider I/O; the core only calls it from a blocking
/// worker. Rows arrive in provider order (display name ascending on the
/// platforms we target); the core preserves that order when it accumulates
/// values for a contact.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::contacts::{ContactSource, ContactStore};
///
/// fn count_phone_rows(store: &dyn ContactStore) -> usize {
///     store.query(ContactSource::Phones).map(|rows| rows.len()).unwrap_or(0)
/// }
/// ```
pub trait ContactStore: Send + Sync {
    /// Query all rows for one source.
    ///
    /// Returns an empty vector when the provider has no rows for the source;
    /// errors are reserved for genuine provider failures (permission denied,
    /// provider unavailable).
    fn query(&self, source: ContactSource) -> Result<Vec<ContactRow>>;
}
