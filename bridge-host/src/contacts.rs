//! In-memory contacts provider stand-in.

use std::collections::HashMap;
use std::sync::Mutex;

use bridge_traits::contacts::{ContactRow, ContactSource, ContactStore};
use bridge_traits::error::{BridgeError, Result};
use tracing::debug;

/// [`ContactStore`] backed by seeded rows, for tests and desktop demos.
///
/// `query` returns rows sorted by display name ascending (then contact id
/// for a stable tie-break), matching the sort order the platform provider
/// applies. The `Basic` source has no table, as on the real platform.
#[derive(Default)]
pub struct InMemoryContactStore {
    rows: Mutex<HashMap<ContactSource, Vec<ContactRow>>>,
    fail_sources: Mutex<Vec<ContactSource>>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed one phone-number row.
    pub fn seed_phone(&self, contact_id: &str, display_name: &str, number: &str) {
        self.seed(ContactSource::Phones, ContactRow::new(contact_id, display_name, number));
    }

    /// Seed one email-address row.
    pub fn seed_email(&self, contact_id: &str, display_name: &str, address: &str) {
        self.seed(ContactSource::Emails, ContactRow::new(contact_id, display_name, address));
    }

    /// Make subsequent queries for `source` fail, to exercise error paths.
    pub fn fail_source(&self, source: ContactSource) {
        self.fail_sources.lock().unwrap().push(source);
    }

    fn seed(&self, source: ContactSource, row: ContactRow) {
        self.rows.lock().unwrap().entry(source).or_default().push(row);
    }
}

impl ContactStore for InMemoryContactStore {
    fn query(&self, source: ContactSource) -> Result<Vec<ContactRow>> {
        if source == ContactSource::Basic {
            return Err(BridgeError::NotAvailable(
                "no provider table for basic info".to_string(),
            ));
        }

        if self.fail_sources.lock().unwrap().contains(&source) {
            return Err(BridgeError::OperationFailed(format!(
                "injected failure for source {source}"
            )));
        }

        let mut rows = self
            .rows
            .lock()
            .unwrap()
            .get(&source)
            .cloned()
            .unwrap_or_default();
        rows.sort_by(|a, b| {
            a.display_name
                .cmp(&b.display_name)
                .then_with(|| a.contact_id.cmp(&b.contact_id))
        });

        debug!(source = %source, rows = rows.len(), "in-memory store queried");
        Ok(rows)
    }
}
