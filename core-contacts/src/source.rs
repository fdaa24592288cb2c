//! Source-read adapters.
//!
//! Leaf utilities that turn one provider query into a partial result: a map
//! from contact id to a partial [`Contact`] carrying only the fields that
//! source can populate.

use std::collections::HashMap;

use bridge_traits::contacts::{ContactRow, ContactSource, ContactStore};
use tracing::debug;

use crate::error::{ContactsError, Result};
use crate::model::Contact;

/// Run one synchronous provider query and fold the rows into a partial map.
///
/// Blocks on provider I/O; callers run this on a blocking worker. `Basic`
/// has no provider table yet and is rejected outright.
pub fn read_source(
    store: &dyn ContactStore,
    source: ContactSource,
) -> Result<HashMap<String, Contact>> {
    if source == ContactSource::Basic {
        return Err(ContactsError::UnsupportedSource(source));
    }

    let rows = store
        .query(source)
        .map_err(|e| ContactsError::source_read(source, &e))?;

    let partial = fold_rows(source, rows);
    debug!(source = %source, contacts = partial.len(), "source read complete");
    Ok(partial)
}

/// Fold projection rows into per-contact partial records.
///
/// The first row for an id establishes the record (and its display name, even
/// when empty); every row appends its value to the source's list, preserving
/// provider row order. Empty values are kept, matching provider behavior for
/// rows with no data.
pub fn fold_rows(source: ContactSource, rows: Vec<ContactRow>) -> HashMap<String, Contact> {
    let mut contacts: HashMap<String, Contact> = HashMap::with_capacity(rows.len());

    for row in rows {
        let contact = contacts
            .entry(row.contact_id.clone())
            .or_insert_with(|| Contact::empty(row.contact_id, row.display_name));

        match source {
            ContactSource::Phones => contact.phones.push(row.value),
            ContactSource::Emails => contact.emails.push(row.value),
            ContactSource::Basic => {}
        }
    }

    contacts
}
