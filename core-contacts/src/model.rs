//! Contact data model.

use serde::{Deserialize, Serialize};

/// One contact as seen by the application layer.
///
/// Before the merge a `Contact` is partial: a phones-source record carries
/// only phone numbers, an emails-source record only email addresses. The
/// merge combines all partial records for an id into one snapshot, which is
/// what crosses the remote-procedure surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Stable platform id.
    pub id: String,
    /// Display name; may be empty when no source knew a name.
    pub display_name: String,
    /// Phone numbers in provider row order. Duplicates allowed.
    pub phones: Vec<String>,
    /// Email addresses in provider row order. Duplicates allowed.
    pub emails: Vec<String>,
}

impl Contact {
    /// A partial record carrying no values yet.
    pub fn empty(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            phones: Vec::new(),
            emails: Vec::new(),
        }
    }

    /// Combine the partial records for one contact id, in source order.
    ///
    /// The display name is the first non-empty one encountered; phone and
    /// email lists concatenate in the order the partial records appear.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `parts` is empty or the parts disagree on
    /// the contact id; the merger only calls this with at least one record
    /// collected under a single id.
    pub fn merged(parts: &[&Contact]) -> Contact {
        debug_assert!(!parts.is_empty());
        debug_assert!(parts.iter().all(|c| c.id == parts[0].id));

        let mut result = Contact::empty(parts[0].id.clone(), "");
        for part in parts {
            if result.display_name.is_empty() && !part.display_name.is_empty() {
                result.display_name = part.display_name.clone();
            }
            result.phones.extend(part.phones.iter().cloned());
            result.emails.extend(part.emails.iter().cloned());
        }
        result
    }
}
