//! Row merger.
//!
//! Combines N per-source partial maps into one map with no duplicate ids.
//! Field values and list orderings are deterministic for a fixed source
//! order; the iteration order of the returned map is not.

use std::collections::HashMap;

use crate::model::Contact;

/// Merge partial per-source results into one map keyed by contact id.
///
/// `partials` must be in source order: for ids present in several maps, the
/// display name is the first non-empty one in that order and list fields
/// concatenate in that order. Each id is processed exactly once, no matter
/// how many maps contain it.
pub fn merge_partials(partials: &[HashMap<String, Contact>]) -> HashMap<String, Contact> {
    let mut merged: HashMap<String, Contact> = HashMap::new();

    let mut parts: Vec<&Contact> = Vec::with_capacity(partials.len());
    for partial in partials {
        for id in partial.keys() {
            if merged.contains_key(id) {
                continue;
            }
            parts.clear();
            parts.extend(partials.iter().filter_map(|p| p.get(id)));
            merged.insert(id.clone(), Contact::merged(&parts));
        }
    }

    merged
}
