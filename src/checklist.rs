//! Checked-state handling for the packing checklist. The checked set is
//! persisted as a JSON array of item id strings under a single storage key;
//! anything unreadable degrades to an empty set so a corrupt payload can
//! never wedge the screen.

use std::collections::BTreeSet;

use crate::content;

/// Decode a persisted payload into a checked set. Missing values, invalid
/// JSON, and ids that no longer exist in the item table all degrade to the
/// empty set / get dropped. Returns the set and whether the payload had to
/// be discarded.
#[must_use]
pub fn decode(payload: Option<&[u8]>) -> (BTreeSet<String>, bool) {
    let Some(bytes) = payload else {
        return (BTreeSet::new(), false);
    };
    match serde_json::from_slice::<Vec<String>>(bytes) {
        Ok(ids) => {
            let checked = ids
                .into_iter()
                .filter(|id| content::is_known_checklist_id(id))
                .collect();
            (checked, false)
        }
        Err(_) => (BTreeSet::new(), true),
    }
}

/// Encode the full checked set for persistence.
#[must_use]
pub fn encode(checked: &BTreeSet<String>) -> Vec<u8> {
    let ids: Vec<&str> = checked.iter().map(String::as_str).collect();
    // Serialising a vec of strings cannot fail.
    serde_json::to_vec(&ids).unwrap_or_default()
}

/// Toggle membership of a known item id. Unknown ids are rejected.
pub fn toggle(checked: &mut BTreeSet<String>, id: &str) -> bool {
    if !content::is_known_checklist_id(id) {
        return false;
    }
    if !checked.remove(id) {
        checked.insert(id.to_string());
    }
    true
}

/// Fraction of items checked, in `[0, 1]`.
#[must_use]
pub fn progress(checked: &BTreeSet<String>) -> f32 {
    let total = content::CHECKLIST_ITEMS.len();
    if total == 0 {
        return 0.0;
    }
    checked.len() as f32 / total as f32
}

#[must_use]
pub fn is_complete(checked: &BTreeSet<String>) -> bool {
    checked.len() == content::CHECKLIST_ITEMS.len()
}
