//! Phrasebook favorites and lookup. Phrases are identified by a stable
//! `PhraseId` assigned at the content-definition level, so two categories
//! can carry the same text without their favorite state bleeding together.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::content::{self, Phrase, PhraseCategory};

/// Position of a phrase in the content tables: category index plus phrase
/// index within that category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PhraseId {
    pub category: u8,
    pub index: u8,
}

impl PhraseId {
    #[must_use]
    pub fn new(category: u8, index: u8) -> Self {
        Self { category, index }
    }
}

/// Resolve an id back to its category and phrase. `None` for ids that fall
/// outside the content tables (e.g. stale input from the shell).
#[must_use]
pub fn resolve(id: PhraseId) -> Option<(&'static PhraseCategory, &'static Phrase)> {
    let category = content::PHRASE_CATEGORIES.get(usize::from(id.category))?;
    let phrase = category.phrases.get(usize::from(id.index))?;
    Some((category, phrase))
}

/// Toggle favorite membership. Ids outside the content tables are rejected.
pub fn toggle_favorite(favorites: &mut BTreeSet<PhraseId>, id: PhraseId) -> bool {
    if resolve(id).is_none() {
        return false;
    }
    if !favorites.remove(&id) {
        favorites.insert(id);
    }
    true
}

/// Favorited phrases in content-definition order, each with its originating
/// category.
#[must_use]
pub fn favorites_in_order(
    favorites: &BTreeSet<PhraseId>,
) -> Vec<(PhraseId, &'static PhraseCategory, &'static Phrase)> {
    content::PHRASE_CATEGORIES
        .iter()
        .enumerate()
        .flat_map(|(ci, category)| {
            category.phrases.iter().enumerate().filter_map(move |(pi, phrase)| {
                let id = PhraseId::new(ci as u8, pi as u8);
                favorites.contains(&id).then_some((id, category, phrase))
            })
        })
        .collect()
}
