//! Selection set of book ids.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use bookdesk_core::types::BookId;

/// Books ticked for a batch action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    ids: BTreeSet<BookId>,
}

impl Selection {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove one id. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: BookId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Select one id. Returns whether it was newly added.
    pub fn insert(&mut self, id: BookId) -> bool {
        self.ids.insert(id)
    }

    /// Toggle between "every id of `page` selected" and empty.
    pub fn toggle_all<'a>(&mut self, page: impl IntoIterator<Item = &'a BookId>) {
        let page: BTreeSet<BookId> = page.into_iter().cloned().collect();
        if !page.is_empty() && self.ids == page {
            self.ids.clear();
        } else {
            self.ids = page;
        }
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: &BookId) -> bool {
        self.ids.contains(id)
    }

    /// Remove every id in `ids`.
    pub fn remove_all(&mut self, ids: &[BookId]) {
        for id in ids {
            self.ids.remove(id);
        }
    }

    /// Number of selected books.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in sorted order.
    pub fn ids(&self) -> Vec<BookId> {
        self.ids.iter().cloned().collect()
    }
}
