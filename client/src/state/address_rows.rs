//! Expand/collapse state of address-candidate rows on the alert detail page.

#[cfg(test)]
#[path = "address_rows_test.rs"]
mod address_rows_test;

use std::collections::BTreeSet;

/// Set of expanded candidate ids. Rows toggle independently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedRows {
    open: BTreeSet<i64>,
}

impl ExpandedRows {
    /// Flip row `id`; returns whether it is now expanded.
    pub fn toggle(&mut self, id: i64) -> bool {
        if self.open.remove(&id) {
            false
        } else {
            self.open.insert(id);
            true
        }
    }

    #[must_use]
    pub fn is_expanded(&self, id: i64) -> bool {
        self.open.contains(&id)
    }

    pub fn clear(&mut self) {
        self.open.clear();
    }
}
