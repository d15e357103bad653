//! Sub-category listing used by the settings and keyword filter pages.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use contracts::settings::sort_by_id;
use contracts::{AlertCategory, CategorySetting, SubCategoryQuery};

use super::fetch_seq::FetchSeq;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryListState {
    pub category: AlertCategory,
    pub search: String,
    pub rows: Vec<CategorySetting>,
    pub loading: bool,
    /// Keyword filter page lists rows by ascending id.
    pub sorted: bool,
    seq: FetchSeq,
}

impl CategoryListState {
    #[must_use]
    pub fn sorted() -> Self {
        Self { sorted: true, ..Self::default() }
    }

    #[must_use]
    pub fn query(&self) -> SubCategoryQuery {
        let search = self.search.trim();
        SubCategoryQuery {
            category: self.category,
            search: (!search.is_empty()).then(|| search.to_owned()),
        }
    }

    /// Start a fetch for the current selection.
    pub fn begin_fetch(&mut self) -> (u64, SubCategoryQuery) {
        self.loading = true;
        (self.seq.issue(), self.query())
    }

    /// Apply rows from fetch `seq`; stale results are dropped.
    pub fn finish_fetch(&mut self, seq: u64, mut rows: Vec<CategorySetting>) -> bool {
        if !self.seq.is_current(seq) {
            return false;
        }
        if self.sorted {
            sort_by_id(&mut rows);
        }
        self.rows = rows;
        self.loading = false;
        true
    }

    pub fn fail_fetch(&mut self, seq: u64) -> bool {
        if !self.seq.is_current(seq) {
            return false;
        }
        self.loading = false;
        true
    }
}
