//! Operator list search, permission filter and client-side pagination.
//!
//! The backend returns every operator at once; filtering and paging happen
//! here. Typed search text only takes effect when applied.

#[cfg(test)]
#[path = "user_list_test.rs"]
mod user_list_test;

use contracts::{OperatorAccount, Permission};

use crate::util::pagination;

pub const ROWS_PER_PAGE_OPTIONS: [usize; 4] = [5, 10, 25, 50];
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserListState {
    pub users: Vec<OperatorAccount>,
    /// Search box contents, not yet applied.
    pub search: String,
    /// Permission dropdown; `None` means all.
    pub permission: Option<Permission>,
    pub page: usize,
    pub rows_per_page: usize,
    pub loading: bool,
    applied_search: String,
    applied_permission: Option<Permission>,
}

impl Default for UserListState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            search: String::new(),
            permission: None,
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            loading: false,
            applied_search: String::new(),
            applied_permission: None,
        }
    }
}

impl UserListState {
    /// Replace the operator collection, keeping the page in range.
    pub fn set_users(&mut self, users: Vec<OperatorAccount>) {
        self.users = users;
        self.loading = false;
        self.clamp_page();
    }

    /// Commit the search box and permission dropdown; returns to page 0.
    pub fn apply_search(&mut self) {
        self.applied_search = self.search.trim().to_lowercase();
        self.applied_permission = self.permission;
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
    }

    pub fn set_rows_per_page(&mut self, rows: usize) {
        if rows != 0 && rows != self.rows_per_page {
            self.rows_per_page = rows;
            self.page = 0;
        }
    }

    /// Operators matching the applied search and permission.
    #[must_use]
    pub fn filtered(&self) -> Vec<&OperatorAccount> {
        self.users.iter().filter(|u| self.matches(u)).collect()
    }

    /// Rows on the current page.
    #[must_use]
    pub fn visible(&self) -> Vec<OperatorAccount> {
        let filtered = self.filtered();
        pagination::page_slice(&filtered, self.page, self.rows_per_page)
            .iter()
            .map(|u| (*u).clone())
            .collect()
    }

    #[must_use]
    pub fn filtered_total(&self) -> u64 {
        self.filtered().len() as u64
    }

    #[must_use]
    pub fn range_label(&self) -> String {
        pagination::range_label(self.filtered_total(), self.page as u64, self.rows_per_page as u64)
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        pagination::has_next(self.filtered_total(), self.page as u64, self.rows_per_page as u64)
    }

    fn matches(&self, user: &OperatorAccount) -> bool {
        if let Some(permission) = self.applied_permission
            && user.permission != Some(permission)
        {
            return false;
        }
        self.applied_search.is_empty()
            || user.full_name.to_lowercase().contains(&self.applied_search)
            || user.phone_number.to_lowercase().contains(&self.applied_search)
    }

    fn clamp_page(&mut self) {
        let page = pagination::clamp_page(self.page as u64, self.filtered_total(), self.rows_per_page as u64);
        self.page = usize::try_from(page).unwrap_or(usize::MAX);
    }
}
