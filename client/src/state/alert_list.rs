//! Alert list filter + pagination state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The alert list is re-derived from the backend on every change. This module
//! keeps the eight filter dimensions and the two pagination parameters
//! consistent, builds the outgoing query from them, and decides whether an
//! incoming response may replace the displayed collection.
//!
//! INVARIANTS
//! ==========
//! - Any filter edit that changes a value returns the list to page 0.
//! - Page-size changes also return to page 0; page-index changes do not.
//! - Only the newest fetch may replace `alerts`; failures keep the last-good
//!   collection.

#[cfg(test)]
#[path = "alert_list_test.rs"]
mod alert_list_test;

use contracts::validate::digits_only;
use contracts::{AlertCategory, AlertObject, AlertsPage, AlertsQuery, StarRating};
use time::Date;

use super::fetch_seq::FetchSeq;
use crate::util::pagination;

pub const PAGE_SIZE_OPTIONS: [u32; 3] = [5, 10, 15];
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Route-level scope applied to every request (scanner + sub-category).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertScope {
    pub scanner_id: Option<i64>,
    pub sub_category: Option<String>,
}

/// Current value of every filter dimension.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertFilter {
    pub headline: String,
    pub description: String,
    /// Digits only, but kept as text.
    pub alert_id: String,
    pub category: AlertCategory,
    pub date_from: Option<Date>,
    pub date_to: Option<Date>,
    pub county: String,
    pub stars: StarRating,
}

/// A single user edit to one filter dimension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterEdit {
    Headline(String),
    Description(String),
    AlertId(String),
    Category(AlertCategory),
    DateFrom(Option<Date>),
    DateTo(Option<Date>),
    County(String),
    Stars(StarRating),
}

impl AlertFilter {
    /// Apply `edit`; returns whether the filter value actually changed.
    pub fn apply(&mut self, edit: FilterEdit) -> bool {
        let before = self.clone();
        match edit {
            FilterEdit::Headline(v) => self.headline = v,
            FilterEdit::Description(v) => self.description = v,
            FilterEdit::AlertId(v) => self.alert_id = digits_only(&v),
            FilterEdit::Category(v) => self.category = v,
            FilterEdit::DateFrom(v) => self.date_from = v,
            FilterEdit::DateTo(v) => self.date_to = v,
            FilterEdit::County(v) => self.county = v,
            FilterEdit::Stars(v) => self.stars = v,
        }
        *self != before
    }
}

/// Ticket for one in-flight alert fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertFetch {
    pub seq: u64,
    pub query: AlertsQuery,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AlertListState {
    pub scope: AlertScope,
    pub filter: AlertFilter,
    pub page: u32,
    pub limit: u32,
    pub alerts: Vec<AlertObject>,
    pub total: u64,
    pub loading: bool,
    seq: FetchSeq,
}

impl Default for AlertListState {
    fn default() -> Self {
        Self::new(AlertScope::default())
    }
}

impl AlertListState {
    #[must_use]
    pub fn new(scope: AlertScope) -> Self {
        Self {
            scope,
            filter: AlertFilter::default(),
            page: 0,
            limit: DEFAULT_PAGE_SIZE,
            alerts: Vec::new(),
            total: 0,
            loading: false,
            seq: FetchSeq::default(),
        }
    }

    /// Apply a filter edit, returning to page 0 when the value changed.
    pub fn edit(&mut self, edit: FilterEdit) -> bool {
        let changed = self.filter.apply(edit);
        if changed {
            self.page = 0;
        }
        changed
    }

    /// Replace the route scope (e.g. navigating to another scanner).
    pub fn set_scope(&mut self, scope: AlertScope) {
        if self.scope != scope {
            self.scope = scope;
            self.page = 0;
        }
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// Change the page size; the current page no longer lines up, so restart at 0.
    pub fn set_limit(&mut self, limit: u32) {
        if limit != 0 && limit != self.limit {
            self.limit = limit;
            self.page = 0;
        }
    }

    /// Query carrying every current filter value plus page/limit.
    #[must_use]
    pub fn query(&self) -> AlertsQuery {
        AlertsQuery {
            page: self.page,
            limit: self.limit,
            scanner_id: self.scope.scanner_id,
            sub_category: self.scope.sub_category.clone(),
            head_search: self.filter.headline.clone(),
            desc_search: self.filter.description.clone(),
            id_search: self.filter.alert_id.clone(),
            category: self.filter.category,
            county: self.filter.county.clone(),
            selected_from: self.filter.date_from,
            selected_to: self.filter.date_to,
            stars: self.filter.stars,
        }
    }

    /// Start a fetch for the current query; supersedes any fetch still in flight.
    pub fn begin_fetch(&mut self) -> AlertFetch {
        self.loading = true;
        AlertFetch { seq: self.seq.issue(), query: self.query() }
    }

    /// Apply a response. Stale responses are ignored and `false` is returned.
    pub fn finish_fetch(&mut self, seq: u64, page: AlertsPage) -> bool {
        if !self.seq.is_current(seq) {
            return false;
        }
        self.alerts = page.alerts;
        self.total = page.pagination.total;
        self.loading = false;
        true
    }

    /// Record a failed fetch; the previous collection stays displayed.
    pub fn fail_fetch(&mut self, seq: u64) -> bool {
        if !self.seq.is_current(seq) {
            return false;
        }
        self.loading = false;
        true
    }

    #[must_use]
    pub fn page_count(&self) -> u64 {
        pagination::page_count(self.total, u64::from(self.limit))
    }

    #[must_use]
    pub fn range_label(&self) -> String {
        pagination::range_label(self.total, u64::from(self.page), u64::from(self.limit))
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        pagination::has_next(self.total, u64::from(self.page), u64::from(self.limit))
    }
}
