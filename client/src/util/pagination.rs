//! Pagination arithmetic shared by server-paged and client-paged tables.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Number of pages needed for `total` rows; zero rows still yield zero pages.
#[must_use]
pub fn page_count(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Largest valid zero-based page index for `total` rows (0 when empty).
#[must_use]
pub fn last_page(total: u64, per_page: u64) -> u64 {
    page_count(total, per_page).saturating_sub(1)
}

/// Clamp `page` into the valid range for `total` rows.
#[must_use]
pub fn clamp_page(page: u64, total: u64, per_page: u64) -> u64 {
    page.min(last_page(total, per_page))
}

/// Rows of `items` shown on zero-based `page`.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// Table footer label, e.g. `11–20 of 42`.
#[must_use]
pub fn range_label(total: u64, page: u64, per_page: u64) -> String {
    if total == 0 || per_page == 0 {
        return "0–0 of 0".to_owned();
    }
    let first = (page * per_page + 1).min(total);
    let last = ((page + 1) * per_page).min(total);
    format!("{first}–{last} of {total}")
}

/// Whether a next page exists after zero-based `page`.
#[must_use]
pub fn has_next(total: u64, page: u64, per_page: u64) -> bool {
    page + 1 < page_count(total, per_page)
}
