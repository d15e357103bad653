//! Calendar-date handling for filter ranges.
//!
//! Date filters travel as `YYYY-MM-DD` strings (or `null`), which is also the
//! value format of an HTML `<input type="date">`.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::Date;
use time::macros::format_description;

use crate::ContractError;

/// Parse a date-input value. An empty (or whitespace) value clears the bound.
///
/// # Errors
///
/// Returns [`ContractError::InvalidDate`] when the value is not `YYYY-MM-DD`.
pub fn parse_date_input(raw: &str) -> Result<Option<Date>, ContractError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Date::parse(trimmed, format_description!("[year]-[month]-[day]"))
        .map(Some)
        .map_err(|_| ContractError::InvalidDate(trimmed.to_owned()))
}

/// Render a date back into the date-input value format.
#[must_use]
pub fn format_date_input(date: Option<Date>) -> String {
    date.and_then(|d| d.format(format_description!("[year]-[month]-[day]")).ok())
        .unwrap_or_default()
}
