//! Settings (sub-category keywords) and billing state-list contracts.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

use crate::AlertCategory;

/// Keyword-level grouping beneath a top-level category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorySetting {
    pub id: i64,
    pub sub_category: String,
    pub category: String,
}

/// Body of `POST /api/settings/get-sub-categories-by-category`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCategoryQuery {
    pub category: AlertCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Sort settings rows by ascending id, as the keyword filter page lists them.
pub fn sort_by_id(rows: &mut [CategorySetting]) {
    rows.sort_by_key(|row| row.id);
}

/// US state with its monitored counties, from `GET /api/billing/get-state-list`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsState {
    pub state_id: String,
    pub state_name: String,
    pub counties: Vec<String>,
}

/// Every county across `states`, sorted and de-duplicated.
#[must_use]
pub fn county_names(states: &[UsState]) -> Vec<String> {
    let mut names: Vec<String> = states.iter().flat_map(|s| s.counties.iter().cloned()).collect();
    names.sort();
    names.dedup();
    names
}
