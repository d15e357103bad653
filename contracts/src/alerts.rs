//! Alert listing, alert detail and contact-disclosure contracts.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::Date;

use crate::ContractError;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

// =============================================================================
// CATEGORY
// =============================================================================

/// Top-level alert category.
///
/// `All` is the "no constraint" sentinel: it is shown as `ALL` in selectors
/// and travels as the empty string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlertCategory {
    #[default]
    All,
    Fire,
    Police,
    Medical,
    Misc,
}

impl AlertCategory {
    /// Every selectable value, in selector order.
    pub const CHOICES: [Self; 5] = [Self::All, Self::Fire, Self::Police, Self::Medical, Self::Misc];

    /// Human label, also the backend's category name for concrete categories.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Fire => "Fire Alerts",
            Self::Police => "Police Dispatch",
            Self::Medical => "Medical Emergencies",
            Self::Misc => "Miscellaneous (MISC)",
        }
    }

    /// Value sent to the backend; `All` maps to the empty string.
    #[must_use]
    pub fn wire_value(self) -> &'static str {
        match self {
            Self::All => "",
            other => other.label(),
        }
    }

    /// Short lowercase key used for CSS modifiers and CLI flags.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Fire => "fire",
            Self::Police => "police",
            Self::Medical => "medical",
            Self::Misc => "misc",
        }
    }
}

impl fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AlertCategory {
    type Err = ContractError;

    /// Accepts labels, wire values and short keys, case-insensitively.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::All);
        }
        Self::CHOICES
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed) || c.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ContractError::UnknownCategory(trimmed.to_owned()))
    }
}

impl Serialize for AlertCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_value())
    }
}

impl<'de> Deserialize<'de> for AlertCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// STAR RATING
// =============================================================================

/// Alert rating in `0..=5`. Zero doubles as "no rating constraint" in filters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

impl StarRating {
    pub const MAX: u8 = 5;
    pub const ANY: Self = Self(0);

    /// Build a rating, rejecting values above [`StarRating::MAX`].
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidRating`] for values above 5.
    pub fn new(value: u8) -> Result<Self, ContractError> {
        if value > Self::MAX {
            return Err(ContractError::InvalidRating(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Render as filled/empty stars, e.g. `★★★☆☆`.
    #[must_use]
    pub fn stars(self) -> String {
        let filled = usize::from(self.0);
        let empty = usize::from(Self::MAX) - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl TryFrom<u8> for StarRating {
    type Error = ContractError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

// =============================================================================
// LIST QUERY / RESPONSE
// =============================================================================

/// Body of `POST /api/alerts/get-alerts-by-filter`.
///
/// All filter dimensions are always present so the backend sees the complete
/// filter set on every request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertsQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanner_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(rename = "headSearch", default)]
    pub head_search: String,
    #[serde(rename = "decSearch", default)]
    pub desc_search: String,
    /// Digits-only by input masking, but transmitted as free text.
    #[serde(rename = "idSearch", default)]
    pub id_search: String,
    #[serde(default)]
    pub category: AlertCategory,
    #[serde(default)]
    pub county: String,
    #[serde(default, with = "iso_date::option")]
    pub selected_from: Option<Date>,
    #[serde(default, with = "iso_date::option")]
    pub selected_to: Option<Date>,
    #[serde(default)]
    pub stars: StarRating,
}

/// A single dispatch alert.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    pub id: i64,
    pub headline: String,
    pub description: String,
    pub scanner_id: i64,
    pub address: String,
    #[serde(rename = "dateTime")]
    pub date_time: String,
    pub category: String,
    pub sub_category: String,
    pub is_visited: Option<i32>,
    pub rating: StarRating,
    pub rating_title: String,
    pub rating_criteria: String,
}

impl Alert {
    #[must_use]
    pub fn visited(&self) -> bool {
        self.is_visited.is_some_and(|v| v != 0)
    }
}

/// Alert with the address strings attached by the listing endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertObject {
    pub alert: Alert,
    #[serde(default)]
    pub addresses: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    #[serde(default)]
    pub total: u64,
}

/// Response of `POST /api/alerts/get-alerts-by-filter`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertsPage {
    #[serde(default)]
    pub alerts: Vec<AlertObject>,
    #[serde(default)]
    pub pagination: PaginationInfo,
}

// =============================================================================
// DETAIL
// =============================================================================

/// Body of `POST /api/alerts/get-alert-by-id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertDetailQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanner_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
}

/// Monitored radio source.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scanner {
    pub id: Option<i64>,
    pub county_name: String,
    pub state_name: String,
    pub scanner_title: String,
}

impl Scanner {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}, {} ({})", self.county_name, self.state_name, self.scanner_title)
    }
}

/// Recorded dispatch audio and its transcripts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioClip {
    pub file_name: Option<String>,
    pub context: Option<String>,
    pub cleared_context: Option<String>,
}

impl AudioClip {
    /// Cleaned transcript when the backend produced one, raw transcript otherwise.
    #[must_use]
    pub fn transcript(&self) -> Option<&str> {
        self.cleared_context.as_deref().or(self.context.as_deref())
    }

    /// Playable URL under `base`, if the clip has a file.
    #[must_use]
    pub fn url(&self, base: &str) -> Option<String> {
        self.file_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| format!("{base}{name}"))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResidentInfo {
    pub name: String,
    pub past_address: String,
    pub phone_number: String,
    pub email_address: String,
    pub current_address: String,
}

/// Contact records linked to a candidate address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    /// Owner slots may be `null` on the wire.
    pub owner_info: Vec<Option<ResidentInfo>>,
    pub current_info: Vec<ResidentInfo>,
    pub past_info: Vec<ResidentInfo>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactGroupKind {
    Owner,
    Current,
    Past,
}

impl ContactGroupKind {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Owner => "Owners",
            Self::Current => "Current Residents",
            Self::Past => "Past Residents",
        }
    }
}

/// A non-empty group of resident records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactGroup<'a> {
    pub kind: ContactGroupKind,
    pub residents: Vec<&'a ResidentInfo>,
}

impl ContactInfo {
    /// Groups in display order (owner, current, past), skipping empty ones.
    #[must_use]
    pub fn groups(&self) -> Vec<ContactGroup<'_>> {
        let owners: Vec<&ResidentInfo> = self.owner_info.iter().flatten().collect();
        let current: Vec<&ResidentInfo> = self.current_info.iter().collect();
        let past: Vec<&ResidentInfo> = self.past_info.iter().collect();

        [
            (ContactGroupKind::Owner, owners),
            (ContactGroupKind::Current, current),
            (ContactGroupKind::Past, past),
        ]
        .into_iter()
        .filter(|(_, residents)| !residents.is_empty())
        .map(|(kind, residents)| ContactGroup { kind, residents })
        .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups().is_empty()
    }
}

/// Candidate street address inferred for an alert.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressCandidate {
    pub id: i64,
    pub alert_id: i64,
    pub scanner_id: Option<i64>,
    pub address: String,
    /// Confidence in `0..=1`.
    pub score: f64,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "dateTime")]
    pub date_time: Option<String>,
    pub contact_info: ContactInfo,
}

impl AddressCandidate {
    /// Confidence as a percentage with two decimals, e.g. `87.50 %`.
    #[must_use]
    pub fn score_percent(&self) -> String {
        format!("{:.2} %", self.score * 100.0)
    }
}

/// Response of `POST /api/alerts/get-alert-by-id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertDetail {
    pub alert: Alert,
    #[serde(default)]
    pub addresses: Vec<AddressCandidate>,
    #[serde(default)]
    pub scanner: Option<Scanner>,
    #[serde(default)]
    pub audio: Option<AudioClip>,
}

// =============================================================================
// CONTACT UNLOCK / GRANTEES
// =============================================================================

/// Body of the unlock-contact and grantee endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<i64>,
}

/// Deed grantee recorded for an address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grantee {
    pub name: String,
    pub address: String,
    pub recorded_at: Option<String>,
}

/// Response of `POST /api/alerts/get-grantee-info`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GranteesResponse {
    pub status: bool,
    pub message: String,
    pub grantees: Vec<Grantee>,
}
