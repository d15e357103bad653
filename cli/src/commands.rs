//! Argument groups and their conversion into backend requests.
//!
//! Conversions are pure so flag handling can be checked without a backend.
//! Operator fields go through the same validators as the dashboard forms.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use clap::Args;
use contracts::dates::parse_date_input;
use contracts::validate::{digits_only, is_valid_email, is_valid_phone, is_valid_pin};
use contracts::{
    AlertCategory, AlertDetailQuery, AlertsQuery, LoginRequest, NewOperator, OperatorAccount, OperatorUpdate,
    Permission, StarRating,
};

use crate::CliError;

pub const CLI_DEVICE: &str = "Desktop";
pub const CLI_BROWSER: &str = "scanner-cli";

#[derive(Args, Debug, Clone, Default)]
pub struct AlertFilterArgs {
    #[arg(long)]
    pub scanner_id: Option<i64>,
    #[arg(long)]
    pub sub_category: Option<String>,
    /// Headline contains.
    #[arg(long, default_value = "")]
    pub headline: String,
    /// Description contains.
    #[arg(long, default_value = "")]
    pub description: String,
    /// Alert id contains (digits only).
    #[arg(long, default_value = "")]
    pub id: String,
    /// Category label or key (fire, police, medical, misc, all).
    #[arg(long, default_value = "all")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub county: String,
    /// Inclusive start date, `YYYY-MM-DD`.
    #[arg(long, default_value = "")]
    pub from: String,
    /// Inclusive end date, `YYYY-MM-DD`.
    #[arg(long, default_value = "")]
    pub to: String,
    /// Exact star rating; 0 means any.
    #[arg(long, default_value_t = 0)]
    pub stars: u8,
    /// Zero-based page index.
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    #[arg(long, default_value_t = 10)]
    pub limit: u32,
}

impl AlertFilterArgs {
    pub fn to_query(&self) -> Result<AlertsQuery, CliError> {
        if self.limit == 0 {
            return Err(CliError::InvalidInput("--limit must be at least 1".to_owned()));
        }
        let category: AlertCategory = self.category.parse().map_err(invalid)?;
        let stars = StarRating::new(self.stars).map_err(invalid)?;
        let selected_from = parse_date_input(&self.from).map_err(invalid)?;
        let selected_to = parse_date_input(&self.to).map_err(invalid)?;
        if let (Some(from), Some(to)) = (selected_from, selected_to)
            && from > to
        {
            return Err(CliError::InvalidInput("--from is after --to".to_owned()));
        }

        Ok(AlertsQuery {
            page: self.page,
            limit: self.limit,
            scanner_id: self.scanner_id,
            sub_category: self.sub_category.clone().filter(|s| !s.trim().is_empty()),
            head_search: self.headline.clone(),
            desc_search: self.description.clone(),
            id_search: digits_only(&self.id),
            category,
            county: self.county.clone(),
            selected_from,
            selected_to,
            stars,
        })
    }
}

#[derive(Args, Debug, Clone)]
pub struct AlertShowArgs {
    pub alert_id: i64,
    #[arg(long)]
    pub scanner_id: Option<i64>,
    #[arg(long)]
    pub sub_category: Option<String>,
}

impl AlertShowArgs {
    pub fn to_query(&self) -> AlertDetailQuery {
        AlertDetailQuery {
            alert_id: Some(self.alert_id),
            scanner_id: self.scanner_id,
            sub_category: self.sub_category.clone(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct NewOperatorArgs {
    #[arg(long)]
    pub full_name: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub pin: String,
    #[arg(long)]
    pub permission: Permission,
}

impl NewOperatorArgs {
    pub fn to_request(&self) -> Result<NewOperator, CliError> {
        let full_name = required("--full-name", &self.full_name)?;
        let email = checked_email(&self.email)?;
        let phone_number = checked_phone(&self.phone)?;
        if !is_valid_pin(&self.pin) {
            return Err(CliError::InvalidInput("--pin must be at least 4 characters".to_owned()));
        }
        Ok(NewOperator {
            full_name,
            phone_number,
            email,
            security_pin: self.pin.clone(),
            permission: self.permission,
        })
    }
}

/// Partial edit; unset flags keep the operator's current value.
#[derive(Args, Debug, Clone)]
pub struct EditOperatorArgs {
    pub id: i64,
    #[arg(long)]
    pub full_name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// New PIN; the current PIN is kept when omitted.
    #[arg(long)]
    pub pin: Option<String>,
    #[arg(long)]
    pub permission: Option<Permission>,
}

impl EditOperatorArgs {
    pub fn to_update(&self, current: &OperatorAccount) -> Result<OperatorUpdate, CliError> {
        let full_name = required("--full-name", self.full_name.as_deref().unwrap_or(&current.full_name))?;
        let email = checked_email(self.email.as_deref().unwrap_or(&current.email))?;
        let phone_number = checked_phone(self.phone.as_deref().unwrap_or(&current.phone_number))?;
        let security_pin = match self.pin.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(pin) if is_valid_pin(pin) => Some(pin.to_owned()),
            Some(_) => return Err(CliError::InvalidInput("--pin must be at least 4 characters".to_owned())),
        };
        let permission = self
            .permission
            .or(current.permission)
            .ok_or_else(|| CliError::InvalidInput("operator has no permission; pass --permission".to_owned()))?;

        Ok(OperatorUpdate { id: current.id, full_name, email, phone_number, security_pin, permission })
    }
}

/// Operators whose name or phone contains `search` (case-insensitive) and,
/// when given, hold `permission`.
pub fn filter_operators<'a>(
    operators: &'a [OperatorAccount],
    search: &str,
    permission: Option<Permission>,
) -> Vec<&'a OperatorAccount> {
    let needle = search.trim().to_lowercase();
    operators
        .iter()
        .filter(|op| permission.is_none_or(|p| op.permission == Some(p)))
        .filter(|op| {
            needle.is_empty()
                || op.full_name.to_lowercase().contains(&needle)
                || op.phone_number.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn login_request(email: &str, password: &str) -> Result<LoginRequest, CliError> {
    let email = checked_email(email)?;
    if password.is_empty() {
        return Err(CliError::InvalidInput("--password is required".to_owned()));
    }
    Ok(LoginRequest {
        email,
        password: password.to_owned(),
        device: CLI_DEVICE.to_owned(),
        browser: CLI_BROWSER.to_owned(),
        os: std::env::consts::OS.to_owned(),
        ipaddress: None,
    })
}

fn invalid(e: impl std::fmt::Display) -> CliError {
    CliError::InvalidInput(e.to_string())
}

fn required(flag: &str, value: &str) -> Result<String, CliError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CliError::InvalidInput(format!("{flag} is required")));
    }
    Ok(trimmed.to_owned())
}

fn checked_email(value: &str) -> Result<String, CliError> {
    let email = required("--email", value)?;
    if !is_valid_email(&email) {
        return Err(CliError::InvalidInput(format!("invalid email: {email}")));
    }
    Ok(email)
}

fn checked_phone(value: &str) -> Result<String, CliError> {
    let phone = required("--phone", value)?;
    if !is_valid_phone(&phone) {
        return Err(CliError::InvalidInput(format!("invalid phone number: {phone}")));
    }
    Ok(phone)
}
