//! Build-time client configuration.
//!
//! Values are baked into the WASM bundle with `option_env!` so the browser
//! never needs a config round trip.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_GEO_LOOKUP_URL: &str = "http://ip-api.com/json";

/// Prefix joined with an alert's audio file name.
#[must_use]
pub fn audio_base_url() -> &'static str {
    option_env!("SCANNER_AUDIO_BASE_URL").unwrap_or("")
}

/// IP geolocation endpoint used by the visit audit and login fingerprint.
#[must_use]
pub fn geo_lookup_url() -> &'static str {
    option_env!("SCANNER_GEO_LOOKUP_URL")
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_GEO_LOOKUP_URL)
}
