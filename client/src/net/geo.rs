//! Best-effort IP geolocation.
//!
//! Lookup failures are never surfaced: callers get `None` and proceed
//! without location fields.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use serde::Deserialize;

/// Subset of the ip-api.com response the dashboard records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeoLocation {
    pub status: String,
    pub city: String,
    pub country: String,
    pub region: String,
    #[serde(rename = "countryCode")]
    pub country_code: String,
    /// The caller's public IP address.
    pub query: String,
}

impl GeoLocation {
    /// ip-api reports lookup failures in-band with `status: "fail"`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_empty() || self.status == "success"
    }

    #[must_use]
    pub fn ip(&self) -> Option<String> {
        (!self.query.is_empty()).then(|| self.query.clone())
    }
}

/// Look up the caller's location at `url`.
pub async fn fetch_geolocation(url: &str) -> Option<GeoLocation> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<GeoLocation>().await.ok().filter(GeoLocation::is_success)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        None
    }
}
