//! External map links and route-segment decoding for address candidates.

#[cfg(test)]
#[path = "maps_test.rs"]
mod maps_test;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Google Maps search URL for a free-text address.
#[must_use]
pub fn map_search_url(address: &str) -> String {
    format!("{MAPS_SEARCH_URL}{}", urlencoding::encode(address.trim()))
}

/// Percent-decode a route parameter, keeping the raw text when it is not UTF-8.
#[must_use]
pub fn decode_route_param(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), std::borrow::Cow::into_owned)
}
