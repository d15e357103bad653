use super::*;
use serde_json::json;

fn user() -> SessionUser {
    SessionUser {
        id: Some(3),
        email: "ops@example.com".to_owned(),
        first_name: "Dana".to_owned(),
        last_name: "Reyes".to_owned(),
    }
}

fn device() -> DeviceFingerprint {
    DeviceFingerprint { device: "Desktop".to_owned(), browser: "Chrome".to_owned(), os: "Windows".to_owned() }
}

#[test]
fn record_carries_identity_and_device() {
    let record = build_visit_record(&user(), &device(), None);
    assert_eq!(record.email, "ops@example.com");
    assert_eq!(record.full_name, "Dana Reyes");
    assert_eq!(record.browser, "Chrome");
}

#[test]
fn failed_lookup_omits_location_fields() {
    let record = build_visit_record(&user(), &device(), None);
    let body = serde_json::to_value(&record).unwrap();
    assert!(body.get("city").is_none());
    assert!(body.get("ipaddress").is_none());
    assert!(body.get("countryCode").is_none());
}

#[test]
fn successful_lookup_fills_location_fields() {
    let location = GeoLocation {
        status: "success".to_owned(),
        city: "Brooklyn".to_owned(),
        country: "United States".to_owned(),
        region: "NY".to_owned(),
        country_code: "US".to_owned(),
        query: "203.0.113.9".to_owned(),
    };
    let body = serde_json::to_value(build_visit_record(&user(), &device(), Some(&location))).unwrap();
    assert_eq!(body["city"], json!("Brooklyn"));
    assert_eq!(body["ipaddress"], json!("203.0.113.9"));
    assert_eq!(body["countryCode"], json!("US"));
}
