//! Visit audit records sent when the dashboard shell mounts.
//!
//! DESIGN
//! ======
//! The audit runs as a detached task: it never blocks rendering, nothing
//! awaits it, and its outcome is dropped. A failed geolocation lookup still
//! records the visit with location fields omitted.

#[cfg(test)]
#[path = "audit_test.rs"]
mod audit_test;

use contracts::{SessionUser, VisitRecord};

use super::device::DeviceFingerprint;
use crate::net::api::Api;
use crate::net::geo::{self, GeoLocation};

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// Build the record for `user` visiting from `device`.
#[must_use]
pub fn build_visit_record(user: &SessionUser, device: &DeviceFingerprint, location: Option<&GeoLocation>) -> VisitRecord {
    VisitRecord {
        email: user.email.clone(),
        full_name: user.full_name(),
        device: device.device.clone(),
        browser: device.browser.clone(),
        os: device.os.clone(),
        city: location.and_then(|l| non_empty(&l.city)),
        country: location.and_then(|l| non_empty(&l.country)),
        region: location.and_then(|l| non_empty(&l.region)),
        ipaddress: location.and_then(GeoLocation::ip),
        country_code: location.and_then(|l| non_empty(&l.country_code)),
    }
}

/// Fire-and-forget visit record for `user`.
pub fn spawn_visit_record(api: Api, user: SessionUser, geo_url: &'static str) {
    leptos::task::spawn_local(async move {
        let device = DeviceFingerprint::current();
        let location = geo::fetch_geolocation(geo_url).await;
        let record = build_visit_record(&user, &device, location.as_ref());
        let _ = api.record_visit(&record).await;
    });
}
