//! User-agent heuristics for visit auditing and login fingerprints.
//!
//! Classification is substring based and deliberately coarse: it only needs
//! to label a visit, not gate behavior.

#[cfg(test)]
#[path = "device_test.rs"]
mod device_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceKind {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "Mobile",
            Self::Tablet => "Tablet",
            Self::Desktop => "Desktop",
        }
    }
}

#[must_use]
pub fn detect_device(ua: &str) -> DeviceKind {
    let ua = ua.to_lowercase();
    if ua.contains("ipad") || ua.contains("tablet") || (ua.contains("android") && !ua.contains("mobile")) {
        DeviceKind::Tablet
    } else if ua.contains("mobi") || ua.contains("iphone") || ua.contains("ipod") {
        DeviceKind::Mobile
    } else {
        DeviceKind::Desktop
    }
}

/// Browser family. Order matters: Edge and Opera also claim Chrome, Chrome
/// also claims Safari.
#[must_use]
pub fn detect_browser(ua: &str) -> &'static str {
    if ua.contains("Edg/") || ua.contains("Edge/") {
        "Edge"
    } else if ua.contains("OPR/") || ua.contains("Opera") {
        "Opera"
    } else if ua.contains("Firefox/") || ua.contains("FxiOS/") {
        "Firefox"
    } else if ua.contains("Chrome/") || ua.contains("CriOS/") {
        "Chrome"
    } else if ua.contains("Safari/") {
        "Safari"
    } else if ua.contains("Trident/") || ua.contains("MSIE") {
        "Internet Explorer"
    } else {
        "Unknown"
    }
}

#[must_use]
pub fn detect_os(ua: &str) -> &'static str {
    if ua.contains("Windows") {
        "Windows"
    } else if ua.contains("iPhone") || ua.contains("iPad") || ua.contains("iPod") {
        "iOS"
    } else if ua.contains("Android") {
        "Android"
    } else if ua.contains("Mac OS X") || ua.contains("Macintosh") {
        "macOS"
    } else if ua.contains("CrOS") {
        "Chrome OS"
    } else if ua.contains("Linux") {
        "Linux"
    } else {
        "Unknown"
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceFingerprint {
    pub device: String,
    pub browser: String,
    pub os: String,
}

impl DeviceFingerprint {
    #[must_use]
    pub fn from_user_agent(ua: &str) -> Self {
        Self {
            device: detect_device(ua).as_str().to_owned(),
            browser: detect_browser(ua).to_owned(),
            os: detect_os(ua).to_owned(),
        }
    }

    /// Fingerprint of the running browser.
    #[must_use]
    pub fn current() -> Self {
        Self::from_user_agent(&current_user_agent())
    }
}

/// `navigator.userAgent`, or empty outside the browser.
pub fn current_user_agent() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.navigator().user_agent().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
