//! CSV export of alert listings.
//!
//! Output follows RFC 4180: comma separated, CRLF line endings, fields quoted
//! only when they contain a comma, quote or line break.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::AlertObject;

const ALERT_COLUMNS: [&str; 8] =
    ["id", "headline", "description", "category", "sub_category", "address", "recorded", "rating"];

/// Render alerts as CSV with a header row.
#[must_use]
pub fn alerts_csv(alerts: &[AlertObject]) -> String {
    let mut out = String::new();
    push_row(&mut out, ALERT_COLUMNS.iter().map(|c| (*c).to_owned()));
    for item in alerts {
        let alert = &item.alert;
        push_row(
            &mut out,
            [
                alert.id.to_string(),
                alert.headline.clone(),
                alert.description.clone(),
                alert.category.clone(),
                alert.sub_category.clone(),
                alert.address.clone(),
                alert.date_time.clone(),
                alert.rating.value().to_string(),
            ]
            .into_iter(),
        );
    }
    out
}

fn push_row(out: &mut String, fields: impl Iterator<Item = String>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&escape_field(&field));
    }
    out.push_str("\r\n");
}

/// Quote a field when it contains a delimiter, quote or line break.
#[must_use]
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}
