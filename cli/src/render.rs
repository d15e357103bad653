//! Plain-text rendering of backend responses for the terminal.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use contracts::{AlertDetail, AlertsPage, CategorySetting, GranteesResponse, OperatorAccount};

const HEADLINE_WIDTH: usize = 48;

/// Shorten `text` to `width` characters, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

pub fn alerts_page(page: &AlertsPage, page_index: u32, limit: u32) -> String {
    let mut out = String::new();
    for item in &page.alerts {
        let alert = &item.alert;
        let _ = writeln!(
            out,
            "{:>8}  {}  {:<20}  {:<width$}  {}",
            alert.id,
            alert.rating.stars(),
            truncate(&alert.category, 20),
            truncate(&alert.headline, HEADLINE_WIDTH),
            alert.date_time,
            width = HEADLINE_WIDTH,
        );
    }
    let start = u64::from(page_index) * u64::from(limit);
    let shown = page.alerts.len() as u64;
    if shown == 0 {
        let _ = writeln!(out, "no alerts (total {})", page.pagination.total);
    } else {
        let _ = writeln!(out, "{}–{} of {}", start + 1, start + shown, page.pagination.total);
    }
    out
}

pub fn alert_detail(detail: &AlertDetail, audio_base: &str) -> String {
    let alert = &detail.alert;
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", alert.id, alert.headline);
    let _ = writeln!(out, "category: {} / {}", alert.category, alert.sub_category);
    let _ = writeln!(out, "rating:   {} {}", alert.rating.stars(), alert.rating_title);
    let _ = writeln!(out, "recorded: {}", alert.date_time);
    if let Some(scanner) = &detail.scanner {
        let _ = writeln!(out, "scanner:  {}", scanner.label());
    }
    if !alert.description.is_empty() {
        let _ = writeln!(out, "\n{}", alert.description);
    }
    if let Some(audio) = &detail.audio {
        if let Some(url) = audio.url(audio_base) {
            let _ = writeln!(out, "\naudio: {url}");
        }
        if let Some(transcript) = audio.transcript() {
            let _ = writeln!(out, "transcript: {transcript}");
        }
    }

    if detail.addresses.is_empty() {
        let _ = writeln!(out, "\nno address candidates");
        return out;
    }
    let _ = writeln!(out, "\naddresses:");
    for candidate in &detail.addresses {
        let _ = writeln!(out, "  [{}] {} ({})", candidate.id, candidate.address, candidate.score_percent());
        for group in candidate.contact_info.groups() {
            let _ = writeln!(out, "      {}:", group.kind.title());
            for resident in group.residents {
                let _ = writeln!(
                    out,
                    "        {}  {}  {}",
                    resident.name, resident.phone_number, resident.email_address
                );
            }
        }
    }
    out
}

pub fn grantees(response: &GranteesResponse) -> String {
    let mut out = String::new();
    if !response.message.is_empty() {
        let _ = writeln!(out, "{}", response.message);
    }
    for grantee in &response.grantees {
        let recorded = grantee.recorded_at.as_deref().unwrap_or("-");
        let _ = writeln!(out, "{}  {}  {}", grantee.name, grantee.address, recorded);
    }
    out
}

pub fn operators(rows: &[&OperatorAccount]) -> String {
    let mut out = String::new();
    for op in rows {
        let _ = writeln!(
            out,
            "{:>6}  {:<24}  {:<28}  {:<16}  {:<13}  {}",
            op.id,
            truncate(&op.full_name, 24),
            truncate(&op.email, 28),
            op.phone_label(),
            op.permission_label(),
            op.status_label(),
        );
    }
    let _ = writeln!(out, "{} operator(s)", rows.len());
    out
}

pub fn sub_categories(rows: &[CategorySetting]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(out, "{:>6}  {:<32}  {}", row.id, row.sub_category, row.category);
    }
    out
}
