use super::*;
use serde_json::json;

// =============================================================
// AlertCategory
// =============================================================

#[test]
fn all_category_serializes_to_empty_string() {
    assert_eq!(serde_json::to_value(AlertCategory::All).unwrap(), json!(""));
    assert_eq!(serde_json::to_value(AlertCategory::Fire).unwrap(), json!("Fire Alerts"));
}

#[test]
fn category_parses_labels_keys_and_sentinels() {
    assert_eq!("ALL".parse::<AlertCategory>().unwrap(), AlertCategory::All);
    assert_eq!("".parse::<AlertCategory>().unwrap(), AlertCategory::All);
    assert_eq!("police dispatch".parse::<AlertCategory>().unwrap(), AlertCategory::Police);
    assert_eq!("misc".parse::<AlertCategory>().unwrap(), AlertCategory::Misc);
    assert_eq!(
        "Traffic".parse::<AlertCategory>(),
        Err(ContractError::UnknownCategory("Traffic".to_owned()))
    );
}

#[test]
fn category_deserializes_from_wire_value() {
    let category: AlertCategory = serde_json::from_value(json!("Medical Emergencies")).unwrap();
    assert_eq!(category, AlertCategory::Medical);
    let all: AlertCategory = serde_json::from_value(json!("")).unwrap();
    assert_eq!(all, AlertCategory::All);
}

// =============================================================
// StarRating
// =============================================================

#[test]
fn star_rating_rejects_values_above_five() {
    assert!(StarRating::new(5).is_ok());
    assert_eq!(StarRating::new(6), Err(ContractError::InvalidRating(6)));
    assert!(serde_json::from_value::<StarRating>(json!(9)).is_err());
}

#[test]
fn star_rating_zero_is_unconstrained() {
    assert_eq!(StarRating::ANY.value(), 0);
    assert_eq!(StarRating::default(), StarRating::ANY);
}

#[test]
fn star_rating_renders_glyphs() {
    assert_eq!(StarRating::new(3).unwrap().stars(), "★★★☆☆");
    assert_eq!(StarRating::ANY.stars(), "☆☆☆☆☆");
}

// =============================================================
// AlertsQuery wire shape
// =============================================================

#[test]
fn alerts_query_serializes_full_filter_set() {
    let query = AlertsQuery {
        page: 2,
        limit: 10,
        scanner_id: Some(7),
        sub_category: None,
        head_search: "fire".to_owned(),
        desc_search: String::new(),
        id_search: "42".to_owned(),
        category: AlertCategory::All,
        county: "Kings".to_owned(),
        selected_from: crate::dates::parse_date_input("2024-01-05").unwrap(),
        selected_to: None,
        stars: StarRating::new(3).unwrap(),
    };

    assert_eq!(
        serde_json::to_value(&query).unwrap(),
        json!({
            "page": 2,
            "limit": 10,
            "scanner_id": 7,
            "headSearch": "fire",
            "decSearch": "",
            "idSearch": "42",
            "category": "",
            "county": "Kings",
            "selected_from": "2024-01-05",
            "selected_to": null,
            "stars": 3
        })
    );
}

#[test]
fn alerts_page_decodes_backend_response() {
    let page: AlertsPage = serde_json::from_value(json!({
        "alerts": [
            {
                "alert": {
                    "id": 1,
                    "headline": "Structure fire",
                    "description": "Engines on scene",
                    "scanner_id": 3,
                    "address": "12 Main St",
                    "dateTime": "2024-01-05T10:00:00Z",
                    "category": "Fire Alerts",
                    "sub_category": "structure",
                    "is_visited": 1,
                    "rating": 4,
                    "rating_title": "High",
                    "rating_criteria": "on scene > 20m"
                },
                "addresses": ["12 Main St"]
            }
        ],
        "pagination": { "total": 31 }
    }))
    .unwrap();

    assert_eq!(page.pagination.total, 31);
    let alert = &page.alerts[0].alert;
    assert_eq!(alert.date_time, "2024-01-05T10:00:00Z");
    assert_eq!(alert.rating.value(), 4);
    assert!(alert.visited());
    assert_eq!(alert.category, "Fire Alerts");
}

#[test]
fn alert_with_out_of_range_rating_fails_to_decode() {
    let result = serde_json::from_value::<Alert>(json!({ "id": 1, "rating": 8 }));
    assert!(result.is_err());
}

// =============================================================
// Detail / contact info
// =============================================================

fn resident(name: &str) -> ResidentInfo {
    ResidentInfo { name: name.to_owned(), ..ResidentInfo::default() }
}

#[test]
fn contact_groups_skip_empty_and_null_owner_entries() {
    let info = ContactInfo {
        owner_info: vec![None, None],
        current_info: vec![resident("Ada")],
        past_info: vec![],
    };
    let groups = info.groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].kind, ContactGroupKind::Current);
    assert_eq!(groups[0].residents[0].name, "Ada");
}

#[test]
fn contact_groups_follow_owner_current_past_order() {
    let info = ContactInfo {
        owner_info: vec![Some(resident("Olive")), None],
        current_info: vec![resident("Cass")],
        past_info: vec![resident("Pat"), resident("Quinn")],
    };
    let kinds: Vec<_> = info.groups().iter().map(|g| g.kind).collect();
    assert_eq!(kinds, vec![ContactGroupKind::Owner, ContactGroupKind::Current, ContactGroupKind::Past]);
    assert_eq!(info.groups()[0].residents.len(), 1);
}

#[test]
fn contact_info_with_no_records_is_empty() {
    assert!(ContactInfo::default().is_empty());
}

#[test]
fn alert_detail_decodes_null_owner_and_type_fields() {
    let detail: AlertDetail = serde_json::from_value(json!({
        "alert": { "id": 9, "headline": "Smoke" },
        "addresses": [{
            "id": 5,
            "alert_id": 9,
            "scanner_id": null,
            "address": "4 Elm Rd",
            "score": 0.875,
            "type": null,
            "dateTime": null,
            "contact_info": {
                "owner_info": [null, { "name": "Olive" }],
                "current_info": [],
                "past_info": []
            }
        }],
        "scanner": { "county_name": "Kings", "state_name": "NY", "scanner_title": "FDNY" },
        "audio": { "file_name": "a.mp3", "context": "raw", "cleared_context": null }
    }))
    .unwrap();

    let candidate = &detail.addresses[0];
    assert_eq!(candidate.score_percent(), "87.50 %");
    assert_eq!(candidate.contact_info.groups()[0].residents[0].name, "Olive");
    assert_eq!(detail.scanner.unwrap().label(), "Kings, NY (FDNY)");

    let audio = detail.audio.unwrap();
    assert_eq!(audio.transcript(), Some("raw"));
    assert_eq!(audio.url("https://cdn.test/"), Some("https://cdn.test/a.mp3".to_owned()));
}

#[test]
fn audio_prefers_cleared_transcript() {
    let audio = AudioClip {
        file_name: None,
        context: Some("Speaker A: silence".to_owned()),
        cleared_context: Some("clean".to_owned()),
    };
    assert_eq!(audio.transcript(), Some("clean"));
    assert_eq!(audio.url("https://cdn.test/"), None);
}

#[test]
fn unlock_request_omits_missing_address_id() {
    assert_eq!(serde_json::to_value(UnlockContactRequest::default()).unwrap(), json!({}));
    assert_eq!(
        serde_json::to_value(UnlockContactRequest { address_id: Some(5) }).unwrap(),
        json!({ "address_id": 5 })
    );
}
