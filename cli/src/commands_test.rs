use contracts::{AlertCategory, OperatorAccount, Permission};

use super::*;

fn filter() -> AlertFilterArgs {
    AlertFilterArgs { category: "all".to_owned(), limit: 10, ..AlertFilterArgs::default() }
}

fn operator(id: i64, name: &str, phone: &str, permission: Option<Permission>) -> OperatorAccount {
    OperatorAccount {
        id,
        full_name: name.to_owned(),
        phone_number: phone.to_owned(),
        email: format!("{}@example.test", name.to_lowercase()),
        permission,
        ..OperatorAccount::default()
    }
}

// =============================================================
// Alert filters
// =============================================================

#[test]
fn default_filter_builds_unconstrained_query() {
    let query = filter().to_query().unwrap();
    assert_eq!(query.category, AlertCategory::All);
    assert_eq!(query.stars.value(), 0);
    assert_eq!(query.selected_from, None);
    assert_eq!(query.page, 0);
    assert_eq!(query.limit, 10);
}

#[test]
fn filter_parses_category_key_dates_and_stars() {
    let args = AlertFilterArgs {
        category: "police".to_owned(),
        from: "2024-01-01".to_owned(),
        to: "2024-01-31".to_owned(),
        stars: 4,
        id: "12a".to_owned(),
        ..filter()
    };
    let query = args.to_query().unwrap();
    assert_eq!(query.category, AlertCategory::Police);
    assert_eq!(query.stars.value(), 4);
    assert_eq!(query.id_search, "12");
    assert!(query.selected_from.is_some());
}

#[test]
fn filter_rejects_bad_values() {
    assert!(matches!(AlertFilterArgs { stars: 6, ..filter() }.to_query(), Err(CliError::InvalidInput(_))));
    assert!(matches!(AlertFilterArgs { category: "weather".to_owned(), ..filter() }.to_query(), Err(CliError::InvalidInput(_))));
    assert!(matches!(AlertFilterArgs { from: "01/02/2024".to_owned(), ..filter() }.to_query(), Err(CliError::InvalidInput(_))));
    assert!(matches!(AlertFilterArgs { limit: 0, ..filter() }.to_query(), Err(CliError::InvalidInput(_))));
}

#[test]
fn filter_rejects_inverted_date_range() {
    let args = AlertFilterArgs { from: "2024-02-01".to_owned(), to: "2024-01-01".to_owned(), ..filter() };
    assert!(matches!(args.to_query(), Err(CliError::InvalidInput(_))));
}

#[test]
fn blank_sub_category_is_dropped() {
    let args = AlertFilterArgs { sub_category: Some("  ".to_owned()), ..filter() };
    assert_eq!(args.to_query().unwrap().sub_category, None);
}

// =============================================================
// Operators
// =============================================================

#[test]
fn new_operator_is_validated() {
    let args = NewOperatorArgs {
        full_name: " Jane Roe ".to_owned(),
        phone: "+1 555-0100".to_owned(),
        email: "jane@example.test".to_owned(),
        pin: "1234".to_owned(),
        permission: Permission::Sales,
    };
    let request = args.to_request().unwrap();
    assert_eq!(request.full_name, "Jane Roe");
    assert_eq!(request.permission, Permission::Sales);

    let bad_pin = NewOperatorArgs { pin: "12".to_owned(), ..args.clone() };
    assert!(matches!(bad_pin.to_request(), Err(CliError::InvalidInput(_))));
    let bad_email = NewOperatorArgs { email: "jane".to_owned(), ..args.clone() };
    assert!(matches!(bad_email.to_request(), Err(CliError::InvalidInput(_))));
    let bad_phone = NewOperatorArgs { phone: "call me".to_owned(), ..args };
    assert!(matches!(bad_phone.to_request(), Err(CliError::InvalidInput(_))));
}

#[test]
fn edit_keeps_unset_fields_and_omits_pin() {
    let current = operator(9, "Sam", "555-0101", Some(Permission::Manager));
    let args = EditOperatorArgs {
        id: 9,
        full_name: Some("Sam Smith".to_owned()),
        phone: None,
        email: None,
        pin: None,
        permission: None,
    };
    let update = args.to_update(&current).unwrap();
    assert_eq!(update.id, 9);
    assert_eq!(update.full_name, "Sam Smith");
    assert_eq!(update.phone_number, "555-0101");
    assert_eq!(update.security_pin, None);
    assert_eq!(update.permission, Permission::Manager);
}

#[test]
fn edit_requires_a_permission_from_somewhere() {
    let current = operator(2, "Lee", "555-0102", None);
    let args = EditOperatorArgs { id: 2, full_name: None, phone: None, email: None, pin: None, permission: None };
    assert!(matches!(args.to_update(&current), Err(CliError::InvalidInput(_))));

    let with_role = EditOperatorArgs { permission: Some(Permission::Admin), ..args };
    assert_eq!(with_role.to_update(&current).unwrap().permission, Permission::Admin);
}

#[test]
fn edit_validates_new_pin() {
    let current = operator(2, "Lee", "555-0102", Some(Permission::Sales));
    let args = EditOperatorArgs {
        id: 2,
        full_name: None,
        phone: None,
        email: None,
        pin: Some("99".to_owned()),
        permission: None,
    };
    assert!(matches!(args.to_update(&current), Err(CliError::InvalidInput(_))));
}

#[test]
fn filter_operators_matches_name_or_phone_and_role() {
    let ops = vec![
        operator(1, "Alice", "555-1000", Some(Permission::Admin)),
        operator(2, "Bob", "555-2000", Some(Permission::Sales)),
        operator(3, "Carol", "555-2001", None),
    ];
    let ids = |v: Vec<&OperatorAccount>| v.iter().map(|o| o.id).collect::<Vec<_>>();

    assert_eq!(ids(filter_operators(&ops, "", None)), vec![1, 2, 3]);
    assert_eq!(ids(filter_operators(&ops, "ALI", None)), vec![1]);
    assert_eq!(ids(filter_operators(&ops, "2000", None)), vec![2]);
    assert_eq!(ids(filter_operators(&ops, "555-200", Some(Permission::Sales))), vec![2]);
}

#[test]
fn login_request_tags_cli_device() {
    let request = login_request("ops@example.test", "secret-pass").unwrap();
    assert_eq!(request.device, CLI_DEVICE);
    assert_eq!(request.browser, CLI_BROWSER);
    assert_eq!(request.os, std::env::consts::OS);
    assert!(login_request("ops", "x").is_err());
    assert!(login_request("ops@example.test", "").is_err());
}
