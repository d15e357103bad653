use super::*;

fn operator(id: i64, name: &str, phone: &str, permission: Option<Permission>) -> OperatorAccount {
    OperatorAccount {
        id,
        full_name: name.to_owned(),
        phone_number: phone.to_owned(),
        permission,
        ..OperatorAccount::default()
    }
}

fn roster() -> Vec<OperatorAccount> {
    vec![
        operator(1, "Dana Reyes", "+1 555-0100", Some(Permission::Admin)),
        operator(2, "Sam Ortiz", "555-0101", Some(Permission::Sales)),
        operator(3, "Alex Dana", "555-0199", None),
    ]
}

#[test]
fn defaults_show_everything_on_first_page() {
    let mut state = UserListState::default();
    state.set_users(roster());
    assert_eq!(state.rows_per_page, DEFAULT_ROWS_PER_PAGE);
    assert_eq!(state.visible().len(), 3);
}

#[test]
fn search_text_only_applies_on_apply() {
    let mut state = UserListState::default();
    state.set_users(roster());
    state.search = "dana".to_owned();
    assert_eq!(state.filtered().len(), 3);
    state.apply_search();
    let ids: Vec<i64> = state.filtered().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn search_matches_phone_numbers() {
    let mut state = UserListState::default();
    state.set_users(roster());
    state.search = "0101".to_owned();
    state.apply_search();
    assert_eq!(state.filtered()[0].id, 2);
}

#[test]
fn permission_filter_narrows_rows() {
    let mut state = UserListState::default();
    state.set_users(roster());
    state.permission = Some(Permission::Sales);
    state.apply_search();
    assert_eq!(state.filtered_total(), 1);
}

#[test]
fn apply_search_returns_to_first_page() {
    let mut state = UserListState::default();
    state.set_users((1..=30).map(|i| operator(i, "Op", "555", None)).collect());
    state.set_page(2);
    assert_eq!(state.page, 2);
    state.apply_search();
    assert_eq!(state.page, 0);
}

#[test]
fn pages_slice_filtered_rows() {
    let mut state = UserListState::default();
    state.set_users((1..=12).map(|i| operator(i, "Op", "555", None)).collect());
    state.set_rows_per_page(5);
    state.set_page(2);
    let ids: Vec<i64> = state.visible().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![11, 12]);
    assert_eq!(state.range_label(), "11–12 of 12");
    assert!(!state.has_next());
}

#[test]
fn page_is_clamped_when_rows_shrink() {
    let mut state = UserListState::default();
    state.set_users((1..=30).map(|i| operator(i, "Op", "555", None)).collect());
    state.set_page(2);
    state.set_users(roster());
    assert_eq!(state.page, 0);
}
