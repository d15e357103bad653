use super::*;

fn row(id: i64) -> CategorySetting {
    CategorySetting { id, sub_category: format!("k{id}"), category: "Fire Alerts".to_owned() }
}

#[test]
fn query_omits_blank_search() {
    let mut state = CategoryListState::default();
    state.search = "   ".to_owned();
    assert_eq!(state.query().search, None);
}

#[test]
fn query_trims_search() {
    let mut state = CategoryListState { category: AlertCategory::Fire, ..CategoryListState::default() };
    state.search = " smoke ".to_owned();
    let query = state.query();
    assert_eq!(query.search.as_deref(), Some("smoke"));
    assert_eq!(query.category, AlertCategory::Fire);
}

#[test]
fn sorted_listing_orders_by_id() {
    let mut state = CategoryListState::sorted();
    let (seq, _) = state.begin_fetch();
    assert!(state.finish_fetch(seq, vec![row(3), row(1), row(2)]));
    let ids: Vec<i64> = state.rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn unsorted_listing_keeps_backend_order() {
    let mut state = CategoryListState::default();
    let (seq, _) = state.begin_fetch();
    state.finish_fetch(seq, vec![row(3), row(1)]);
    assert_eq!(state.rows[0].id, 3);
}

#[test]
fn stale_rows_are_dropped() {
    let mut state = CategoryListState::default();
    let (old, _) = state.begin_fetch();
    let (new, _) = state.begin_fetch();
    assert!(state.finish_fetch(new, vec![row(1)]));
    assert!(!state.finish_fetch(old, vec![row(9)]));
    assert!(!state.fail_fetch(old));
    assert_eq!(state.rows, vec![row(1)]);
}
