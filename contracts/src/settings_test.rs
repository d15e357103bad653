use super::*;
use serde_json::json;

#[test]
fn sub_category_query_sends_all_as_empty_category() {
    let query = SubCategoryQuery { category: AlertCategory::All, search: None };
    assert_eq!(serde_json::to_value(&query).unwrap(), json!({ "category": "" }));
}

#[test]
fn sub_category_query_includes_search_when_present() {
    let query = SubCategoryQuery { category: AlertCategory::Police, search: Some("pursuit".to_owned()) };
    assert_eq!(
        serde_json::to_value(&query).unwrap(),
        json!({ "category": "Police Dispatch", "search": "pursuit" })
    );
}

#[test]
fn sort_by_id_orders_ascending() {
    let mut rows = vec![
        CategorySetting { id: 3, sub_category: "c".to_owned(), category: String::new() },
        CategorySetting { id: 1, sub_category: "a".to_owned(), category: String::new() },
        CategorySetting { id: 2, sub_category: "b".to_owned(), category: String::new() },
    ];
    sort_by_id(&mut rows);
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn county_names_merges_states() {
    let states: Vec<UsState> = serde_json::from_value(json!([
        { "state_id": "NY", "state_name": "New York", "counties": ["Kings", "Queens"] },
        { "state_id": "NJ", "state_name": "New Jersey", "counties": ["Essex", "Kings"] }
    ]))
    .unwrap();
    assert_eq!(county_names(&states), vec!["Essex", "Kings", "Queens"]);
}
