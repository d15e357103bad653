use super::*;
use contracts::Alert;

fn item(scanner_id: i64, sub_category: &str, id: i64) -> AlertObject {
    AlertObject {
        alert: Alert { id, scanner_id, sub_category: sub_category.to_owned(), ..Alert::default() },
        addresses: Vec::new(),
    }
}

#[test]
fn detail_href_is_scoped_to_scanner_and_sub_category() {
    assert_eq!(detail_href(&item(3, "Structure", 42)), "/dashboard/scanners/3/alert/Structure/42");
}

#[test]
fn detail_href_encodes_sub_category_segment() {
    assert_eq!(
        detail_href(&item(3, "car fire/brush", 7)),
        "/dashboard/scanners/3/alert/car%20fire%2Fbrush/7"
    );
}
