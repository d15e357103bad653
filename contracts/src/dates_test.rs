use super::*;
use time::Month;

#[test]
fn parse_date_input_accepts_iso_dates() {
    let date = parse_date_input("2024-03-09").unwrap().unwrap();
    assert_eq!(date.year(), 2024);
    assert_eq!(date.month(), Month::March);
    assert_eq!(date.day(), 9);
}

#[test]
fn parse_date_input_empty_clears_bound() {
    assert_eq!(parse_date_input("").unwrap(), None);
    assert_eq!(parse_date_input("   ").unwrap(), None);
}

#[test]
fn parse_date_input_rejects_other_formats() {
    assert_eq!(
        parse_date_input("03/09/2024"),
        Err(ContractError::InvalidDate("03/09/2024".to_owned()))
    );
}

#[test]
fn format_date_input_round_trips_and_blanks_none() {
    let date = parse_date_input("2023-12-31").unwrap();
    assert_eq!(format_date_input(date), "2023-12-31");
    assert_eq!(format_date_input(None), "");
}
