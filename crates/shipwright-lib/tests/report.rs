mod common;

use shipwright_lib::report::LOAD_FAILURE_MESSAGE;
use shipwright_lib::{compute_totals, ResultsTable, SelectionState, Session, TableRenderMode, TableRow};

use common::fixture_catalog;

fn entry<'a>(table: &'a ResultsTable, label: &str) -> Option<&'a str> {
    table.rows.iter().find_map(|row| match row {
        TableRow::Entry { label: l, value } if l == label => Some(value.as_str()),
        _ => None,
    })
}

#[test]
fn empty_selection_renders_none_selected() {
    let catalog = fixture_catalog();
    let aggregate = compute_totals(&catalog, &SelectionState::default());
    let table = ResultsTable::from_aggregate(&aggregate);

    assert_eq!(entry(&table, "Ship"), Some("Raft (Speed: 2, HP: 50)"));
    assert_eq!(entry(&table, "Required Sailing Level"), Some("1"));
    assert_eq!(entry(&table, "Required Construction Level"), Some("1"));
    assert_eq!(entry(&table, "Facility slot 4"), Some("None"));
    assert_eq!(entry(&table, "Materials"), Some("None selected"));

    let separators: Vec<&str> = table
        .rows
        .iter()
        .filter_map(|row| match row {
            TableRow::Separator { title } => Some(title.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        separators,
        vec!["Selected Components", "Selected Facilities", "Total Materials Required"]
    );
}

#[test]
fn selected_rows_show_tier_part_amount_and_material() {
    let mut session = Session::from_catalog(fixture_catalog());
    session.select_ship("Sloop").expect("sloop exists");
    session.select_facility(0, Some(2)).expect("cannon deck");

    let table = ResultsTable::from_aggregate(session.aggregate());
    assert_eq!(entry(&table, "Ship"), Some("Sloop (Speed: 6.5, HP: 300)"));
    assert_eq!(entry(&table, "Hull"), Some("Regular: Pine Hull — 60 Pine Plank"));
    assert_eq!(entry(&table, "Keel"), Some("Large: Mahogany Keel — 70 Mahogany Log"));
    assert_eq!(entry(&table, "Facility slot 1"), Some("Cannon Deck — 100 Iron Bar"));
    assert_eq!(entry(&table, "Iron Bar"), Some("100"));
    assert_eq!(entry(&table, "Materials"), None);
}

#[test]
fn plain_and_rich_renderings_contain_every_row() {
    let session = Session::from_catalog(fixture_catalog());
    let table = ResultsTable::from_aggregate(session.aggregate());

    let plain = table.render(TableRenderMode::PlainText);
    assert!(plain.contains("== Selected Components =="));
    assert!(plain.contains("Pine Plank"));
    assert!(plain.contains("Facility slot 1"));

    let rich = table.render(TableRenderMode::RichText);
    assert!(rich.starts_with("| Item | Value |"));
    assert!(rich.contains("| **Total Materials Required** | |"));
    assert!(rich.contains("| Pine Plank | 70 |"));
}

#[test]
fn failure_table_has_only_the_message() {
    let table = ResultsTable::failure();
    assert_eq!(
        table.rows,
        vec![TableRow::Message {
            text: LOAD_FAILURE_MESSAGE.to_string()
        }]
    );
}
