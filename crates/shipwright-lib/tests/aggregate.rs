mod common;

use shipwright_lib::{compute_totals, PartRef, SelectionState};

use common::fixture_catalog;

#[test]
fn empty_state_falls_back_to_first_ship() {
    let catalog = fixture_catalog();
    let state = SelectionState::default();

    let aggregate = compute_totals(&catalog, &state);
    assert_eq!(aggregate.ship.id, "Raft");
    assert_eq!(aggregate.max_sailing, 1);
    assert_eq!(aggregate.max_con, 1);
    assert!(aggregate.components.is_empty());
    assert_eq!(aggregate.facilities, vec![None, None, None, None]);
    assert!(aggregate.materials.is_empty());
}

#[test]
fn unknown_ship_id_falls_back_to_first_ship() {
    let catalog = fixture_catalog();
    let mut state = SelectionState::default();
    state.set_ship(Some("Galleon".to_string()));

    let aggregate = compute_totals(&catalog, &state);
    assert_eq!(aggregate.ship.id, "Raft");
}

#[test]
fn totals_are_quantity_times_parts() {
    let catalog = fixture_catalog();
    let mut state = SelectionState::default();
    state.set_ship(Some("Brigantine".to_string()));
    state.set_component(PartRef::new("HULL_DATA", 1, 1));
    state.set_component(PartRef::new("SAIL_DATA", 0, 1));
    state.set_facility(0, Some(2)).expect("slot 0");

    let aggregate = compute_totals(&catalog, &state);
    for detail in &aggregate.components {
        let selection = state.component(&detail.category).expect("selected");
        let (_, tier, part) = catalog.resolve_part(selection).expect("resolves");
        assert_eq!(
            detail.total_amount,
            part.qty_per_part_in(tier) * part.total_parts_in(tier)
        );
    }
    assert_eq!(aggregate.components[0].total_amount, 75);
    assert_eq!(aggregate.components[1].total_amount, 72);
    let cannon = aggregate.facilities[0].as_ref().expect("slot 0 filled");
    assert_eq!(cannon.total_amount, 100);
}

#[test]
fn shared_materials_are_summed_across_parts_and_facilities() {
    let catalog = fixture_catalog();
    let mut state = SelectionState::default();
    state.set_ship(Some("Brigantine".to_string()));
    // Keep: 15 x 2 Oak Log; galley: 15 x 2 Oak Log.
    state.set_component(PartRef::new("KEEP_DATA", 0, 0));
    state.set_facility(1, Some(0)).expect("slot 1");

    let aggregate = compute_totals(&catalog, &state);
    assert_eq!(aggregate.materials.get("Oak Log"), Some(60));
    assert_eq!(aggregate.materials.len(), 1);
}

#[test]
fn duplicate_facilities_across_slots_each_count() {
    let catalog = fixture_catalog();
    let mut state = SelectionState::default();
    state.set_facility(0, Some(1)).expect("slot 0");
    state.set_facility(3, Some(1)).expect("slot 3");

    let aggregate = compute_totals(&catalog, &state);
    assert_eq!(aggregate.materials.get("Pine Plank"), Some(60));
    assert!(aggregate.facilities[1].is_none());
}

#[test]
fn max_levels_cover_ship_parts_and_facilities() {
    let catalog = fixture_catalog();
    let mut state = SelectionState::default();
    state.set_ship(Some("Skiff".to_string()));
    state.set_component(PartRef::new("HULL_DATA", 0, 0));

    let aggregate = compute_totals(&catalog, &state);
    assert_eq!(aggregate.max_sailing, 10);
    assert_eq!(aggregate.max_con, 8);

    // Teak Hull needs sailing 45 on a ship with base 10.
    state.set_component(PartRef::new("HULL_DATA", 1, 0));
    state.set_facility(2, Some(2)).expect("slot 2");
    let aggregate = compute_totals(&catalog, &state);
    assert_eq!(aggregate.max_sailing, 45);
    assert_eq!(aggregate.max_con, 40);
}

#[test]
fn stale_and_ineligible_selections_are_ignored() {
    let catalog = fixture_catalog();
    let mut state = SelectionState::default();
    state.set_ship(Some("Raft".to_string()));
    state.set_component(PartRef::new("HULL_DATA", 7, 0));
    state.set_component(PartRef::new("KEEL_DATA", 0, 0));
    state.set_component(PartRef::new("HELM_DATA", 0, 1));
    state.set_facility(0, Some(99)).expect("slot 0");
    state.set_facility(1, Some(0)).expect("slot 1");

    let aggregate = compute_totals(&catalog, &state);
    assert!(aggregate.components.is_empty());
    assert_eq!(aggregate.facilities, vec![None, None, None, None]);
    assert!(aggregate.materials.is_empty());
    assert_eq!(aggregate.max_sailing, 1);
}

#[test]
fn aggregation_is_deterministic() {
    let catalog = fixture_catalog();
    let mut state = SelectionState::default();
    state.set_ship(Some("Sloop".to_string()));
    state.set_component(PartRef::new("SAIL_DATA", 0, 0));
    state.set_component(PartRef::new("HULL_DATA", 0, 1));
    state.set_facility(2, Some(4)).expect("slot 2");

    let first = compute_totals(&catalog, &state);
    let second = compute_totals(&catalog, &state);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );

    let order: Vec<&str> = first.components.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(order, vec!["HULL_DATA", "SAIL_DATA"]);
}
