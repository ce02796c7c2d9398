mod common;

use shipwright_lib::eligibility::KEEL_CATEGORY;
use shipwright_lib::selector::{eligible_component_options, eligible_facility_options};
use shipwright_lib::{
    component_selectors, facility_selectors, is_category_hidden, is_facility_allowed,
    is_part_allowed, SelectionState,
};

use common::fixture_catalog;

#[test]
fn every_listed_option_satisfies_the_ship_rule() {
    let catalog = fixture_catalog();

    for ship in catalog.ships() {
        let ship_id = Some(ship.id.as_str());
        for category in catalog.categories() {
            for option in eligible_component_options(ship_id, category) {
                let (_, tier, part) = catalog
                    .resolve_part(&option.part_ref)
                    .expect("option resolves");
                assert!(
                    is_part_allowed(ship_id, &category.key, tier, part),
                    "{} listed ineligible {}",
                    ship.id,
                    option.part_ref
                );
            }
        }
        for option in eligible_facility_options(&catalog, ship_id) {
            let facility = catalog.facility(option.index).expect("facility resolves");
            assert!(is_facility_allowed(ship_id, facility));
        }
    }
}

#[test]
fn raft_omits_keel_and_empties_non_plank_categories() {
    let catalog = fixture_catalog();
    let mut state = SelectionState::default();
    state.set_ship(Some("Raft".to_string()));

    let selectors = component_selectors(&catalog, &mut state);
    assert!(is_category_hidden(Some("Raft"), KEEL_CATEGORY));
    assert!(selectors.iter().all(|s| s.category != KEEL_CATEGORY));

    let keep = selectors
        .iter()
        .find(|s| s.category == "KEEP_DATA")
        .expect("keep selector present");
    assert!(keep.options.is_empty());
    assert!(keep.selected.is_none());

    let sail = selectors
        .iter()
        .find(|s| s.category == "SAIL_DATA")
        .expect("sail selector present");
    assert!(sail.options.is_empty());

    let hull = selectors
        .iter()
        .find(|s| s.category == "HULL_DATA")
        .expect("hull selector present");
    let labels: Vec<&str> = hull.options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Regular: Pine Hull (S:5 C:5)", "Large: Teak Hull (S:45 C:40)"]
    );
}

#[test]
fn skiff_and_sloop_see_one_keel_tier_each() {
    let catalog = fixture_catalog();
    let keel = catalog.category(KEEL_CATEGORY).expect("keel category");

    let skiff = eligible_component_options(Some("Skiff"), keel);
    assert_eq!(skiff.len(), 1);
    assert_eq!(skiff[0].label, "Regular: Oak Keel (S:15 C:15)");

    let sloop = eligible_component_options(Some("Sloop"), keel);
    assert_eq!(sloop.len(), 1);
    assert_eq!(sloop[0].label, "Large: Mahogany Keel (S:40 C:38)");

    let brigantine = eligible_component_options(Some("Brigantine"), keel);
    assert_eq!(brigantine.len(), 2);
}

#[test]
fn raft_facility_slots_offer_only_plank_facilities() {
    let catalog = fixture_catalog();
    let mut state = SelectionState::default();
    state.set_ship(Some("Raft".to_string()));

    let selectors = facility_selectors(&catalog, &mut state);
    assert_eq!(selectors.len(), 4);
    for selector in &selectors {
        let indices: Vec<usize> = selector.options.iter().map(|o| o.index).collect();
        assert_eq!(indices, vec![1, 3]);
        assert!(selector.selected.is_none());
    }
}
