//! Selector construction for the active ship.
//!
//! Building selectors also normalises the selection state: a previous choice
//! is kept when it is still eligible, otherwise the first eligible option in
//! catalog order (tier order, then part order) is chosen, otherwise the
//! category is cleared. Facility slots never auto-select; a slot keeps its
//! previous facility only while that facility is still eligible.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, ComponentCategory};
use crate::eligibility::ShipRule;
use crate::selection::{PartRef, SelectionState};

/// One selectable part for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentOption {
    pub part_ref: PartRef,
    pub label: String,
    pub raw_material: String,
    pub sailing: u32,
    pub con: u32,
}

/// Eligible options for one component category and the resulting selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSelector {
    pub category: String,
    pub display_name: String,
    pub options: Vec<ComponentOption>,
    pub selected: Option<PartRef>,
}

impl ComponentSelector {
    /// The currently selected option, if any.
    pub fn selected_option(&self) -> Option<&ComponentOption> {
        let selected = self.selected.as_ref()?;
        self.options.iter().find(|o| &o.part_ref == selected)
    }
}

/// One selectable facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacilityOption {
    pub index: usize,
    pub label: String,
    pub raw_material: String,
    pub sailing: u32,
    pub con: u32,
}

/// Eligible facilities for one slot and the resulting selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacilitySelector {
    pub slot: usize,
    pub label: String,
    pub options: Vec<FacilityOption>,
    pub selected: Option<usize>,
}

/// Eligible options of `category` for a ship, in tier then part order.
pub fn eligible_component_options(
    ship_id: Option<&str>,
    category: &ComponentCategory,
) -> Vec<ComponentOption> {
    let rule = ShipRule::for_ship(ship_id);
    let mut options = Vec::new();

    for (tier_index, tier) in category.tiers.iter().enumerate() {
        for (part_index, part) in tier.parts.iter().enumerate() {
            if !rule.allows_part(&category.key, tier, part) {
                continue;
            }
            options.push(ComponentOption {
                part_ref: PartRef::new(category.key.clone(), tier_index, part_index),
                label: format!(
                    "{}: {} (S:{} C:{})",
                    tier.kind,
                    part.name,
                    part.required_sailing(),
                    part.required_con()
                ),
                raw_material: part.raw_material().to_string(),
                sailing: part.required_sailing(),
                con: part.required_con(),
            });
        }
    }

    options
}

/// Eligible facilities for a ship, in catalog order.
pub fn eligible_facility_options(catalog: &Catalog, ship_id: Option<&str>) -> Vec<FacilityOption> {
    let rule = ShipRule::for_ship(ship_id);
    catalog
        .facilities()
        .iter()
        .enumerate()
        .filter(|(_, facility)| rule.allows_facility(facility))
        .map(|(index, facility)| FacilityOption {
            index,
            label: format!(
                "{} (S:{}, C:{})",
                facility.label, facility.level_sailing, facility.level_con
            ),
            raw_material: facility.raw_material().to_string(),
            sailing: facility.level_sailing,
            con: facility.level_con,
        })
        .collect()
}

/// Build one selector per visible category and normalise component selections.
///
/// Hidden categories are omitted and their selection cleared.
pub fn component_selectors(
    catalog: &Catalog,
    state: &mut SelectionState,
) -> Vec<ComponentSelector> {
    let ship_id = state.ship_id().map(str::to_string);
    let rule = ShipRule::for_ship(ship_id.as_deref());
    let mut selectors = Vec::with_capacity(catalog.categories().len());

    for category in catalog.categories() {
        if rule.hides_category(&category.key) {
            if state.component(&category.key).is_some() {
                debug!(category = %category.key, "clearing selection for hidden category");
            }
            state.clear_component(&category.key);
            continue;
        }

        let options = eligible_component_options(ship_id.as_deref(), category);
        let previous = state.component(&category.key).cloned();
        let restored = previous.filter(|p| options.iter().any(|o| &o.part_ref == p));

        let selected = match restored {
            Some(part_ref) => {
                debug!(selection = %part_ref, "restored component selection");
                Some(part_ref)
            }
            None => {
                let first = options.first().map(|o| o.part_ref.clone());
                match &first {
                    Some(part_ref) => debug!(selection = %part_ref, "auto-selected first eligible part"),
                    None => debug!(category = %category.key, "no eligible parts; category cleared"),
                }
                first
            }
        };

        match &selected {
            Some(part_ref) => state.set_component(part_ref.clone()),
            None => state.clear_component(&category.key),
        }

        selectors.push(ComponentSelector {
            category: category.key.clone(),
            display_name: category.display_name().to_string(),
            options,
            selected,
        });
    }

    selectors
}

/// Build one selector per facility slot and normalise facility selections.
///
/// Every slot offers every eligible facility, so the same facility may occupy
/// more than one slot.
pub fn facility_selectors(catalog: &Catalog, state: &mut SelectionState) -> Vec<FacilitySelector> {
    let options = eligible_facility_options(catalog, state.ship_id());
    let mut selectors = Vec::with_capacity(state.slot_count());

    for (slot, chosen) in state.facilities_mut().iter_mut().enumerate() {
        let current = *chosen;
        let selected = current.filter(|index| options.iter().any(|o| o.index == *index));
        if selected.is_none() && current.is_some() {
            debug!(slot, "dropping facility no longer eligible for this ship");
        }
        *chosen = selected;

        selectors.push(FacilitySelector {
            slot,
            label: format!("Facility Hotspot {}", slot + 1),
            options: options.clone(),
            selected,
        });
    }

    selectors
}
