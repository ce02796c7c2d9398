//! Aggregation of a selection into material totals and required levels.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, Ship};
use crate::eligibility::ShipRule;
use crate::selection::SelectionState;

/// Detail for the part chosen in one component category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentDetail {
    pub category: String,
    pub display_name: String,
    pub tier: String,
    pub name: String,
    pub raw_material: String,
    pub total_amount: u64,
    pub sailing: u32,
    pub con: u32,
}

/// Detail for the facility chosen in one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacilityDetail {
    pub index: usize,
    pub name: String,
    pub label: String,
    pub raw_material: String,
    pub total_amount: u64,
    pub sailing: u32,
    pub con: u32,
}

/// Summed amount of one raw material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialTotal {
    pub material: String,
    pub amount: u64,
}

/// Raw material totals in order of first contribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MaterialTotals(Vec<MaterialTotal>);

impl MaterialTotals {
    /// Add `amount` to the running total for `material`.
    pub fn add(&mut self, material: &str, amount: u64) {
        match self.0.iter_mut().find(|total| total.material == material) {
            Some(total) => total.amount = total.amount.saturating_add(amount),
            None => self.0.push(MaterialTotal {
                material: material.to_string(),
                amount,
            }),
        }
    }

    pub fn get(&self, material: &str) -> Option<u64> {
        self.0
            .iter()
            .find(|total| total.material == material)
            .map(|total| total.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialTotal> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Computed summary of a selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate {
    pub ship: Ship,
    pub max_sailing: u32,
    pub max_con: u32,
    pub components: Vec<ComponentDetail>,
    pub facilities: Vec<Option<FacilityDetail>>,
    pub materials: MaterialTotals,
}

/// Sum material costs and required levels for the current selection.
///
/// The ship falls back to the catalog's first entry when none is chosen or the
/// id is unknown. Selections that no longer resolve, or that the ship's
/// eligibility rule rejects, are treated as empty rather than as errors.
pub fn compute_totals(catalog: &Catalog, state: &SelectionState) -> Aggregate {
    let ship = state
        .ship_id()
        .and_then(|id| catalog.ship(id))
        .unwrap_or_else(|| catalog.default_ship());
    let rule = ShipRule::for_ship(state.ship_id());

    let mut max_sailing = ship.level_sailing;
    let mut max_con = ship.level_con;
    let mut materials = MaterialTotals::default();

    let mut components = Vec::new();
    for category in catalog.categories() {
        if rule.hides_category(&category.key) {
            continue;
        }
        let Some(part_ref) = state.component(&category.key) else {
            continue;
        };
        let Some((tier, part)) = category.part(part_ref.tier, part_ref.part) else {
            debug!(selection = %part_ref, "selection no longer resolves; ignoring");
            continue;
        };
        if !rule.allows_part(&category.key, tier, part) {
            debug!(selection = %part_ref, "selection not eligible for ship; ignoring");
            continue;
        }

        let total_amount = part.total_amount_in(tier);
        let sailing = part.required_sailing();
        let con = part.required_con();
        max_sailing = max_sailing.max(sailing);
        max_con = max_con.max(con);
        materials.add(part.material(), total_amount);

        components.push(ComponentDetail {
            category: category.key.clone(),
            display_name: category.display_name().to_string(),
            tier: tier.kind.clone(),
            name: part.name.clone(),
            raw_material: part.material().to_string(),
            total_amount,
            sailing,
            con,
        });
    }

    let mut facilities = Vec::with_capacity(state.slot_count());
    for (slot, chosen) in state.facilities().iter().enumerate() {
        let detail = chosen.and_then(|index| {
            let Some(facility) = catalog.facility(index) else {
                debug!(slot, index, "facility index no longer resolves; slot treated as empty");
                return None;
            };
            if !rule.allows_facility(facility) {
                debug!(slot, index, "facility not eligible for ship; slot treated as empty");
                return None;
            }

            let total_amount = facility.total_amount();
            max_sailing = max_sailing.max(facility.level_sailing);
            max_con = max_con.max(facility.level_con);
            materials.add(facility.material(), total_amount);

            Some(FacilityDetail {
                index,
                name: facility.name.clone(),
                label: facility.label.clone(),
                raw_material: facility.material().to_string(),
                total_amount,
                sailing: facility.level_sailing,
                con: facility.level_con,
            })
        });
        facilities.push(detail);
    }

    Aggregate {
        ship: ship.clone(),
        max_sailing,
        max_con,
        components,
        facilities,
        materials,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_totals_accumulate_instead_of_overwriting() {
        let mut totals = MaterialTotals::default();
        totals.add("Wood", 30);
        totals.add("Iron", 5);
        totals.add("Wood", 30);
        assert_eq!(totals.get("Wood"), Some(60));
        assert_eq!(totals.get("Iron"), Some(5));
        let order: Vec<&str> = totals.iter().map(|t| t.material.as_str()).collect();
        assert_eq!(order, vec!["Wood", "Iron"]);
    }
}
