//! Session-scoped selection state.
//!
//! The state is a plain value owned by the caller: the engine functions in
//! [`crate::selector`] and [`crate::aggregate`] read it (and the selector
//! builders normalise it), but nothing holds it globally.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of facility slots every ship offers.
pub const FACILITY_SLOTS: usize = 4;

/// Reference to a part: category key plus tier and part indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartRef {
    pub category: String,
    pub tier: usize,
    pub part: usize,
}

impl PartRef {
    pub fn new<C: Into<String>>(category: C, tier: usize, part: usize) -> Self {
        Self {
            category: category.into(),
            tier,
            part,
        }
    }
}

impl fmt::Display for PartRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.category, self.tier, self.part)
    }
}

/// Parses `CATEGORY:TIER:PART`, e.g. `HULL_DATA:0:2`.
impl FromStr for PartRef {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        let invalid = || Error::InvalidSelectionToken {
            token: token.to_string(),
        };

        let mut pieces = token.trim().rsplitn(3, ':');
        let part = pieces.next().ok_or_else(invalid)?;
        let tier = pieces.next().ok_or_else(invalid)?;
        let category = pieces.next().ok_or_else(invalid)?;
        if category.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            category: category.to_string(),
            tier: tier.parse().map_err(|_| invalid())?,
            part: part.parse().map_err(|_| invalid())?,
        })
    }
}

/// Current user choices: ship, one part per category, and facility slots.
///
/// Always holds exactly [`FACILITY_SLOTS`] facility slots, and every part is
/// filed under its own category key. Deserialization rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredSelection")]
pub struct SelectionState {
    ship_id: Option<String>,
    components: BTreeMap<String, PartRef>,
    facilities: Vec<Option<usize>>,
}

/// Unchecked wire shape of [`SelectionState`].
#[derive(Deserialize)]
struct StoredSelection {
    #[serde(default)]
    ship_id: Option<String>,
    #[serde(default)]
    components: BTreeMap<String, PartRef>,
    #[serde(default)]
    facilities: Option<Vec<Option<usize>>>,
}

impl TryFrom<StoredSelection> for SelectionState {
    type Error = Error;

    fn try_from(stored: StoredSelection) -> Result<Self> {
        let facilities = stored
            .facilities
            .unwrap_or_else(|| vec![None; FACILITY_SLOTS]);
        if facilities.len() != FACILITY_SLOTS {
            return Err(Error::InvalidSelectionState {
                message: format!(
                    "expected {} facility slots, found {}",
                    FACILITY_SLOTS,
                    facilities.len()
                ),
            });
        }

        if let Some((key, part_ref)) = stored
            .components
            .iter()
            .find(|(key, part_ref)| **key != part_ref.category)
        {
            return Err(Error::InvalidSelectionState {
                message: format!("part {} is filed under category {}", part_ref, key),
            });
        }

        Ok(Self {
            ship_id: stored.ship_id,
            components: stored.components,
            facilities,
        })
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            ship_id: None,
            components: BTreeMap::new(),
            facilities: vec![None; FACILITY_SLOTS],
        }
    }
}

impl SelectionState {
    pub fn ship_id(&self) -> Option<&str> {
        self.ship_id.as_deref()
    }

    pub fn set_ship(&mut self, ship_id: Option<String>) {
        self.ship_id = ship_id;
    }

    /// Selected part for a category, if any.
    pub fn component(&self, category: &str) -> Option<&PartRef> {
        self.components.get(category)
    }

    /// Record a part as the selection for its own category.
    pub fn set_component(&mut self, part_ref: PartRef) {
        self.components.insert(part_ref.category.clone(), part_ref);
    }

    pub fn clear_component(&mut self, category: &str) {
        self.components.remove(category);
    }

    /// All component selections keyed by category.
    pub fn components(&self) -> &BTreeMap<String, PartRef> {
        &self.components
    }

    /// Facility index chosen per slot, in slot order.
    pub fn facilities(&self) -> &[Option<usize>] {
        &self.facilities
    }

    pub fn facility(&self, slot: usize) -> Option<usize> {
        self.facilities.get(slot).copied().flatten()
    }

    pub fn slot_count(&self) -> usize {
        self.facilities.len()
    }

    /// Set or clear the facility in `slot`.
    pub fn set_facility(&mut self, slot: usize, facility: Option<usize>) -> Result<()> {
        let slots = self.facilities.len();
        let entry = self
            .facilities
            .get_mut(slot)
            .ok_or(Error::InvalidFacilitySlot { slot, slots })?;
        *entry = facility;
        Ok(())
    }

    /// Facility slots for in-place normalisation; the slot count cannot change.
    pub(crate) fn facilities_mut(&mut self) -> &mut [Option<usize>] {
        &mut self.facilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_ref_parses_and_displays() {
        let parsed: PartRef = "HULL_DATA:1:3".parse().expect("token parses");
        assert_eq!(parsed, PartRef::new("HULL_DATA", 1, 3));
        assert_eq!(parsed.to_string(), "HULL_DATA:1:3");
    }

    #[test]
    fn part_ref_rejects_malformed_tokens() {
        for token in ["", "HULL_DATA", "HULL_DATA:1", ":1:2", "HULL_DATA:x:2", "HULL_DATA:1:-2"] {
            let err = token.parse::<PartRef>().expect_err("token should be rejected");
            assert!(matches!(err, Error::InvalidSelectionToken { .. }), "{token}");
        }
    }

    #[test]
    fn default_state_has_four_empty_slots() {
        let state = SelectionState::default();
        assert_eq!(state.slot_count(), FACILITY_SLOTS);
        assert!(state.ship_id().is_none());
        assert!(state.components().is_empty());
        assert!(state.facilities().iter().all(Option::is_none));
    }

    #[test]
    fn stored_state_round_trips_through_json() {
        let mut state = SelectionState::default();
        state.set_ship(Some("Sloop".to_string()));
        state.set_component(PartRef::new("HULL_DATA", 1, 0));
        state.set_facility(2, Some(3)).expect("slot 2");

        let text = serde_json::to_string(&state).expect("serializes");
        let restored: SelectionState = serde_json::from_str(&text).expect("deserializes");
        assert_eq!(restored, state);
    }

    #[test]
    fn stored_state_must_have_four_slots() {
        for facilities in ["[3,3,3,3,3,3,3]", "[]"] {
            let text = format!(r#"{{"ship_id":"Sloop","components":{{}},"facilities":{facilities}}}"#);
            let err = serde_json::from_str::<SelectionState>(&text).expect_err("slot count is fixed");
            assert!(err.to_string().contains("expected 4 facility slots"), "{err}");
        }

        let state: SelectionState =
            serde_json::from_str(r#"{"ship_id":"Sloop"}"#).expect("missing fields default");
        assert_eq!(state.slot_count(), FACILITY_SLOTS);
    }

    #[test]
    fn stored_state_rejects_parts_under_foreign_keys() {
        let text = r#"{"components":{"HULL_DATA":{"category":"KEEL_DATA","tier":1,"part":0}},"facilities":[null,null,null,null]}"#;
        let err = serde_json::from_str::<SelectionState>(text).expect_err("key mismatch");
        assert!(err.to_string().contains("filed under category HULL_DATA"), "{err}");
    }

    #[test]
    fn set_facility_rejects_out_of_range_slots() {
        let mut state = SelectionState::default();
        state.set_facility(3, Some(2)).expect("slot 3 exists");
        assert_eq!(state.facility(3), Some(2));

        let err = state.set_facility(4, Some(0)).expect_err("slot 4 does not exist");
        assert!(matches!(err, Error::InvalidFacilitySlot { slot: 4, slots: 4 }));
    }

    #[test]
    fn components_are_keyed_by_their_category() {
        let mut state = SelectionState::default();
        state.set_component(PartRef::new("HULL_DATA", 0, 0));
        state.set_component(PartRef::new("HULL_DATA", 1, 2));
        assert_eq!(state.components().len(), 1);
        assert_eq!(state.component("HULL_DATA"), Some(&PartRef::new("HULL_DATA", 1, 2)));
        state.clear_component("HULL_DATA");
        assert!(state.component("HULL_DATA").is_none());
    }
}
