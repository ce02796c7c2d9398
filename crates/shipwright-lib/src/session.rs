//! Configurator session: a loaded catalog, the caller's selection state and
//! the derived selectors and aggregate.
//!
//! Every state change goes through the same recomputation path. A ship change
//! rebuilds the selectors (which may restore, auto-select or clear parts) and
//! then refreshes the aggregate exactly as a manual pick does.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::aggregate::{compute_totals, Aggregate};
use crate::catalog::Catalog;
use crate::eligibility::ShipRule;
use crate::error::{Error, Result};
use crate::selection::{PartRef, SelectionState};
use crate::selector::{component_selectors, facility_selectors, ComponentSelector, FacilitySelector};
use crate::source::{load_catalog, CatalogSource};

/// A single configurator session owned by the caller.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    state: SelectionState,
    components: Vec<ComponentSelector>,
    facilities: Vec<FacilitySelector>,
    aggregate: Aggregate,
}

impl Session {
    /// Load the catalog from `source` and build a session around it.
    pub fn initialize(source: &CatalogSource) -> Result<Self> {
        let catalog = load_catalog(source)?;
        Ok(Self::from_catalog(catalog))
    }

    /// Build a session from an already-loaded catalog, starting on its first ship.
    pub fn from_catalog(catalog: Catalog) -> Self {
        let mut state = SelectionState::default();
        state.set_ship(Some(catalog.default_ship().id.clone()));
        Self::with_state(catalog, state)
    }

    /// Build a session from an existing selection state.
    ///
    /// The state is normalised against the catalog the same way a ship change is.
    pub fn with_state(catalog: Catalog, state: SelectionState) -> Self {
        let mut state = state;
        let components = component_selectors(&catalog, &mut state);
        let facilities = facility_selectors(&catalog, &mut state);
        let aggregate = compute_totals(&catalog, &state);
        Self {
            catalog,
            state,
            components,
            facilities,
            aggregate,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Hand the selection state back to the caller.
    pub fn into_state(self) -> SelectionState {
        self.state
    }

    pub fn component_selectors(&self) -> &[ComponentSelector] {
        &self.components
    }

    pub fn facility_selectors(&self) -> &[FacilitySelector] {
        &self.facilities
    }

    pub fn aggregate(&self) -> &Aggregate {
        &self.aggregate
    }

    /// Switch to another ship, re-deriving every selector for it.
    pub fn select_ship(&mut self, ship_id: &str) -> Result<()> {
        if self.catalog.ship(ship_id).is_none() {
            return Err(Error::UnknownShip {
                id: ship_id.to_string(),
                suggestions: self.catalog.fuzzy_ship_matches(ship_id, 3),
            });
        }

        info!(ship = ship_id, "ship selected");
        self.state.set_ship(Some(ship_id.to_string()));
        self.rebuild_selectors();
        self.refresh();
        Ok(())
    }

    /// Choose a part for its category.
    pub fn select_component(&mut self, part_ref: PartRef) -> Result<()> {
        let category = self
            .catalog
            .category(&part_ref.category)
            .ok_or_else(|| Error::UnknownCategory {
                key: part_ref.category.clone(),
            })?;
        let (tier, part) =
            category
                .part(part_ref.tier, part_ref.part)
                .ok_or_else(|| Error::UnknownPart {
                    category: part_ref.category.clone(),
                    tier: part_ref.tier,
                    part: part_ref.part,
                })?;

        let rule = self.rule();
        if rule.hides_category(&category.key) || !rule.allows_part(&category.key, tier, part) {
            return Err(Error::IneligibleSelection {
                ship: self.ship_label(),
                what: format!("{} '{}'", category.display_name(), part.name),
            });
        }

        debug!(selection = %part_ref, "component selected");
        self.state.set_component(part_ref);
        self.refresh();
        Ok(())
    }

    /// Set a category back to "no selection".
    pub fn clear_component(&mut self, category: &str) -> Result<()> {
        if self.catalog.category(category).is_none() {
            return Err(Error::UnknownCategory {
                key: category.to_string(),
            });
        }

        debug!(category, "component cleared");
        self.state.clear_component(category);
        self.refresh();
        Ok(())
    }

    /// Put a facility in `slot`, or empty the slot with `None`.
    pub fn select_facility(&mut self, slot: usize, facility: Option<usize>) -> Result<()> {
        let slots = self.state.slot_count();
        if slot >= slots {
            return Err(Error::InvalidFacilitySlot { slot, slots });
        }

        if let Some(index) = facility {
            let entry = self
                .catalog
                .facility(index)
                .ok_or(Error::UnknownFacility { index })?;
            if !self.rule().allows_facility(entry) {
                return Err(Error::IneligibleSelection {
                    ship: self.ship_label(),
                    what: format!("facility '{}'", entry.label),
                });
            }
        }

        debug!(slot, ?facility, "facility slot updated");
        self.state.set_facility(slot, facility)?;
        self.refresh();
        Ok(())
    }

    fn rule(&self) -> ShipRule {
        ShipRule::for_ship(self.state.ship_id())
    }

    fn ship_label(&self) -> String {
        self.state
            .ship_id()
            .unwrap_or(self.catalog.default_ship().id.as_str())
            .to_string()
    }

    fn rebuild_selectors(&mut self) {
        self.components = component_selectors(&self.catalog, &mut self.state);
        self.facilities = facility_selectors(&self.catalog, &mut self.state);
    }

    /// Sync selector state and recompute the aggregate.
    fn refresh(&mut self) {
        for selector in &mut self.components {
            selector.selected = self.state.component(&selector.category).cloned();
        }
        for selector in &mut self.facilities {
            selector.selected = self.state.facility(selector.slot);
        }
        self.aggregate = compute_totals(&self.catalog, &self.state);
    }
}

/// Input accepted by [`load_ship_data`].
#[derive(Debug, Clone)]
pub enum LegacyInput {
    /// Catalog already loaded.
    Parsed(Catalog),
    /// Parsed JSON document; used when it carries `ShipStats`.
    Json(Value),
    /// Structured markup (XML). Not supported.
    Markup(String),
    /// Nothing supplied.
    Empty,
}

impl LegacyInput {
    /// Classify raw text: markup when it starts with `<`, otherwise JSON.
    pub fn from_text(text: &str) -> Result<Self> {
        let trimmed = text.trim_start();
        if trimmed.is_empty() {
            return Ok(LegacyInput::Empty);
        }
        if trimmed.starts_with('<') {
            return Ok(LegacyInput::Markup(text.to_string()));
        }
        Ok(LegacyInput::Json(serde_json::from_str(trimmed)?))
    }
}

/// Legacy entry point that accepts whatever older callers pass around.
///
/// A loaded catalog or a JSON document with `ShipStats` is used directly.
/// Markup is not parsed: a warning is logged and the catalog is loaded from
/// `fallback` instead, as it is when nothing usable is supplied.
pub fn load_ship_data(input: LegacyInput, fallback: &CatalogSource) -> Result<Session> {
    match input {
        LegacyInput::Parsed(catalog) => Ok(Session::from_catalog(catalog)),
        LegacyInput::Json(value) if value.get("ShipStats").is_some() => {
            Ok(Session::from_catalog(Catalog::from_value(value)?))
        }
        LegacyInput::Markup(_) => {
            warn!(
                "received structured markup instead of parsed ship data; loading catalog from {}",
                fallback
            );
            Session::initialize(fallback)
        }
        LegacyInput::Json(_) | LegacyInput::Empty => {
            debug!("no ship data supplied; loading catalog from {}", fallback);
            Session::initialize(fallback)
        }
    }
}
