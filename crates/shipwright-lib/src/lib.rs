//! Shipwright library entry points.
//!
//! This crate loads a static ship catalog, resolves which components and
//! facilities each ship may use, keeps selection state consistent with those
//! rules, and aggregates a selection into material totals and required skill
//! levels. Higher-level consumers (the CLI) should only depend on the
//! functions exported here instead of reimplementing behavior.

pub mod aggregate;
pub mod catalog;
pub mod eligibility;
pub mod error;
pub mod report;
pub mod selection;
pub mod selector;
pub mod session;
pub mod source;

pub use aggregate::{compute_totals, Aggregate, ComponentDetail, FacilityDetail, MaterialTotals};
pub use catalog::{category_display_name, Catalog, ComponentCategory, Facility, Part, Ship, Tier};
pub use eligibility::{is_category_hidden, is_facility_allowed, is_part_allowed, ShipRule};
pub use error::{Error, Result};
pub use report::{format_amount, ResultsTable, TableRenderMode, TableRow};
pub use selection::{PartRef, SelectionState, FACILITY_SLOTS};
pub use selector::{
    component_selectors, facility_selectors, ComponentOption, ComponentSelector, FacilityOption,
    FacilitySelector,
};
pub use session::{load_ship_data, LegacyInput, Session};
pub use source::{default_catalog_path, load_catalog, CatalogSource};
