//! Static ship catalog: ships, component categories and facilities.
//!
//! This module is organized into focused submodules:
//!
//! - [`types`] - Catalog entry types and effective-quantity helpers
//! - `lenient` - Forgiving scalar decoders used by the entry types
//!
//! The catalog is loaded once and treated as read-only afterwards. Component
//! categories keep the order in which the document declares them, which is the
//! order selectors and aggregates are reported in.
//!
//! # Example
//!
//! ```no_run
//! use shipwright_lib::catalog::Catalog;
//!
//! let catalog = Catalog::from_path(std::path::Path::new("ship_data.json")).unwrap();
//! let ship = catalog.default_ship();
//! println!("{} has {} categories", ship.name, catalog.categories().len());
//! ```

mod lenient;
pub mod types;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::error::{Error, Result};
use crate::selection::PartRef;

pub use types::{
    category_display_name, ComponentCategory, Facility, Part, Ship, Tier, UNKNOWN_MATERIAL,
};

use types::OrderedCategories;

#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(rename = "ShipStats", default)]
    ships: Vec<Ship>,
    #[serde(rename = "ComponentDefinitions", default)]
    components: OrderedCategories,
    #[serde(rename = "FacilityDefinitions", default)]
    facilities: Option<Vec<Facility>>,
}

/// Read-only catalog of ships, component categories and facilities.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    ships: Vec<Ship>,
    categories: Vec<ComponentCategory>,
    facilities: Vec<Facility>,
    source: Option<PathBuf>,
}

impl Catalog {
    /// Build a catalog from already-decoded parts. The ship list must not be empty.
    pub fn new(
        ships: Vec<Ship>,
        categories: Vec<ComponentCategory>,
        facilities: Vec<Facility>,
    ) -> Result<Self> {
        if ships.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        Ok(Self {
            ships,
            categories,
            facilities,
            source: None,
        })
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        info!(
            ships = catalog.ships.len(),
            categories = catalog.categories.len(),
            facilities = catalog.facilities.len(),
            "loaded ship catalog from {}",
            path.display()
        );
        Ok(catalog)
    }

    /// Load a catalog from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    /// Load a catalog from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Build a catalog from an already-parsed JSON document.
    pub fn from_value(value: Value) -> Result<Self> {
        let Some(object) = value.as_object() else {
            return Err(Error::CatalogParse {
                message: "top-level document must be an object".to_string(),
            });
        };
        if !object.get("ShipStats").is_some_and(Value::is_array) {
            return Err(Error::CatalogParse {
                message: "ShipStats must be an array of ships".to_string(),
            });
        }

        let document: CatalogDocument =
            serde_json::from_value(value).map_err(|err| Error::CatalogParse {
                message: err.to_string(),
            })?;

        Self::new(
            document.ships,
            document.components.0,
            document.facilities.unwrap_or_default(),
        )
    }

    /// All ships in catalog order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Get a ship by its exact id.
    pub fn ship(&self, id: &str) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.id == id)
    }

    /// The first ship in the catalog, used whenever no ship is chosen.
    pub fn default_ship(&self) -> &Ship {
        self.ships.first().expect("catalog validated non-empty ships")
    }

    /// Ship ids in catalog order.
    pub fn ship_ids(&self) -> Vec<String> {
        self.ships.iter().map(|ship| ship.id.clone()).collect()
    }

    /// Ship ids closest to `name`, best match first.
    ///
    /// Ranked by Jaro-Winkler similarity on lowercase ids; at most `limit`
    /// ids scoring at least 0.7 are returned.
    pub fn fuzzy_ship_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .ships
            .iter()
            .map(|ship| {
                (
                    strsim::jaro_winkler(&needle, &ship.id.to_lowercase()),
                    ship.id.as_str(),
                )
            })
            .filter(|(score, _)| *score >= 0.7)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, id)| id.to_string())
            .collect()
    }

    /// Component categories in declaration order.
    pub fn categories(&self) -> &[ComponentCategory] {
        &self.categories
    }

    /// Get a component category by key.
    pub fn category(&self, key: &str) -> Option<&ComponentCategory> {
        self.categories.iter().find(|category| category.key == key)
    }

    /// All facilities in catalog order.
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    /// Get a facility by its catalog index.
    pub fn facility(&self, index: usize) -> Option<&Facility> {
        self.facilities.get(index)
    }

    /// Resolve a part reference to its category, tier and part.
    pub fn resolve_part(&self, part_ref: &PartRef) -> Option<(&ComponentCategory, &Tier, &Part)> {
        let category = self.category(&part_ref.category)?;
        let (tier, part) = category.part(part_ref.tier, part_ref.part)?;
        Some((category, tier, part))
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
