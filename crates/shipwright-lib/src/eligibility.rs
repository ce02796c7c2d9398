//! Ship-dependent eligibility of parts, facilities and categories.
//!
//! Most ships may use every catalog entry. A few variants carry restrictions:
//!
//! - `Raft` may only use plank-based parts and facilities, and has no keel.
//! - `Skiff` may only fit regular keels.
//! - `Sloop` may only fit large keels.
//!
//! When no ship is chosen yet, everything is allowed.

use serde::Serialize;

use crate::catalog::{Facility, Part, Tier};

/// Category key for hull keels.
pub const KEEL_CATEGORY: &str = "KEEL_DATA";

/// Ship restricted to plank raw materials.
pub const PLANK_ONLY_SHIP: &str = "Raft";

/// Ship restricted to regular keels.
pub const REGULAR_KEEL_SHIP: &str = "Skiff";

/// Ship restricted to large keels.
pub const LARGE_KEEL_SHIP: &str = "Sloop";

const PLANK_KEYWORD: &str = "plank";

/// Tier grade a keel restriction applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TierKind {
    Regular,
    Large,
}

impl TierKind {
    /// Tier type label as written in the catalog.
    pub fn label(self) -> &'static str {
        match self {
            TierKind::Regular => "regular",
            TierKind::Large => "large",
        }
    }

    fn matches(self, tier: &Tier) -> bool {
        tier.kind.eq_ignore_ascii_case(self.label())
    }
}

/// Eligibility rule in force for a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "tier", rename_all = "snake_case")]
pub enum ShipRule {
    /// Every option is allowed.
    Unrestricted,
    /// Only plank raw materials; the keel category is hidden.
    PlankOnly,
    /// Keels are limited to a single tier grade.
    KeelTier(TierKind),
}

impl ShipRule {
    /// Resolve the rule for a ship id. `None` means no ship has been chosen.
    pub fn for_ship(ship_id: Option<&str>) -> Self {
        match ship_id {
            Some(PLANK_ONLY_SHIP) => ShipRule::PlankOnly,
            Some(REGULAR_KEEL_SHIP) => ShipRule::KeelTier(TierKind::Regular),
            Some(LARGE_KEEL_SHIP) => ShipRule::KeelTier(TierKind::Large),
            _ => ShipRule::Unrestricted,
        }
    }

    /// Whether `part` in `tier` of `category` may be selected.
    pub fn allows_part(self, category: &str, tier: &Tier, part: &Part) -> bool {
        match self {
            ShipRule::Unrestricted => true,
            ShipRule::PlankOnly => is_plank(part.raw_material()),
            ShipRule::KeelTier(kind) => category != KEEL_CATEGORY || kind.matches(tier),
        }
    }

    /// Whether `facility` may occupy a facility slot.
    pub fn allows_facility(self, facility: &Facility) -> bool {
        match self {
            ShipRule::PlankOnly => is_plank(facility.raw_material()),
            ShipRule::Unrestricted | ShipRule::KeelTier(_) => true,
        }
    }

    /// Whether the selector for `category` is removed entirely.
    pub fn hides_category(self, category: &str) -> bool {
        self == ShipRule::PlankOnly && category == KEEL_CATEGORY
    }
}

fn is_plank(material: &str) -> bool {
    material.to_lowercase().contains(PLANK_KEYWORD)
}

/// Whether a part may be selected on the given ship.
pub fn is_part_allowed(ship_id: Option<&str>, category: &str, tier: &Tier, part: &Part) -> bool {
    ShipRule::for_ship(ship_id).allows_part(category, tier, part)
}

/// Whether a facility may be selected on the given ship.
pub fn is_facility_allowed(ship_id: Option<&str>, facility: &Facility) -> bool {
    ShipRule::for_ship(ship_id).allows_facility(facility)
}

/// Whether the given ship hides a category's selector entirely.
pub fn is_category_hidden(ship_id: Option<&str>, category: &str) -> bool {
    ShipRule::for_ship(ship_id).hides_category(category)
}
