//! Catalog entry types: ships, component categories, tiers, parts and facilities.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::lenient;

/// Raw material reported when a part or facility does not name one.
pub const UNKNOWN_MATERIAL: &str = "Unknown";

/// A ship variant and its base requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub speed: f64,
    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub hp: u32,
    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub level_sailing: u32,
    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub level_con: u32,
}

/// Quality/size grade within a component category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    #[serde(rename = "type", default, deserialize_with = "lenient::string_or_empty")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub qty_per_part: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub total_parts: u64,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A craftable option within a tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub raw_material: Option<String>,
    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub level_sailing: u32,
    #[serde(default, deserialize_with = "lenient::optional_u32")]
    pub level_con: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional_u64")]
    pub qty_per_part: Option<u64>,
    #[serde(default, deserialize_with = "lenient::optional_u64")]
    pub total_parts: Option<u64>,
}

impl Part {
    /// Sailing level needed to craft this part.
    pub fn required_sailing(&self) -> u32 {
        self.level_sailing
    }

    /// Construction level needed to craft this part; an absent or zero value
    /// falls back to the sailing level.
    pub fn required_con(&self) -> u32 {
        self.level_con
            .filter(|level| *level != 0)
            .unwrap_or(self.level_sailing)
    }

    /// Quantity per part, preferring the part override over the tier default.
    pub fn qty_per_part_in(&self, tier: &Tier) -> u64 {
        self.qty_per_part.unwrap_or(tier.qty_per_part)
    }

    /// Number of parts, preferring the part override over the tier default.
    pub fn total_parts_in(&self, tier: &Tier) -> u64 {
        self.total_parts.unwrap_or(tier.total_parts)
    }

    /// Total raw material needed for this part when built within `tier`.
    pub fn total_amount_in(&self, tier: &Tier) -> u64 {
        self.qty_per_part_in(tier)
            .saturating_mul(self.total_parts_in(tier))
    }

    /// Raw material name as written in the catalog, or an empty string.
    pub fn raw_material(&self) -> &str {
        self.raw_material.as_deref().unwrap_or("")
    }

    /// Raw material name used as the totals key.
    pub fn material(&self) -> &str {
        material_or_unknown(self.raw_material.as_deref())
    }
}

/// An equipment slot entry that is not organised into tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub raw_material: Option<String>,
    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub level_sailing: u32,
    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub level_con: u32,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub qty_per_part: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub total_parts: u64,
}

impl Facility {
    /// Total raw material needed to build this facility.
    pub fn total_amount(&self) -> u64 {
        self.qty_per_part.saturating_mul(self.total_parts)
    }

    /// Raw material name as written in the catalog, or an empty string.
    pub fn raw_material(&self) -> &str {
        self.raw_material.as_deref().unwrap_or("")
    }

    /// Raw material name used as the totals key.
    pub fn material(&self) -> &str {
        material_or_unknown(self.raw_material.as_deref())
    }
}

fn material_or_unknown(raw: Option<&str>) -> &str {
    match raw {
        Some(material) if !material.is_empty() => material,
        _ => UNKNOWN_MATERIAL,
    }
}

/// A named component slot (e.g. `HULL_DATA`) and its tiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentCategory {
    pub key: String,
    pub tiers: Vec<Tier>,
}

impl ComponentCategory {
    /// Human-readable name for this category.
    pub fn display_name(&self) -> &str {
        category_display_name(&self.key)
    }

    /// Look up a part by tier and part index.
    pub fn part(&self, tier: usize, part: usize) -> Option<(&Tier, &Part)> {
        let tier = self.tiers.get(tier)?;
        let part = tier.parts.get(part)?;
        Some((tier, part))
    }
}

/// Translate an internal category key to its display name. Unknown keys pass through.
pub fn category_display_name(key: &str) -> &str {
    match key {
        "HULL_DATA" => "Hull",
        "KEEL_DATA" => "Keel",
        "HELM_DATA" => "Helm",
        "KEEP_DATA" => "Keep",
        "SAIL_DATA" => "Sail",
        other => other,
    }
}

/// `ComponentDefinitions` decoded with the document's key order intact.
#[derive(Debug, Default)]
pub(crate) struct OrderedCategories(pub(crate) Vec<ComponentCategory>);

impl<'de> Deserialize<'de> for OrderedCategories {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CategoriesVisitor;

        impl<'de> Visitor<'de> for CategoriesVisitor {
            type Value = OrderedCategories;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of component category keys to tier lists")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(OrderedCategories::default())
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut categories = Vec::new();
                while let Some((key, tiers)) =
                    map.next_entry::<String, Option<Vec<Tier>>>()?
                {
                    categories.push(ComponentCategory {
                        key,
                        tiers: tiers.unwrap_or_default(),
                    });
                }
                Ok(OrderedCategories(categories))
            }
        }

        deserializer.deserialize_any(CategoriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(qty: u64, total: u64) -> Tier {
        Tier {
            kind: "Regular".to_string(),
            qty_per_part: qty,
            total_parts: total,
            parts: Vec::new(),
        }
    }

    fn part() -> Part {
        Part {
            name: "Oak Hull".to_string(),
            raw_material: Some("Oak Plank".to_string()),
            level_sailing: 20,
            level_con: None,
            qty_per_part: None,
            total_parts: None,
        }
    }

    #[test]
    fn construction_level_falls_back_to_sailing() {
        let mut p = part();
        assert_eq!(p.required_con(), 20);
        p.level_con = Some(0);
        assert_eq!(p.required_con(), 20);
        p.level_con = Some(35);
        assert_eq!(p.required_con(), 35);
    }

    #[test]
    fn part_overrides_take_precedence_over_tier_defaults() {
        let t = tier(10, 6);
        let mut p = part();
        assert_eq!(p.total_amount_in(&t), 60);
        p.qty_per_part = Some(4);
        assert_eq!(p.total_amount_in(&t), 24);
        p.total_parts = Some(0);
        assert_eq!(p.total_amount_in(&t), 0);
    }

    #[test]
    fn missing_material_reports_unknown() {
        let mut p = part();
        p.raw_material = None;
        assert_eq!(p.material(), UNKNOWN_MATERIAL);
        assert_eq!(p.raw_material(), "");
        p.raw_material = Some(String::new());
        assert_eq!(p.material(), UNKNOWN_MATERIAL);
    }

    #[test]
    fn display_names_translate_known_keys_only() {
        assert_eq!(category_display_name("HULL_DATA"), "Hull");
        assert_eq!(category_display_name("SAIL_DATA"), "Sail");
        assert_eq!(category_display_name("CANNON_DATA"), "CANNON_DATA");
    }
}
