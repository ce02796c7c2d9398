//! Plan command handler: apply selections and report material totals.

use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use shipwright_lib::{CatalogSource, PartRef, ResultsTable, Session};

use shipwright_cli::output::{format_table, print_json, OutputFormat, PlanReport};
use shipwright_cli::terminal::ColorPalette;

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Ship to configure. Defaults to the first ship in the catalog.
    #[arg(long)]
    pub ship: Option<String>,

    /// Part to select, as CATEGORY:TIER:PART (zero-based indexes). Repeatable.
    #[arg(long = "component", value_name = "CATEGORY:TIER:PART")]
    pub components: Vec<PartRef>,

    /// Category to leave empty. Applied before --component. Repeatable.
    #[arg(long = "clear", value_name = "CATEGORY")]
    pub clears: Vec<String>,

    /// Facility for a slot, as SLOT=INDEX or SLOT=none (slots start at 1). Repeatable.
    #[arg(long = "facility", value_name = "SLOT=INDEX")]
    pub facilities: Vec<FacilityPick>,
}

/// One `--facility` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacilityPick {
    /// Zero-based slot.
    pub slot: usize,
    pub facility: Option<usize>,
}

impl FromStr for FacilityPick {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let (slot, facility) = value
            .split_once('=')
            .ok_or_else(|| format!("expected SLOT=INDEX, got '{value}'"))?;
        let slot: usize = slot
            .trim()
            .parse()
            .map_err(|_| format!("invalid facility slot '{}'", slot.trim()))?;
        if slot == 0 {
            return Err("facility slots start at 1".to_string());
        }

        let facility = facility.trim();
        let facility = if facility.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(
                facility
                    .parse()
                    .map_err(|_| format!("invalid facility index '{facility}'"))?,
            )
        };

        Ok(Self {
            slot: slot - 1,
            facility,
        })
    }
}

/// Handle the plan subcommand.
///
/// Selections are applied in order: ship, clears, components, facilities.
/// When the catalog cannot be loaded the failure table is printed before the
/// error is returned.
pub fn handle_plan(
    source: &CatalogSource,
    args: &PlanArgs,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    let mut session = match Session::initialize(source) {
        Ok(session) => session,
        Err(err) => {
            print_table(&ResultsTable::failure(), None, format, palette)?;
            return Err(err).with_context(|| format!("failed to load ship catalog from {}", source));
        }
    };

    apply_selections(&mut session, args)?;

    let table = ResultsTable::from_aggregate(session.aggregate());
    print_table(&table, Some(&session), format, palette)
}

fn apply_selections(session: &mut Session, args: &PlanArgs) -> Result<()> {
    if let Some(ship) = args.ship.as_deref() {
        session.select_ship(ship)?;
    }
    for category in &args.clears {
        session.clear_component(category)?;
    }
    for part_ref in &args.components {
        session
            .select_component(part_ref.clone())
            .with_context(|| format!("cannot select component {}", part_ref))?;
    }
    for pick in &args.facilities {
        debug!(slot = pick.slot, facility = ?pick.facility, "applying facility pick");
        session
            .select_facility(pick.slot, pick.facility)
            .with_context(|| format!("cannot set facility slot {}", pick.slot + 1))?;
    }
    Ok(())
}

fn print_table(
    table: &ResultsTable,
    session: Option<&Session>,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    match (format, session) {
        (OutputFormat::Json, Some(session)) => print_json(&PlanReport {
            selection: session.state(),
            totals: session.aggregate(),
        })?,
        (OutputFormat::Json, None) => print_json(table)?,
        (OutputFormat::Text | OutputFormat::Rich, _) => {
            print!("{}", format_table(table, format, palette))
        }
    }
    Ok(())
}
