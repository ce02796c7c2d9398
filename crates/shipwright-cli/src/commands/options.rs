//! Options command handler: eligible parts and facilities for one ship.

use anyhow::{Context, Result};
use clap::Args;

use shipwright_lib::{CatalogSource, Session};

use shipwright_cli::output::{format_options, print_json, OptionsReport, OutputFormat};
use shipwright_cli::terminal::ColorPalette;

#[derive(Args, Debug, Clone)]
pub struct OptionsArgs {
    /// Ship to list options for. Defaults to the first ship in the catalog.
    #[arg(long)]
    pub ship: Option<String>,
}

/// Handle the options subcommand.
///
/// Shows every selector as it is built for the ship, including the part
/// that would be auto-selected.
pub fn handle_options(
    source: &CatalogSource,
    args: &OptionsArgs,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    let mut session = Session::initialize(source)
        .with_context(|| format!("failed to load ship catalog from {}", source))?;
    if let Some(ship) = args.ship.as_deref() {
        session.select_ship(ship)?;
    }

    let ship = session
        .state()
        .ship_id()
        .unwrap_or(session.catalog().default_ship().id.as_str())
        .to_string();

    match format {
        OutputFormat::Json => print_json(&OptionsReport {
            ship: &ship,
            components: session.component_selectors(),
            facilities: session.facility_selectors(),
        })?,
        OutputFormat::Text | OutputFormat::Rich => print!(
            "{}",
            format_options(
                &ship,
                session.catalog(),
                session.component_selectors(),
                session.facility_selectors(),
                palette,
            )
        ),
    }
    Ok(())
}
