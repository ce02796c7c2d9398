//! Ships command handler for listing available ships.

use anyhow::{Context, Result};

use shipwright_lib::{load_catalog, CatalogSource};

use shipwright_cli::output::{format_ship_list, print_json, OutputFormat};
use shipwright_cli::terminal::ColorPalette;

/// Handle the ships subcommand.
///
/// Lists the ships in the catalog in declaration order.
pub fn handle_list_ships(
    source: &CatalogSource,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    let catalog = load_catalog(source)
        .with_context(|| format!("failed to load ship catalog from {}", source))?;

    match format {
        OutputFormat::Json => print_json(&catalog.ships())?,
        OutputFormat::Text | OutputFormat::Rich => print!("{}", format_ship_list(&catalog, palette)),
    }
    Ok(())
}
