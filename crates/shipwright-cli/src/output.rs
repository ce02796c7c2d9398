//! Output formatting for catalog listings, selector options and plan results.
//!
//! Text output is meant for a terminal, rich output is a Markdown table that
//! can be pasted into notes, and JSON output is the structured data itself.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use shipwright_lib::{
    Aggregate, Catalog, ComponentSelector, FacilitySelector, ResultsTable, SelectionState,
    TableRenderMode, TableRow,
};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain text, colored when the terminal supports it.
    Text,
    /// Markdown table.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

/// JSON document emitted by `plan --format json`.
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub selection: &'a SelectionState,
    pub totals: &'a Aggregate,
}

/// JSON document emitted by `options --format json`.
#[derive(Debug, Serialize)]
pub struct OptionsReport<'a> {
    pub ship: &'a str,
    pub components: &'a [ComponentSelector],
    pub facilities: &'a [FacilitySelector],
}

/// Render a results table for the terminal.
///
/// Without colors this is the library's plain-text layout; with colors the
/// section titles and messages are highlighted.
pub fn format_table(table: &ResultsTable, format: OutputFormat, palette: ColorPalette) -> String {
    match format {
        OutputFormat::Rich => table.render(TableRenderMode::RichText),
        OutputFormat::Text | OutputFormat::Json if palette.is_plain() => {
            table.render(TableRenderMode::PlainText)
        }
        OutputFormat::Text | OutputFormat::Json => format_table_colored(table, palette),
    }
}

fn format_table_colored(table: &ResultsTable, palette: ColorPalette) -> String {
    let width = table
        .rows
        .iter()
        .filter_map(|row| match row {
            TableRow::Entry { label, .. } => Some(label.chars().count()),
            _ => None,
        })
        .max()
        .unwrap_or(0);

    let mut buffer = String::new();
    for row in &table.rows {
        let _ = match row {
            TableRow::Entry { label, value } => writeln!(
                buffer,
                "{}{:<width$}{}  {}",
                palette.label,
                label,
                palette.reset,
                value,
                width = width
            ),
            TableRow::Separator { title } => {
                writeln!(buffer, "\n{}== {} =={}", palette.heading, title, palette.reset)
            }
            TableRow::Message { text } => {
                writeln!(buffer, "{}{}{}", palette.error, text, palette.reset)
            }
        };
    }
    buffer
}

/// Format the ship catalog as an aligned table.
pub fn format_ship_list(catalog: &Catalog, palette: ColorPalette) -> String {
    let ships = catalog.ships();
    let mut buffer = String::new();
    let _ = writeln!(buffer, "Available ships ({}):", ships.len());
    let _ = writeln!(
        buffer,
        "{}{:<16} {:>8} {:>8} {:>8} {:>8}{}",
        palette.label, "Ship", "Speed", "HP", "Sailing", "Con", palette.reset
    );
    for ship in ships {
        let _ = writeln!(
            buffer,
            "{:<16} {:>8} {:>8} {:>8} {:>8}",
            ship.id, ship.speed, ship.hp, ship.level_sailing, ship.level_con
        );
    }
    buffer
}

/// Format the eligible options for every selector of the current ship.
///
/// Selected options are marked with `*`; categories hidden for the ship are
/// listed without options.
pub fn format_options(
    ship: &str,
    catalog: &Catalog,
    components: &[ComponentSelector],
    facilities: &[FacilitySelector],
    palette: ColorPalette,
) -> String {
    let mut buffer = String::new();
    let _ = writeln!(buffer, "Options for {}:", ship);

    for category in catalog.categories() {
        let Some(selector) = components
            .iter()
            .find(|selector| selector.category == category.key)
        else {
            let _ = writeln!(
                buffer,
                "\n{}{} ({}){}  {}hidden for {}{}",
                palette.heading,
                category.display_name(),
                category.key,
                palette.reset,
                palette.muted,
                ship,
                palette.reset
            );
            continue;
        };

        let _ = writeln!(
            buffer,
            "\n{}{} ({}){}",
            palette.heading, selector.display_name, selector.category, palette.reset
        );
        if selector.options.is_empty() {
            let _ = writeln!(buffer, "  {}no eligible parts{}", palette.muted, palette.reset);
        }
        let selected = selector.selected_option();
        for option in &selector.options {
            let marker = if selected == Some(option) { "*" } else { " " };
            let _ = writeln!(
                buffer,
                "{}{} {:<14}{} {}",
                palette.selected,
                marker,
                option.part_ref.to_string(),
                palette.reset,
                option.label
            );
        }
    }

    let options = facilities
        .first()
        .map(|selector| selector.options.as_slice())
        .unwrap_or_default();
    let _ = writeln!(
        buffer,
        "\n{}Facilities ({} slots){}",
        palette.heading,
        facilities.len(),
        palette.reset
    );
    if options.is_empty() {
        let _ = writeln!(buffer, "  {}no eligible facilities{}", palette.muted, palette.reset);
    }
    for option in options {
        let _ = writeln!(buffer, "  {:<14} {}", option.index, option.label);
    }
    buffer
}

/// Write `value` to stdout as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value).map_err(io::Error::other)?;
    writeln!(handle)
}
