//! Results table built from an aggregate, with plain and Markdown renderers.

use std::fmt::Write;

use serde::Serialize;

use crate::aggregate::Aggregate;

/// Message shown in place of results when the catalog could not be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load ship data.";

/// Presentation style for turning a [`ResultsTable`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRenderMode {
    PlainText,
    RichText,
}

/// One row of the results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableRow {
    Entry { label: String, value: String },
    Separator { title: String },
    Message { text: String },
}

impl TableRow {
    fn entry<L: Into<String>, V: Into<String>>(label: L, value: V) -> Self {
        TableRow::Entry {
            label: label.into(),
            value: value.into(),
        }
    }

    fn separator(title: &str) -> Self {
        TableRow::Separator {
            title: title.to_string(),
        }
    }
}

/// Two-column results view of an [`Aggregate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsTable {
    pub rows: Vec<TableRow>,
}

impl ResultsTable {
    /// Lay out an aggregate as ship summary, levels, components, facilities
    /// and material totals.
    pub fn from_aggregate(aggregate: &Aggregate) -> Self {
        let ship = &aggregate.ship;
        let mut rows = vec![
            TableRow::entry(
                "Ship",
                format!("{} (Speed: {}, HP: {})", ship.name, ship.speed, ship.hp),
            ),
            TableRow::entry("Required Sailing Level", aggregate.max_sailing.to_string()),
            TableRow::entry("Required Construction Level", aggregate.max_con.to_string()),
            TableRow::separator("Selected Components"),
        ];

        for component in &aggregate.components {
            rows.push(TableRow::entry(
                component.display_name.clone(),
                format!(
                    "{}: {} — {} {}",
                    component.tier,
                    component.name,
                    format_amount(component.total_amount),
                    component.raw_material
                ),
            ));
        }

        rows.push(TableRow::separator("Selected Facilities"));
        for (slot, facility) in aggregate.facilities.iter().enumerate() {
            let label = format!("Facility slot {}", slot + 1);
            let value = match facility {
                Some(facility) => format!(
                    "{} — {} {}",
                    facility.label,
                    format_amount(facility.total_amount),
                    facility.raw_material
                ),
                None => "None".to_string(),
            };
            rows.push(TableRow::entry(label, value));
        }

        rows.push(TableRow::separator("Total Materials Required"));
        if aggregate.materials.is_empty() {
            rows.push(TableRow::entry("Materials", "None selected"));
        } else {
            for total in aggregate.materials.iter() {
                rows.push(TableRow::entry(
                    total.material.clone(),
                    format_amount(total.amount),
                ));
            }
        }

        Self { rows }
    }

    /// Table holding only the load failure message.
    pub fn failure() -> Self {
        Self {
            rows: vec![TableRow::Message {
                text: LOAD_FAILURE_MESSAGE.to_string(),
            }],
        }
    }

    /// Render the table using the requested textual mode.
    pub fn render(&self, mode: TableRenderMode) -> String {
        match mode {
            TableRenderMode::PlainText => self.render_plain(),
            TableRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let width = self
            .rows
            .iter()
            .filter_map(|row| match row {
                TableRow::Entry { label, .. } => Some(label.chars().count()),
                _ => None,
            })
            .max()
            .unwrap_or(0);

        let mut buffer = String::new();
        for row in &self.rows {
            let _ = match row {
                TableRow::Entry { label, value } => {
                    writeln!(buffer, "{:<width$}  {}", label, value, width = width)
                }
                TableRow::Separator { title } => writeln!(buffer, "\n== {} ==", title),
                TableRow::Message { text } => writeln!(buffer, "{}", text),
            };
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "| Item | Value |");
        let _ = writeln!(buffer, "| --- | --- |");
        for row in &self.rows {
            let _ = match row {
                TableRow::Entry { label, value } => writeln!(buffer, "| {} | {} |", label, value),
                TableRow::Separator { title } => writeln!(buffer, "| **{}** | |", title),
                TableRow::Message { text } => writeln!(buffer, "| _{}_ | |", text),
            };
        }
        buffer
    }
}

/// Format an amount with comma thousands separators.
pub fn format_amount(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
