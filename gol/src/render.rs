use std::fmt::Write;

use itertools::Itertools;

use crate::{ClassificationRecord, Fate, GridState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Printed in place of the identifier of a live cell.
    pub alive_marker: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alive_marker: "@".to_string(),
        }
    }
}

/// Bordered table with every cell labelled by its identifier.
pub fn numbered(grid: &GridState) -> String {
    let width = id_width(grid);
    table(grid, width, |row, col| grid.identifier_of(row, col).to_string())
}

/// Bordered table with live cells marked and dead cells labelled by their
/// identifier.
pub fn grid(grid: &GridState, settings: &Settings) -> String {
    let width = id_width(grid).max(settings.alive_marker.chars().count());
    table(grid, width, |row, col| {
        if grid.alive_at(row, col) {
            settings.alive_marker.clone()
        } else {
            grid.identifier_of(row, col).to_string()
        }
    })
}

/// One line per fate, e.g. `Just Right: 2, 5, 8`.
pub fn record(record: &ClassificationRecord) -> String {
    Fate::ALL
        .into_iter()
        .map(|fate| {
            let line = format!("{}: {}", fate.label(), record.get(fate).iter().join(", "));
            line.trim_end().to_string()
        })
        .join("\n")
}

fn id_width(grid: &GridState) -> usize {
    (grid.rows() * grid.cols()).to_string().len()
}

fn table(grid: &GridState, width: usize, label: impl Fn(usize, usize) -> String) -> String {
    let border = format!("|{}|", "-".repeat((width + 3) * grid.cols() - 1));
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            // Writing to a String cannot fail.
            let _ = write!(out, "| {:<width$} ", label(row, col));
        }
        out.push_str("|\n");
        out.push_str(&border);
        out.push('\n');
    }
    out
}
