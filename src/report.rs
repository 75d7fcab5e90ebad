//! Textual rendering of store contents and analysis reports
//!
//! The core never prints. Callers pick one of these renderers (or serialize
//! the report structs with `serde_json`) and decide where the text goes.

use std::fmt;

use crate::analysis::{ComplexityReport, SparsityReport};
use crate::store::{AccessOrder, Lane, MatrixStore};

/// Marker printed in place of absent cells in the matrix table.
pub const MISSING_MARKER: &str = "MISSING";

const KEY_WIDTH: usize = 10;
const CELL_WIDTH: usize = 12;

/// Key-labeled table: one row per year, one column per city.
pub struct MatrixTable<'a>(pub &'a MatrixStore);

impl fmt::Display for MatrixTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.0;
        writeln!(f, "Rows: Years, Columns: Cities")?;
        writeln!(f, "Missing data shown as: {MISSING_MARKER}")?;
        writeln!(f)?;

        write!(f, "{:>KEY_WIDTH$}", "Year")?;
        for city in store.cities() {
            write!(f, "{city:>CELL_WIDTH$}")?;
        }
        writeln!(f)?;

        for lane in store.row_major() {
            write!(f, "{:>KEY_WIDTH$}", lane.key.to_string())?;
            for (_, value) in &lane.cells {
                match value {
                    Some(v) => write!(f, "{v:>CELL_WIDTH$}")?,
                    None => write!(f, "{MISSING_MARKER:>CELL_WIDTH$}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Traversal listing: one block per outer key.
pub struct LaneListing<'a, 'b> {
    /// Order the lanes were produced in
    pub order: AccessOrder,
    /// Lanes to print
    pub lanes: &'b [Lane<'a>],
}

impl fmt::Display for LaneListing<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (title, outer) = match self.order {
            AccessOrder::RowMajor => ("ROW-MAJOR ACCESS (Year-wise Data)", "Year"),
            AccessOrder::ColumnMajor => ("COLUMN-MAJOR ACCESS (City-wise Data)", "City"),
        };
        writeln!(f, "--- {title} ---")?;
        for lane in self.lanes {
            writeln!(f, "{outer} {}:", lane.key)?;
            for (key, value) in &lane.cells {
                match value {
                    Some(v) => writeln!(f, "  {key}: {v}°C")?,
                    None => writeln!(f, "  {key}: Data missing")?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for SparsityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- SPARSE DATA HANDLING ANALYSIS ---")?;
        writeln!(f, "Total possible records: {}", self.total)?;
        writeln!(f, "Present records: {}", self.present)?;
        writeln!(f, "Missing records: {}", self.missing)?;
        writeln!(f, "Sparsity level: {:.2}%", self.percent())?;
        writeln!(f, "Absent cells filled with: {}", self.sentinel)?;
        writeln!(f, "RECOMMENDATION: {}", self.recommendation.advice())?;
        if !self.missing_cells.is_empty() {
            writeln!(f, "Missing Data Details:")?;
            for (year, city) in &self.missing_cells {
                writeln!(f, "- {city} in {year}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ComplexityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- TIME AND SPACE COMPLEXITY ANALYSIS ---")?;
        writeln!(f, "Grid: {} rows × {} columns", self.rows, self.cols)?;
        for op in &self.operations {
            writeln!(
                f,
                "{:<16} best {:<12} worst {:<12} ({})",
                op.operation, op.best, op.worst, op.note
            )?;
        }
        writeln!(f, "Space: {}", self.space)?;
        writeln!(f, "Memory:")?;
        writeln!(f, "- Grid: {} bytes", self.memory.grid_bytes)?;
        writeln!(f, "- Presence mask: {} bytes", self.memory.presence_bytes)?;
        writeln!(f, "- Index maps: {} bytes", self.memory.index_bytes)?;
        writeln!(f, "- Approx total: {} bytes", self.memory.total_bytes())
    }
}

/// Render the matrix table.
#[must_use]
pub fn render_matrix(store: &MatrixStore) -> String {
    MatrixTable(store).to_string()
}

/// Render a traversal of `store` in `order`.
#[must_use]
pub fn render_lanes(store: &MatrixStore, order: AccessOrder) -> String {
    let lanes = store.lanes(order);
    LaneListing {
        order,
        lanes: &lanes,
    }
    .to_string()
}

/// Render the sparsity report.
#[must_use]
pub fn render_sparsity(report: &SparsityReport) -> String {
    report.to_string()
}

/// Render the complexity report.
#[must_use]
pub fn render_complexity(report: &ComplexityReport) -> String {
    report.to_string()
}

/// Trade-offs between the two traversal orders for this layout.
#[must_use]
pub fn render_access_comparison() -> String {
    [
        "--- COMPARISON: Row-Major vs Column-Major ---",
        "ROW-MAJOR advantages:",
        "- Walks the grid in storage order (cache friendly)",
        "- Fast when reading every city for one year",
        "COLUMN-MAJOR advantages:",
        "- Natural for one city's history across years",
        "- Strided reads: one row length between consecutive cells",
        "Grid is stored row-major, so year-wise scans are the cheap direction.",
    ]
    .join("\n")
}
