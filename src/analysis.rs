//! Sparsity and complexity analysis
//!
//! Both reports are advisory. Nothing here changes how the grid is stored.

use std::mem::size_of;

use serde::Serialize;

use crate::store::MatrixStore;

/// Above this fraction of missing cells a coordinate list pays off.
pub const SPARSE_THRESHOLD: f64 = 0.70;

/// Above this fraction (and up to [`SPARSE_THRESHOLD`]) the dense grid with
/// absent markers is still adequate.
pub const MODERATE_THRESHOLD: f64 = 0.30;

/// Storage layout suggested by the measured sparsity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageRecommendation {
    /// Store only `(row, col, value)` triplets
    SparseCoordinateList,
    /// Keep the dense grid with absent markers
    SentinelAdequate,
    /// Dense grid is efficient; sparse overhead is not justified
    Dense,
}

impl StorageRecommendation {
    /// Band for a sparsity fraction in `[0, 1]`.
    #[must_use]
    pub fn classify(sparsity: f64) -> Self {
        if sparsity > SPARSE_THRESHOLD {
            Self::SparseCoordinateList
        } else if sparsity > MODERATE_THRESHOLD {
            Self::SentinelAdequate
        } else {
            Self::Dense
        }
    }

    /// Short human-readable advice
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::SparseCoordinateList => {
                "Use a sparse matrix: store only (row, col, value) triplets to save memory"
            }
            Self::SentinelAdequate => {
                "Current dense grid with missing markers is adequate"
            }
            Self::Dense => "Dense matrix is efficient; low sparsity does not justify sparse overhead",
        }
    }
}

/// Missing-data accounting for a store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SparsityReport {
    /// `rows × cols`
    pub total: usize,
    /// Cells holding an observation (recounted by full scan)
    pub present: usize,
    /// `total - present`
    pub missing: usize,
    /// `missing / total`, in `[0, 1]`
    pub sparsity: f64,
    /// Fill value used for absent cells
    pub sentinel: f64,
    /// Suggested storage layout
    pub recommendation: StorageRecommendation,
    /// Absent cells as `(year, city)` in row-major order
    pub missing_cells: Vec<(i32, String)>,
}

impl SparsityReport {
    /// Sparsity as a percentage
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.sparsity * 100.0
    }
}

/// Asymptotic cost of one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationCost {
    /// Operation name
    pub operation: &'static str,
    /// Best-case time
    pub best: String,
    /// Worst-case time
    pub worst: String,
    /// Why
    pub note: &'static str,
}

/// Memory footprint of the grid and its indexes, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryUsage {
    /// Dense value grid
    pub grid_bytes: usize,
    /// Presence mask
    pub presence_bytes: usize,
    /// Key -> position maps (entries only)
    pub index_bytes: usize,
}

impl MemoryUsage {
    /// Sum of all parts
    #[must_use]
    pub const fn total_bytes(&self) -> usize {
        self.grid_bytes + self.presence_bytes + self.index_bytes
    }
}

/// Time and space complexity of a store with concrete dimensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexityReport {
    /// Row count
    pub rows: usize,
    /// Column count
    pub cols: usize,
    /// Per-operation time complexity
    pub operations: Vec<OperationCost>,
    /// Space complexity
    pub space: String,
    /// Approximate memory usage
    pub memory: MemoryUsage,
}

impl MatrixStore {
    /// Recount present cells and classify sparsity.
    ///
    /// Resynchronizes the cached present count from a full scan first.
    #[allow(clippy::cast_precision_loss)]
    pub fn sparsity_report(&mut self) -> SparsityReport {
        let present = self.recount();
        let total = self.total_cells();
        let missing = total - present;
        let sparsity = missing as f64 / total as f64;

        SparsityReport {
            total,
            present,
            missing,
            sparsity,
            sentinel: self.sentinel(),
            recommendation: StorageRecommendation::classify(sparsity),
            missing_cells: self
                .missing_cells()
                .into_iter()
                .map(|(year, city)| (year, city.to_string()))
                .collect(),
        }
    }

    /// Describe operation costs and memory for this store's dimensions.
    #[must_use]
    pub fn complexity_report(&self) -> ComplexityReport {
        let (rows, cols) = self.dimensions();
        let constant = |operation: &'static str, note: &'static str| OperationCost {
            operation,
            best: "O(1)".to_string(),
            worst: "O(1)".to_string(),
            note,
        };
        let scan = |operation: &'static str, outer: usize, inner: usize, note: &'static str| {
            let cost = format!("O({outer} × {inner})");
            OperationCost {
                operation,
                best: cost.clone(),
                worst: cost,
                note,
            }
        };

        ComplexityReport {
            rows,
            cols,
            operations: vec![
                constant("insert", "two hash lookups and one array write"),
                constant("delete", "two hash lookups and one array write"),
                constant("retrieve", "two hash lookups and one array read"),
                scan(
                    "row_major",
                    rows,
                    cols,
                    "sequential walk over the row-major grid",
                ),
                scan(
                    "column_major",
                    cols,
                    rows,
                    "strided walk with a stride of one row",
                ),
                scan("sparsity_report", rows, cols, "full presence recount"),
            ],
            space: format!("O({rows} × {cols}) grid + O({rows} + {cols}) indexes"),
            memory: MemoryUsage {
                grid_bytes: rows * cols * size_of::<f64>(),
                presence_bytes: rows * cols * size_of::<bool>(),
                index_bytes: (rows + cols) * size_of::<usize>(),
            },
        }
    }
}
