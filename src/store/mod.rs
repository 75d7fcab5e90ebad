//! Dense matrix store (year x city)
//!
//! **Layout**: a single row-major `Vec<f64>` of `years × cities` cells plus a
//! presence mask of the same shape. Years map to rows and cities to columns
//! through hash maps built once at construction, so every point operation is
//! two map lookups and one array index.
//!
//! Presence is tracked by the mask, never by comparing floats against the
//! sentinel. The sentinel only fills absent cells in the raw grid, so a real
//! measurement that happens to equal it is still stored and counted.

mod traversal;

pub use traversal::{AccessOrder, Lane, LaneKey};

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{DuplicateKeyPolicy, MatrixStoreBuilder, StoreConfig};
use crate::record::{year_of, WeatherRecord};
use crate::{Error, Result};

/// Result of a successful insert
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum InsertOutcome {
    /// The cell was absent and now holds a value
    Inserted,
    /// The cell already held `previous`, which was overwritten
    Overwritten {
        /// Value before the overwrite
        previous: f64,
    },
}

/// Result of a delete with known keys
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DeleteOutcome {
    /// The cell held `previous` and is now absent
    Deleted {
        /// Value that was removed
        previous: f64,
    },
    /// The cell was already absent; nothing changed
    NothingToDelete,
}

/// Fixed-shape store of temperatures keyed by year (row) and city (column).
///
/// # Example
///
/// ```rust
/// use weather_grid_db::{MatrixStore, WeatherRecord};
///
/// let mut store = MatrixStore::builder()
///     .years([2023, 2024, 2025])
///     .cities(["Delhi", "Mumbai", "Kolkata", "Chennai"])
///     .build()?;
///
/// store.insert(&WeatherRecord::parse("15/01/2023", "Chennai", 31.5)?)?;
/// assert_eq!(store.retrieve("Chennai", 2023)?, Some(31.5));
/// assert_eq!(store.retrieve("Chennai", 2024)?, None);
/// # Ok::<(), weather_grid_db::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MatrixStore {
    years: Vec<i32>,
    cities: Vec<String>,
    year_index: FxHashMap<i32, usize>,
    city_index: FxHashMap<String, usize>,
    cells: Vec<f64>,
    present: Vec<bool>,
    sentinel: f64,
    present_count: usize,
}

impl MatrixStore {
    /// Create a new store builder
    #[must_use]
    pub fn builder() -> MatrixStoreBuilder {
        MatrixStoreBuilder::default()
    }

    /// Create a store with the default sentinel and duplicate policy.
    ///
    /// # Errors
    ///
    /// See [`MatrixStore::from_config`].
    pub fn new<S: Into<String>>(
        years: impl IntoIterator<Item = i32>,
        cities: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        Self::from_config(StoreConfig::new(years, cities))
    }

    /// Create a store from a config.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if either axis is empty
    /// - [`Error::InvalidSentinel`] if the sentinel is NaN or infinite
    /// - [`Error::DuplicateKey`] if an axis repeats a key under
    ///   [`DuplicateKeyPolicy::Reject`]
    pub fn from_config(config: StoreConfig) -> Result<Self> {
        let StoreConfig {
            years,
            cities,
            sentinel,
            duplicate_keys,
        } = config;

        if years.is_empty() {
            return Err(Error::InvalidDimension("years"));
        }
        if cities.is_empty() {
            return Err(Error::InvalidDimension("cities"));
        }
        if !sentinel.is_finite() {
            return Err(Error::InvalidSentinel(sentinel));
        }

        let year_index = build_index("year", &years, duplicate_keys)?;
        let city_index = build_index("city", &cities, duplicate_keys)?;

        let size = years.len() * cities.len();
        info!(
            years = years.len(),
            cities = cities.len(),
            "weather grid initialized"
        );

        Ok(Self {
            years,
            cities,
            year_index,
            city_index,
            cells: vec![sentinel; size],
            present: vec![false; size],
            sentinel,
            present_count: 0,
        })
    }

    /// Year axis in storage order
    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// City axis in storage order
    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// `(rows, columns)`
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.years.len(), self.cities.len())
    }

    /// Number of cells in the grid
    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// Fill value of absent cells
    #[must_use]
    pub const fn sentinel(&self) -> f64 {
        self.sentinel
    }

    /// Cached number of present cells (O(1))
    #[must_use]
    pub const fn present_count(&self) -> usize {
        self.present_count
    }

    /// Number of absent cells
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.total_cells() - self.present_count
    }

    /// Store a record's temperature at `(record.year(), record.city())`.
    ///
    /// Overwrites any existing value. Re-inserting into a present cell does not
    /// change the present count.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownRow`] / [`Error::UnknownColumn`] if the year or city is
    /// not an axis key. The store is unchanged.
    pub fn insert(&mut self, record: &WeatherRecord) -> Result<InsertOutcome> {
        let idx = self.locate(record.year(), record.city())?;

        let outcome = if self.present[idx] {
            InsertOutcome::Overwritten {
                previous: self.cells[idx],
            }
        } else {
            self.present[idx] = true;
            self.present_count += 1;
            InsertOutcome::Inserted
        };
        self.cells[idx] = record.temperature();

        debug!(
            year = record.year(),
            city = record.city(),
            temperature = record.temperature(),
            ?outcome,
            "insert"
        );
        Ok(outcome)
    }

    /// Remove the value for `city` in the year of `date` (`DD/MM/YYYY`).
    ///
    /// # Errors
    ///
    /// [`Error::MalformedDate`] if `date` does not parse, otherwise as
    /// [`MatrixStore::delete_at`].
    pub fn delete(&mut self, city: &str, date: &str) -> Result<DeleteOutcome> {
        self.delete_at(city, year_of(date)?)
    }

    /// Remove the value for `(year, city)`.
    ///
    /// Deleting an absent cell is a no-op reported as
    /// [`DeleteOutcome::NothingToDelete`].
    ///
    /// # Errors
    ///
    /// [`Error::UnknownRow`] / [`Error::UnknownColumn`] for keys outside the axes.
    pub fn delete_at(&mut self, city: &str, year: i32) -> Result<DeleteOutcome> {
        let idx = self.locate(year, city)?;

        let outcome = if self.present[idx] {
            let previous = self.cells[idx];
            self.present[idx] = false;
            self.cells[idx] = self.sentinel;
            self.present_count -= 1;
            DeleteOutcome::Deleted { previous }
        } else {
            DeleteOutcome::NothingToDelete
        };

        debug!(year, city, ?outcome, "delete");
        Ok(outcome)
    }

    /// Look up the value for `(year, city)`.
    ///
    /// `Ok(None)` means both keys are valid but there is no observation.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownRow`] / [`Error::UnknownColumn`] for keys outside the axes.
    pub fn retrieve(&self, city: &str, year: i32) -> Result<Option<f64>> {
        let idx = self.locate(year, city)?;
        Ok(self.present[idx].then(|| self.cells[idx]))
    }

    /// Count present cells with a full scan, ignoring the cached counter.
    #[must_use]
    pub fn scan_present(&self) -> usize {
        self.present.iter().filter(|p| **p).count()
    }

    /// Resynchronize the cached present count with a full scan.
    ///
    /// Returns the recounted value.
    pub fn recount(&mut self) -> usize {
        let scanned = self.scan_present();
        if scanned != self.present_count {
            warn!(
                cached = self.present_count,
                scanned, "present count drifted; resynchronizing"
            );
        }
        self.present_count = scanned;
        scanned
    }

    /// Absent cells as `(year, city)` in row-major order.
    #[must_use]
    pub fn missing_cells(&self) -> Vec<(i32, &str)> {
        let cols = self.cities.len();
        self.present
            .iter()
            .enumerate()
            .filter(|(_, present)| !**present)
            .map(|(idx, _)| (self.years[idx / cols], self.cities[idx % cols].as_str()))
            .collect()
    }

    /// Value at grid position `(row, col)`, `None` if absent.
    pub(crate) fn cell(&self, row: usize, col: usize) -> Option<f64> {
        let idx = row * self.cities.len() + col;
        self.present[idx].then(|| self.cells[idx])
    }

    fn locate(&self, year: i32, city: &str) -> Result<usize> {
        let row = *self.year_index.get(&year).ok_or(Error::UnknownRow(year))?;
        let col = *self
            .city_index
            .get(city)
            .ok_or_else(|| Error::UnknownColumn(city.to_string()))?;
        Ok(row * self.cities.len() + col)
    }
}

fn build_index<K>(
    axis: &'static str,
    keys: &[K],
    policy: DuplicateKeyPolicy,
) -> Result<FxHashMap<K, usize>>
where
    K: Clone + Eq + std::hash::Hash + std::fmt::Display,
{
    let mut index = FxHashMap::with_capacity_and_hasher(keys.len(), Default::default());
    for (pos, key) in keys.iter().enumerate() {
        if index.insert(key.clone(), pos).is_some() && policy == DuplicateKeyPolicy::Reject {
            return Err(Error::DuplicateKey {
                axis,
                key: key.to_string(),
            });
        }
    }
    Ok(index)
}
