//! Store configuration and builder
//!
//! A store's shape is fixed once built: the year and city axes, the fill value
//! written into absent cells, and how duplicate axis keys are treated.

use serde::{Deserialize, Serialize};

use crate::store::MatrixStore;
use crate::Result;

/// Default fill value for cells without an observation.
pub const DEFAULT_SENTINEL: f64 = -999.9;

/// How repeated keys in an axis are handled at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeyPolicy {
    /// The last occurrence owns the key; earlier positions become unreachable
    /// rows/columns that still appear in traversals.
    #[default]
    LastWins,
    /// Construction fails with [`crate::Error::DuplicateKey`].
    Reject,
}

/// Serializable description of a store.
///
/// ```rust
/// use weather_grid_db::config::StoreConfig;
///
/// let config = StoreConfig::from_json(r#"{
///     "years": [2023, 2024],
///     "cities": ["Delhi", "Mumbai"]
/// }"#)?;
/// let store = config.build()?;
/// assert_eq!(store.dimensions(), (2, 2));
/// # Ok::<(), weather_grid_db::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Row keys in storage order
    pub years: Vec<i32>,
    /// Column keys in storage order
    pub cities: Vec<String>,
    /// Fill value for absent cells
    #[serde(default = "default_sentinel")]
    pub sentinel: f64,
    /// Duplicate axis key handling
    #[serde(default)]
    pub duplicate_keys: DuplicateKeyPolicy,
}

const fn default_sentinel() -> f64 {
    DEFAULT_SENTINEL
}

impl StoreConfig {
    /// Create a config with default sentinel and duplicate policy.
    #[must_use]
    pub fn new<S: Into<String>>(
        years: impl IntoIterator<Item = i32>,
        cities: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            years: years.into_iter().collect(),
            cities: cities.into_iter().map(Into::into).collect(),
            sentinel: DEFAULT_SENTINEL,
            duplicate_keys: DuplicateKeyPolicy::default(),
        }
    }

    /// Parse a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if the JSON is invalid or misses the axes.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a store from this config.
    ///
    /// # Errors
    ///
    /// See [`MatrixStore::from_config`].
    pub fn build(self) -> Result<MatrixStore> {
        MatrixStore::from_config(self)
    }
}

/// Builder for [`MatrixStore`]
#[derive(Debug, Clone)]
pub struct MatrixStoreBuilder {
    config: StoreConfig,
}

impl Default for MatrixStoreBuilder {
    fn default() -> Self {
        Self {
            config: StoreConfig::new(Vec::new(), Vec::<String>::new()),
        }
    }
}

impl MatrixStoreBuilder {
    /// Set the year axis
    #[must_use]
    pub fn years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.config.years = years.into_iter().collect();
        self
    }

    /// Set the city axis
    #[must_use]
    pub fn cities<S: Into<String>>(mut self, cities: impl IntoIterator<Item = S>) -> Self {
        self.config.cities = cities.into_iter().map(Into::into).collect();
        self
    }

    /// Set the absent-cell fill value
    #[must_use]
    pub const fn sentinel(mut self, sentinel: f64) -> Self {
        self.config.sentinel = sentinel;
        self
    }

    /// Set the duplicate key policy
    #[must_use]
    pub const fn duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.config.duplicate_keys = policy;
        self
    }

    /// Build the store
    ///
    /// # Errors
    ///
    /// Returns error if an axis is empty, the sentinel is not finite, or a
    /// duplicate key is found under [`DuplicateKeyPolicy::Reject`]
    pub fn build(self) -> Result<MatrixStore> {
        self.config.build()
    }
}
