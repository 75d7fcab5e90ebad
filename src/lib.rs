//! # weather-grid-db: Embedded Year × City Measurement Grid
//!
//! **Version**: 0.1.0
//!
//! An in-memory store of temperatures keyed by year (rows) and city
//! (columns). The shape is fixed at construction; storage is a dense
//! row-major grid with an explicit presence mask.
//!
//! ## Design Principles
//!
//! - **Fixed coordinate space**: unknown years or cities are rejected, never
//!   appended
//! - **O(1) point access**: two hash lookups and one array index
//! - **No hidden printing**: operations return structured outcomes; the
//!   [`report`] module renders text
//! - **Missing is not a number**: absent cells surface as `None` (or Arrow
//!   nulls), never as the fill value
//!
//! ## Example Usage
//!
//! ```rust
//! use weather_grid_db::{AccessOrder, MatrixStore, WeatherRecord};
//!
//! let mut store = MatrixStore::builder()
//!     .years([2023, 2024, 2025])
//!     .cities(["Delhi", "Mumbai", "Kolkata", "Chennai"])
//!     .build()?;
//!
//! store.insert(&WeatherRecord::parse("20/06/2024", "Mumbai", 29.8)?)?;
//! assert_eq!(store.retrieve("Mumbai", 2024)?, Some(29.8));
//!
//! for lane in store.row_major() {
//!     println!("{}: {} readings", lane.key, lane.present());
//! }
//!
//! let report = store.sparsity_report();
//! println!("{report}");
//! # Ok::<(), weather_grid_db::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod analysis;
pub mod columnar;
pub mod config;
pub mod error;
pub mod record;
pub mod report;
pub mod shared;
pub mod store;

pub use analysis::{ComplexityReport, SparsityReport, StorageRecommendation};
pub use config::{DuplicateKeyPolicy, MatrixStoreBuilder, StoreConfig};
pub use error::{Error, Result};
pub use record::WeatherRecord;
pub use shared::SharedMatrixStore;
pub use store::{AccessOrder, DeleteOutcome, InsertOutcome, Lane, LaneKey, MatrixStore};
