//! Thread-safe handle to a [`MatrixStore`]
//!
//! Every store operation is O(1) or O(rows × cols), so one coarse
//! reader/writer lock around the whole store is enough.

use std::sync::{Arc, RwLock};

use crate::analysis::SparsityReport;
use crate::record::WeatherRecord;
use crate::store::{DeleteOutcome, InsertOutcome, MatrixStore};
use crate::{Error, Result};

/// Cloneable, shareable store handle.
///
/// Clones share the same underlying store.
///
/// # Example
///
/// ```rust
/// use weather_grid_db::{MatrixStore, SharedMatrixStore, WeatherRecord};
///
/// let shared = SharedMatrixStore::new(MatrixStore::new([2024], ["Delhi"])?);
/// let writer = shared.clone();
/// std::thread::spawn(move || {
///     let record = WeatherRecord::parse("01/05/2024", "Delhi", 41.2).unwrap();
///     writer.insert(&record).unwrap();
/// })
/// .join()
/// .unwrap();
/// assert_eq!(shared.retrieve("Delhi", 2024)?, Some(41.2));
/// # Ok::<(), weather_grid_db::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SharedMatrixStore {
    inner: Arc<RwLock<MatrixStore>>,
}

impl SharedMatrixStore {
    /// Wrap a store.
    #[must_use]
    pub fn new(store: MatrixStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Run `f` under the read lock.
    ///
    /// # Errors
    ///
    /// [`Error::LockPoisoned`] if a writer panicked while holding the lock.
    pub fn read<R>(&self, f: impl FnOnce(&MatrixStore) -> R) -> Result<R> {
        let guard = self.inner.read().map_err(|_| Error::LockPoisoned)?;
        Ok(f(&guard))
    }

    /// Run `f` under the write lock.
    ///
    /// # Errors
    ///
    /// [`Error::LockPoisoned`] if a writer panicked while holding the lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut MatrixStore) -> R) -> Result<R> {
        let mut guard = self.inner.write().map_err(|_| Error::LockPoisoned)?;
        Ok(f(&mut guard))
    }

    /// See [`MatrixStore::insert`].
    ///
    /// # Errors
    ///
    /// Lock poisoning or any error of [`MatrixStore::insert`].
    pub fn insert(&self, record: &WeatherRecord) -> Result<InsertOutcome> {
        self.write(|store| store.insert(record))?
    }

    /// See [`MatrixStore::delete`].
    ///
    /// # Errors
    ///
    /// Lock poisoning or any error of [`MatrixStore::delete`].
    pub fn delete(&self, city: &str, date: &str) -> Result<DeleteOutcome> {
        self.write(|store| store.delete(city, date))?
    }

    /// See [`MatrixStore::retrieve`].
    ///
    /// # Errors
    ///
    /// Lock poisoning or any error of [`MatrixStore::retrieve`].
    pub fn retrieve(&self, city: &str, year: i32) -> Result<Option<f64>> {
        self.read(|store| store.retrieve(city, year))?
    }

    /// Cached present count.
    ///
    /// # Errors
    ///
    /// [`Error::LockPoisoned`].
    pub fn present_count(&self) -> Result<usize> {
        self.read(MatrixStore::present_count)
    }

    /// See [`MatrixStore::sparsity_report`]; takes the write lock for the recount.
    ///
    /// # Errors
    ///
    /// [`Error::LockPoisoned`].
    pub fn sparsity_report(&self) -> Result<SparsityReport> {
        self.write(MatrixStore::sparsity_report)
    }
}
