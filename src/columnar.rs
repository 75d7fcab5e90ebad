//! Arrow export of the grid
//!
//! Absent cells become Arrow nulls, so downstream Arrow/Parquet tooling sees
//! real missing values instead of the fill number.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int32Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::store::{AccessOrder, MatrixStore};
use crate::Result;

/// Key column name for row-major batches
pub const YEAR_COLUMN: &str = "year";
/// Key column name for column-major batches
pub const CITY_COLUMN: &str = "city";

/// Export the grid as a `RecordBatch`.
///
/// - [`AccessOrder::RowMajor`]: one row per year; a non-null `year` Int32
///   column followed by one nullable Float64 column per city.
/// - [`AccessOrder::ColumnMajor`]: one row per city; a non-null `city` Utf8
///   column followed by one nullable Float64 column per year.
///
/// # Errors
///
/// Returns [`crate::Error::Arrow`] if Arrow rejects the assembled columns.
///
/// # Example
///
/// ```rust
/// use weather_grid_db::columnar::to_record_batch;
/// use weather_grid_db::{AccessOrder, MatrixStore};
///
/// let store = MatrixStore::new([2023, 2024], ["Delhi", "Mumbai"])?;
/// let batch = to_record_batch(&store, AccessOrder::RowMajor)?;
/// assert_eq!(batch.num_rows(), 2);
/// assert_eq!(batch.num_columns(), 3);
/// # Ok::<(), weather_grid_db::Error>(())
/// ```
pub fn to_record_batch(store: &MatrixStore, order: AccessOrder) -> Result<RecordBatch> {
    let (key_field, key_array, value_names): (Field, ArrayRef, Vec<String>) = match order {
        AccessOrder::RowMajor => (
            Field::new(YEAR_COLUMN, DataType::Int32, false),
            Arc::new(Int32Array::from(store.years().to_vec())) as ArrayRef,
            store.cities().to_vec(),
        ),
        AccessOrder::ColumnMajor => (
            Field::new(CITY_COLUMN, DataType::Utf8, false),
            Arc::new(StringArray::from_iter_values(store.cities())) as ArrayRef,
            store.years().iter().map(ToString::to_string).collect(),
        ),
    };

    let mut values: Vec<Vec<Option<f64>>> = vec![Vec::new(); value_names.len()];
    for lane in store.lanes(order) {
        for (slot, (_, value)) in values.iter_mut().zip(lane.cells) {
            slot.push(value);
        }
    }

    let mut fields = Vec::with_capacity(value_names.len() + 1);
    fields.push(key_field);
    fields.extend(
        value_names
            .iter()
            .map(|name| Field::new(name, DataType::Float64, true)),
    );

    let mut columns: Vec<ArrayRef> = Vec::with_capacity(fields.len());
    columns.push(key_array);
    columns.extend(
        values
            .into_iter()
            .map(|column| Arc::new(Float64Array::from(column)) as ArrayRef),
    );

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}
