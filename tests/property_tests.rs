//! Property-based tests for weather-grid-db
//!
//! - Test bookkeeping invariants over random operation sequences
//! - Test agreement with a simple map-based model
//! - Run with ProptestConfig::with_cases(100)

use proptest::prelude::*;
use std::collections::BTreeMap;
use weather_grid_db::{AccessOrder, LaneKey, MatrixStore, WeatherRecord};

const YEARS: [i32; 4] = [2021, 2022, 2023, 2024];
const CITIES: [&str; 5] = ["Delhi", "Mumbai", "Kolkata", "Chennai", "Pune"];

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Insert { row: usize, col: usize, value: f64 },
    Delete { row: usize, col: usize },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..YEARS.len(), 0..CITIES.len(), -50.0f64..60.0)
            .prop_map(|(row, col, value)| Op::Insert { row, col, value }),
        (0..YEARS.len(), 0..CITIES.len()).prop_map(|(row, col)| Op::Delete { row, col }),
    ]
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(arb_op(), 0..80)
}

fn empty_store() -> MatrixStore {
    MatrixStore::new(YEARS, CITIES).unwrap()
}

/// Apply ops to a store and to a reference model keyed by (row, col)
fn apply(ops: &[Op]) -> (MatrixStore, BTreeMap<(usize, usize), f64>) {
    let mut store = empty_store();
    let mut model = BTreeMap::new();

    for op in ops {
        match *op {
            Op::Insert { row, col, value } => {
                let date = format!("15/07/{}", YEARS[row]);
                let record = WeatherRecord::parse(&date, CITIES[col], value).unwrap();
                store.insert(&record).unwrap();
                model.insert((row, col), value);
            }
            Op::Delete { row, col } => {
                store.delete_at(CITIES[col], YEARS[row]).unwrap();
                model.remove(&(row, col));
            }
        }
    }
    (store, model)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: cached present count always equals a full scan
    #[test]
    fn prop_present_count_matches_scan(ops in arb_ops()) {
        let (store, model) = apply(&ops);
        prop_assert_eq!(store.present_count(), store.scan_present());
        prop_assert_eq!(store.present_count(), model.len());
        prop_assert_eq!(store.missing_count(), store.missing_cells().len());
    }

    /// Property: retrieve agrees with the reference model on every cell
    #[test]
    fn prop_retrieve_matches_model(ops in arb_ops()) {
        let (store, model) = apply(&ops);
        for (row, year) in YEARS.iter().enumerate() {
            for (col, city) in CITIES.iter().enumerate() {
                let expected = model.get(&(row, col)).copied();
                prop_assert_eq!(store.retrieve(city, *year).unwrap(), expected);
            }
        }
    }

    /// Property: insert then retrieve returns the inserted value
    #[test]
    fn prop_insert_then_retrieve(
        ops in arb_ops(),
        row in 0..YEARS.len(),
        col in 0..CITIES.len(),
        value in -50.0f64..60.0
    ) {
        let (mut store, _) = apply(&ops);
        let date = format!("01/01/{}", YEARS[row]);
        store.insert(&WeatherRecord::parse(&date, CITIES[col], value).unwrap()).unwrap();
        prop_assert_eq!(store.retrieve(CITIES[col], YEARS[row]).unwrap(), Some(value));
    }

    /// Property: insert then delete leaves the cell absent
    #[test]
    fn prop_insert_delete_is_no_data(
        ops in arb_ops(),
        row in 0..YEARS.len(),
        col in 0..CITIES.len()
    ) {
        let (mut store, _) = apply(&ops);
        let date = format!("28/02/{}", YEARS[row]);
        store.insert(&WeatherRecord::parse(&date, CITIES[col], 1.0).unwrap()).unwrap();
        store.delete(CITIES[col], &date).unwrap();
        prop_assert_eq!(store.retrieve(CITIES[col], YEARS[row]).unwrap(), None);
    }

    /// Property: both traversals visit every cell once and agree on values
    #[test]
    fn prop_traversals_agree(ops in arb_ops()) {
        let (store, _) = apply(&ops);

        let mut by_row = BTreeMap::new();
        for lane in store.lanes(AccessOrder::RowMajor) {
            let LaneKey::Year(year) = lane.key else { panic!("row lane keyed by city") };
            for (key, value) in lane.cells {
                let LaneKey::City(city) = key else { panic!("row cell keyed by year") };
                prop_assert!(by_row.insert((year, city), value).is_none());
            }
        }

        let mut by_col = BTreeMap::new();
        for lane in store.lanes(AccessOrder::ColumnMajor) {
            let LaneKey::City(city) = lane.key else { panic!("column lane keyed by year") };
            for (key, value) in lane.cells {
                let LaneKey::Year(year) = key else { panic!("column cell keyed by city") };
                prop_assert!(by_col.insert((year, city), value).is_none());
            }
        }

        prop_assert_eq!(by_row.len(), YEARS.len() * CITIES.len());
        prop_assert_eq!(by_row, by_col);
    }

    /// Property: sparsity report is consistent with the counters
    #[test]
    fn prop_sparsity_report_consistent(ops in arb_ops()) {
        let (mut store, model) = apply(&ops);
        let report = store.sparsity_report();
        prop_assert_eq!(report.present, model.len());
        prop_assert_eq!(report.present + report.missing, report.total);
        prop_assert!((0.0..=1.0).contains(&report.sparsity));
        prop_assert_eq!(report.missing_cells.len(), report.missing);
    }
}
