//! Row-major and column-major traversal
//!
//! Both orders visit every cell exactly once. Absent cells surface as `None`;
//! the sentinel never leaves the store.

use std::fmt;

use serde::Serialize;

use super::MatrixStore;

/// Outer-loop order of a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccessOrder {
    /// Outer loop over years, inner over cities (matches storage layout)
    RowMajor,
    /// Outer loop over cities, inner over years (strided access)
    ColumnMajor,
}

/// An axis key: a year (row) or a city (column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LaneKey<'a> {
    /// Row key
    Year(i32),
    /// Column key
    City(&'a str),
}

impl fmt::Display for LaneKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year(year) => write!(f, "{year}"),
            Self::City(city) => f.write_str(city),
        }
    }
}

/// One outer-loop step: the outer key and every inner `(key, value)` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lane<'a> {
    /// Outer key (year for row-major, city for column-major)
    pub key: LaneKey<'a>,
    /// Inner keys in stored order with their value, `None` if absent
    pub cells: Vec<(LaneKey<'a>, Option<f64>)>,
}

impl Lane<'_> {
    /// Number of present cells in this lane
    #[must_use]
    pub fn present(&self) -> usize {
        self.cells.iter().filter(|(_, v)| v.is_some()).count()
    }
}

impl MatrixStore {
    /// Traverse year by year; each lane lists every city in stored order.
    pub fn row_major(&self) -> impl Iterator<Item = Lane<'_>> + '_ {
        self.years.iter().enumerate().map(move |(row, year)| Lane {
            key: LaneKey::Year(*year),
            cells: self
                .cities
                .iter()
                .enumerate()
                .map(|(col, city)| (LaneKey::City(city.as_str()), self.cell(row, col)))
                .collect(),
        })
    }

    /// Traverse city by city; each lane lists every year in stored order.
    pub fn column_major(&self) -> impl Iterator<Item = Lane<'_>> + '_ {
        self.cities.iter().enumerate().map(move |(col, city)| Lane {
            key: LaneKey::City(city.as_str()),
            cells: self
                .years
                .iter()
                .enumerate()
                .map(|(row, year)| (LaneKey::Year(*year), self.cell(row, col)))
                .collect(),
        })
    }

    /// Traverse in the given order.
    #[must_use]
    pub fn lanes(&self, order: AccessOrder) -> Vec<Lane<'_>> {
        match order {
            AccessOrder::RowMajor => self.row_major().collect(),
            AccessOrder::ColumnMajor => self.column_major().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WeatherRecord;

    fn store() -> MatrixStore {
        let mut store = MatrixStore::new([2023, 2024], ["Delhi", "Mumbai", "Kolkata"]).unwrap();
        for (date, city, value) in [
            ("01/01/2023", "Delhi", 28.5),
            ("01/01/2023", "Kolkata", 25.8),
            ("01/01/2024", "Mumbai", 33.5),
        ] {
            store
                .insert(&WeatherRecord::parse(date, city, value).unwrap())
                .unwrap();
        }
        store
    }

    #[test]
    fn test_row_major_order() {
        let store = store();
        let lanes: Vec<_> = store.row_major().collect();

        assert_eq!(lanes.len(), 2);
        assert_eq!(lanes[0].key, LaneKey::Year(2023));
        assert_eq!(
            lanes[0].cells,
            vec![
                (LaneKey::City("Delhi"), Some(28.5)),
                (LaneKey::City("Mumbai"), None),
                (LaneKey::City("Kolkata"), Some(25.8)),
            ]
        );
        assert_eq!(lanes[1].present(), 1);
    }

    #[test]
    fn test_column_major_order() {
        let store = store();
        let lanes = store.lanes(AccessOrder::ColumnMajor);

        assert_eq!(lanes.len(), 3);
        assert_eq!(lanes[1].key, LaneKey::City("Mumbai"));
        assert_eq!(
            lanes[1].cells,
            vec![(LaneKey::Year(2023), None), (LaneKey::Year(2024), Some(33.5))]
        );
    }

    #[test]
    fn test_lane_serializes_without_sentinel() {
        let store = store();
        let lanes = store.lanes(AccessOrder::RowMajor);
        let json = serde_json::to_string(&lanes).unwrap();
        assert!(json.contains("\"Mumbai\",null"));
        assert!(!json.contains("-999.9"));
    }

    #[test]
    fn test_lane_key_display() {
        assert_eq!(LaneKey::Year(2024).to_string(), "2024");
        assert_eq!(LaneKey::City("Delhi").to_string(), "Delhi");
    }
}
