use crate::record::FlightRecord;
use std::collections::BTreeSet;

/// An immutable, ordered collection of flight records.
///
/// The table is built once at startup and never mutated afterwards. It is
/// shared read-only (behind an `Arc`) by every aggregation invocation, so
/// concurrent requests need no coordination.
#[derive(Debug, Clone)]
pub struct FlightTable {
    records: Vec<FlightRecord>,
    years: BTreeSet<i32>,
}

impl FlightTable {
    /// Builds a table from already-parsed records, preserving their order.
    pub fn from_records(records: Vec<FlightRecord>) -> Self {
        let years = records.iter().map(|r| r.year).collect();
        FlightTable { records, years }
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in load order.
    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }

    /// Distinct years present in the table, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.years.iter().copied().collect()
    }

    /// Returns true if at least one record carries the given year.
    pub fn contains_year(&self, year: i32) -> bool {
        self.years.contains(&year)
    }

    /// Iterates over the records for one year, in load order.
    ///
    /// A year with no records yields an empty iterator, not an error.
    pub fn filter_year(&self, year: i32) -> impl Iterator<Item = &FlightRecord> {
        self.records.iter().filter(move |r| r.year == year)
    }
}
