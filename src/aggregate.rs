//! Grouped aggregation over the flight table
//!
//! This module is the computational core of the dashboards: filter one
//! year's records out of the shared table, partition them by one or two
//! categorical columns, and reduce one numeric column with a mean or a sum.
//! The functions are stateless and operate on a borrowed table, so every
//! request recomputes its series from scratch.

use crate::record::FlightRecord;
use crate::table::FlightTable;
use std::collections::BTreeMap;

/// A column the aggregation can group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupColumn {
    /// Calendar month, 1-12
    Month,
    /// Reporting airline carrier code
    ReportingAirline,
    /// Destination state code
    DestState,
}

impl GroupColumn {
    /// Column header name as it appears in the dataset.
    pub fn name(&self) -> &'static str {
        match self {
            GroupColumn::Month => "Month",
            GroupColumn::ReportingAirline => "Reporting_Airline",
            GroupColumn::DestState => "DestState",
        }
    }

    fn extract(&self, record: &FlightRecord) -> KeyValue {
        match self {
            GroupColumn::Month => KeyValue::Month(record.month),
            GroupColumn::ReportingAirline => KeyValue::Text(record.reporting_airline.clone()),
            GroupColumn::DestState => KeyValue::Text(record.dest_state.clone()),
        }
    }
}

/// A numeric column the aggregation can reduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueColumn {
    ArrDelay,
    Flights,
    CarrierDelay,
    WeatherDelay,
    NasDelay,
    SecurityDelay,
    LateAircraftDelay,
}

impl ValueColumn {
    /// Column header name as it appears in the dataset.
    pub fn name(&self) -> &'static str {
        match self {
            ValueColumn::ArrDelay => "ArrDelay",
            ValueColumn::Flights => "Flights",
            ValueColumn::CarrierDelay => "CarrierDelay",
            ValueColumn::WeatherDelay => "WeatherDelay",
            ValueColumn::NasDelay => "NASDelay",
            ValueColumn::SecurityDelay => "SecurityDelay",
            ValueColumn::LateAircraftDelay => "LateAircraftDelay",
        }
    }

    fn extract(&self, record: &FlightRecord) -> Option<f64> {
        match self {
            ValueColumn::ArrDelay => record.arr_delay,
            ValueColumn::Flights => record.flights,
            ValueColumn::CarrierDelay => record.carrier_delay,
            ValueColumn::WeatherDelay => record.weather_delay,
            ValueColumn::NasDelay => record.nas_delay,
            ValueColumn::SecurityDelay => record.security_delay,
            ValueColumn::LateAircraftDelay => record.late_aircraft_delay,
        }
    }
}

/// Reduction applied to each group's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    /// Arithmetic mean, ignoring absent values. All-absent groups yield NaN.
    Mean,
    /// Sum, treating absent values as 0.
    Sum,
}

/// One component of a group key.
///
/// Within a single series every key position holds the same variant, and the
/// derived ordering (month before text, both ascending) gives the ascending
/// key order the charts expect.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyValue {
    Month(u32),
    Text(String),
}

impl KeyValue {
    /// Key rendered as a chart axis label.
    pub fn label(&self) -> String {
        match self {
            KeyValue::Month(m) => m.to_string(),
            KeyValue::Text(s) => s.clone(),
        }
    }
}

/// One row of an aggregated series: the group key plus the reduced value.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRow {
    /// Group key values, one per grouping column, in grouping-column order
    pub key: Vec<KeyValue>,
    /// Reduced value; NaN for an all-absent group under the mean reducer
    pub value: f64,
}

/// The derived table produced by one aggregation, consumed by one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedSeries {
    /// Grouping columns, in the order their values appear in each row key
    pub group_columns: Vec<GroupColumn>,
    /// The reduced column; the output value carries this column's name
    pub value_column: ValueColumn,
    /// One row per distinct key combination, ascending key order
    pub rows: Vec<SeriesRow>,
}

impl AggregatedSeries {
    /// Returns true if the filtered input had no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct groups.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Looks up the reduced value for a single-column key. Test helper.
    pub fn value_for(&self, key: &KeyValue) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.key.len() == 1 && &row.key[0] == key)
            .map(|row| row.value)
    }
}

/// Running totals for one group.
#[derive(Debug, Default)]
struct GroupAccumulator {
    sum: f64,
    present: usize,
}

impl GroupAccumulator {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.present += 1;
        }
    }

    fn finish(&self, reducer: Reducer) -> f64 {
        match reducer {
            // Absent values are excluded from numerator and denominator;
            // a group with no present values divides 0 by 0 and yields NaN.
            Reducer::Mean => self.sum / self.present as f64,
            Reducer::Sum => self.sum,
        }
    }
}

/// Computes one aggregated series from the table.
///
/// # Arguments
/// * `table` - The shared flight table
/// * `year` - Only records with this `Year` participate
/// * `group_columns` - One or two columns whose distinct value combinations
///   define the groups
/// * `value_column` - The numeric column to reduce per group
/// * `reducer` - Mean (absent values ignored) or Sum (absent values are 0)
///
/// # Returns
/// One row per distinct key combination present in the filtered input, in
/// ascending key order. A year with no records yields an empty series, not
/// an error.
///
/// # Behavior
/// A group whose values are all absent yields NaN under `Mean`; the value is
/// passed through unchanged and chart consumers must tolerate it. Calling
/// twice with identical arguments on the same table yields identical output.
pub fn compute_series(
    table: &FlightTable,
    year: i32,
    group_columns: &[GroupColumn],
    value_column: ValueColumn,
    reducer: Reducer,
) -> AggregatedSeries {
    let mut groups: BTreeMap<Vec<KeyValue>, GroupAccumulator> = BTreeMap::new();

    for record in table.filter_year(year) {
        let key: Vec<KeyValue> = group_columns.iter().map(|c| c.extract(record)).collect();
        groups
            .entry(key)
            .or_default()
            .push(value_column.extract(record));
    }

    let rows = groups
        .into_iter()
        .map(|(key, acc)| SeriesRow {
            key,
            value: acc.finish(reducer),
        })
        .collect();

    AggregatedSeries {
        group_columns: group_columns.to_vec(),
        value_column,
        rows,
    }
}

/// Average arrival delay per month for one year.
///
/// Backs the line chart of the airline performance dashboard.
pub fn monthly_mean_arr_delay(table: &FlightTable, year: i32) -> AggregatedSeries {
    compute_series(
        table,
        year,
        &[GroupColumn::Month],
        ValueColumn::ArrDelay,
        Reducer::Mean,
    )
}

/// Total flights per destination state for one year.
///
/// Backs the bar chart of the airline performance dashboard.
pub fn flights_by_dest_state(table: &FlightTable, year: i32) -> AggregatedSeries {
    compute_series(
        table,
        year,
        &[GroupColumn::DestState],
        ValueColumn::Flights,
        Reducer::Sum,
    )
}

/// The five delay categories broken out by the reporting dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayCategory {
    Carrier,
    Weather,
    Nas,
    Security,
    LateAircraft,
}

impl DelayCategory {
    /// All categories, in dashboard display order.
    pub const ALL: [DelayCategory; 5] = [
        DelayCategory::Carrier,
        DelayCategory::Weather,
        DelayCategory::Nas,
        DelayCategory::Security,
        DelayCategory::LateAircraft,
    ];

    /// The dataset column holding this category's delay minutes.
    pub fn value_column(&self) -> ValueColumn {
        match self {
            DelayCategory::Carrier => ValueColumn::CarrierDelay,
            DelayCategory::Weather => ValueColumn::WeatherDelay,
            DelayCategory::Nas => ValueColumn::NasDelay,
            DelayCategory::Security => ValueColumn::SecurityDelay,
            DelayCategory::LateAircraft => ValueColumn::LateAircraftDelay,
        }
    }

    /// Human-readable name used in chart titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            DelayCategory::Carrier => "carrier",
            DelayCategory::Weather => "weather",
            DelayCategory::Nas => "NAS",
            DelayCategory::Security => "security",
            DelayCategory::LateAircraft => "late aircraft",
        }
    }
}

/// Average delay per (month, airline) for one category and year.
///
/// Backs one line chart of the flight delay dashboard, one trace per airline.
pub fn monthly_mean_delay_by_airline(
    table: &FlightTable,
    year: i32,
    category: DelayCategory,
) -> AggregatedSeries {
    compute_series(
        table,
        year,
        &[GroupColumn::Month, GroupColumn::ReportingAirline],
        category.value_column(),
        Reducer::Mean,
    )
}

/// Computes all five delay-category series for one year in display order.
pub fn delay_breakdown(table: &FlightTable, year: i32) -> Vec<(DelayCategory, AggregatedSeries)> {
    DelayCategory::ALL
        .iter()
        .map(|&category| (category, monthly_mean_delay_by_airline(table, year, category)))
        .collect()
}
