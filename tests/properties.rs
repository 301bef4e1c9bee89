use flightstats::aggregate::{
    compute_series, flights_by_dest_state, monthly_mean_arr_delay, GroupColumn, KeyValue, Reducer,
    ValueColumn,
};
use flightstats::record::FlightRecord;
use flightstats::table::FlightTable;

fn record(year: i32, month: u32, airline: &str, state: &str, delay: Option<f64>) -> FlightRecord {
    FlightRecord::new(year, month, airline, state, delay, Some(1.0))
}

fn mixed_years_table() -> FlightTable {
    FlightTable::from_records(vec![
        record(2008, 4, "WN", "CA", Some(3.0)),
        record(2009, 4, "WN", "CA", Some(8.0)),
        record(2009, 5, "AA", "TX", Some(-6.0)),
        record(2009, 5, "AA", "TX", None),
        record(2010, 1, "DL", "GA", Some(14.0)),
    ])
}

#[test]
fn filtering_keeps_only_the_requested_year() {
    let table = mixed_years_table();

    for year in table.years() {
        let series = compute_series(
            &table,
            year,
            &[GroupColumn::Month],
            ValueColumn::ArrDelay,
            Reducer::Mean,
        );
        let months_in_year: Vec<u32> = {
            let mut months: Vec<u32> = table.filter_year(year).map(|r| r.month).collect();
            months.sort_unstable();
            months.dedup();
            months
        };
        let months_in_series: Vec<u32> = series
            .rows
            .iter()
            .filter_map(|row| match row.key.as_slice() {
                [KeyValue::Month(m)] => Some(*m),
                _ => None,
            })
            .collect();
        assert_eq!(months_in_series, months_in_year);
    }
}

#[test]
fn absent_year_returns_empty_series() {
    let table = mixed_years_table();
    for year in [1987, 2003, 2024] {
        assert!(!table.contains_year(year));
        let series = monthly_mean_arr_delay(&table, year);
        assert!(series.is_empty());
    }
}

#[test]
fn compute_series_is_idempotent() {
    let table = mixed_years_table();
    let first = compute_series(
        &table,
        2009,
        &[GroupColumn::Month, GroupColumn::ReportingAirline],
        ValueColumn::ArrDelay,
        Reducer::Mean,
    );
    let second = compute_series(
        &table,
        2009,
        &[GroupColumn::Month, GroupColumn::ReportingAirline],
        ValueColumn::ArrDelay,
        Reducer::Mean,
    );
    assert_eq!(first, second);
}

#[test]
fn grouped_flight_sums_match_the_ungrouped_total() {
    let table = FlightTable::from_records(vec![
        FlightRecord::new(2010, 1, "AA", "CA", None, Some(3.0)),
        FlightRecord::new(2010, 2, "DL", "CA", None, Some(7.0)),
        FlightRecord::new(2010, 3, "WN", "TX", None, Some(2.0)),
        FlightRecord::new(2010, 3, "WN", "NV", None, None),
        FlightRecord::new(2011, 1, "AA", "CA", None, Some(100.0)),
    ]);

    let series = flights_by_dest_state(&table, 2010);
    let grouped_total: f64 = series.rows.iter().map(|r| r.value).sum();
    let direct_total: f64 = table.filter_year(2010).filter_map(|r| r.flights).sum();

    assert_eq!(grouped_total, direct_total);
    assert_eq!(grouped_total, 12.0);
}

#[test]
fn group_means_stay_within_the_input_bounds() {
    let table = FlightTable::from_records(vec![
        record(2010, 1, "AA", "CA", Some(-5.0)),
        record(2010, 1, "AA", "CA", Some(40.0)),
        record(2010, 1, "AA", "CA", None),
        record(2010, 1, "AA", "CA", Some(12.5)),
    ]);

    let series = monthly_mean_arr_delay(&table, 2010);
    let mean = series.value_for(&KeyValue::Month(1)).unwrap();
    assert!(mean >= -5.0);
    assert!(mean <= 40.0);
}

#[test]
fn monthly_mean_scenario_from_three_records() {
    let table = FlightTable::from_records(vec![
        record(2010, 1, "AA", "CA", Some(10.0)),
        record(2010, 1, "AA", "CA", Some(20.0)),
        record(2010, 2, "AA", "CA", Some(5.0)),
    ]);

    let series = monthly_mean_arr_delay(&table, 2010);
    assert_eq!(series.len(), 2);
    assert_eq!(series.value_for(&KeyValue::Month(1)), Some(15.0));
    assert_eq!(series.value_for(&KeyValue::Month(2)), Some(5.0));
}

#[test]
fn dest_state_sum_scenario() {
    let table = FlightTable::from_records(vec![
        FlightRecord::new(2010, 1, "AA", "CA", None, Some(3.0)),
        FlightRecord::new(2010, 1, "DL", "CA", None, Some(7.0)),
        FlightRecord::new(2010, 1, "WN", "TX", None, Some(2.0)),
    ]);

    let series = flights_by_dest_state(&table, 2010);
    assert_eq!(series.len(), 2);
    assert_eq!(series.value_for(&KeyValue::Text("CA".into())), Some(10.0));
    assert_eq!(series.value_for(&KeyValue::Text("TX".into())), Some(2.0));
}
