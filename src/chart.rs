//! Chart figure construction
//!
//! Maps aggregated series into Plotly-compatible figure specifications. The
//! figures are plain serde structures; the browser hands them to the
//! renderer untouched, so the server never depends on the rendering layer.

use crate::aggregate::{AggregatedSeries, DelayCategory, KeyValue};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A complete chart specification: traces plus layout.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// One plotted trace. NaN values are carried as `None` so they serialize to
/// JSON `null` and the renderer draws a gap.
#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    pub x: Vec<Value>,
    pub y: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

/// Plotly trace type.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Scatter,
    Bar,
}

/// Marker styling for a trace.
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub color: String,
}

/// Chart layout: title and axis titles.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

/// A titled text element.
#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

/// Axis specification.
#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: Title,
}

impl Layout {
    fn new(title: &str, x_title: &str, y_title: &str) -> Self {
        Layout {
            title: Title {
                text: title.to_string(),
            },
            xaxis: Axis {
                title: Title {
                    text: x_title.to_string(),
                },
            },
            yaxis: Axis {
                title: Title {
                    text: y_title.to_string(),
                },
            },
        }
    }
}

fn key_to_value(key: &KeyValue) -> Value {
    match key {
        KeyValue::Month(m) => Value::from(*m),
        KeyValue::Text(s) => Value::from(s.as_str()),
    }
}

fn plot_value(v: f64) -> Option<f64> {
    if v.is_nan() {
        None
    } else {
        Some(v)
    }
}

/// Builds a single-trace line figure from a single-key series.
pub fn line_figure(
    series: &AggregatedSeries,
    title: &str,
    x_title: &str,
    y_title: &str,
    color: &str,
) -> Figure {
    let (x, y) = single_key_points(series);
    Figure {
        data: vec![Trace {
            kind: TraceKind::Scatter,
            x,
            y,
            mode: Some("lines".to_string()),
            name: None,
            marker: Some(Marker {
                color: color.to_string(),
            }),
        }],
        layout: Layout::new(title, x_title, y_title),
    }
}

/// Builds a single-trace bar figure from a single-key series.
pub fn bar_figure(series: &AggregatedSeries, title: &str, x_title: &str, y_title: &str) -> Figure {
    let (x, y) = single_key_points(series);
    Figure {
        data: vec![Trace {
            kind: TraceKind::Bar,
            x,
            y,
            mode: None,
            name: None,
            marker: None,
        }],
        layout: Layout::new(title, x_title, y_title),
    }
}

/// Builds a multi-trace line figure from a (Month, airline) series: one
/// trace per airline, named by the carrier code, months on the x axis.
pub fn line_figure_by_airline(
    series: &AggregatedSeries,
    title: &str,
    x_title: &str,
    y_title: &str,
) -> Figure {
    // Pivot rows into per-airline point lists. Rows arrive in ascending
    // (month, airline) order, so each airline's months stay ascending and
    // the BTreeMap keeps the trace order stable across requests.
    let mut by_airline: BTreeMap<String, (Vec<Value>, Vec<Option<f64>>)> = BTreeMap::new();
    for row in &series.rows {
        if let [month, KeyValue::Text(airline)] = row.key.as_slice() {
            let (x, y) = by_airline.entry(airline.clone()).or_default();
            x.push(key_to_value(month));
            y.push(plot_value(row.value));
        }
    }

    let data = by_airline
        .into_iter()
        .map(|(airline, (x, y))| Trace {
            kind: TraceKind::Scatter,
            x,
            y,
            mode: Some("lines".to_string()),
            name: Some(airline),
            marker: None,
        })
        .collect();

    Figure {
        data,
        layout: Layout::new(title, x_title, y_title),
    }
}

/// Line figure for the performance dashboard: average arrival delay per month.
pub fn arr_delay_figure(series: &AggregatedSeries) -> Figure {
    line_figure(
        series,
        "Month vs Average Flight Delay Time",
        "Month",
        "ArrDelay",
        "green",
    )
}

/// Bar figure for the performance dashboard: total flights per destination state.
pub fn flights_figure(series: &AggregatedSeries) -> Figure {
    bar_figure(series, "Flights to Destination State", "DestState", "Flights")
}

/// Line figure for one delay category of the delay statistics dashboard.
pub fn delay_category_figure(category: DelayCategory, series: &AggregatedSeries) -> Figure {
    let title = format!(
        "Average {} delay time (minutes) by airline",
        category.display_name()
    );
    line_figure_by_airline(series, &title, "Month", series.value_column.name())
}

fn single_key_points(series: &AggregatedSeries) -> (Vec<Value>, Vec<Option<f64>>) {
    let mut x = Vec::with_capacity(series.rows.len());
    let mut y = Vec::with_capacity(series.rows.len());
    for row in &series.rows {
        if let [key] = row.key.as_slice() {
            x.push(key_to_value(key));
            y.push(plot_value(row.value));
        }
    }
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{
        flights_by_dest_state, monthly_mean_arr_delay, monthly_mean_delay_by_airline,
    };
    use crate::record::FlightRecord;
    use crate::table::FlightTable;

    fn record_with_carrier_delay(
        year: i32,
        month: u32,
        airline: &str,
        delay: Option<f64>,
    ) -> FlightRecord {
        let mut record = FlightRecord::new(year, month, airline, "CA", None, Some(1.0));
        record.carrier_delay = delay;
        record
    }

    fn table() -> FlightTable {
        FlightTable::from_records(vec![
            record_with_carrier_delay(2010, 1, "AA", Some(10.0)),
            record_with_carrier_delay(2010, 1, "DL", Some(4.0)),
            record_with_carrier_delay(2010, 2, "AA", Some(6.0)),
        ])
    }

    #[test]
    fn test_line_figure_shape() {
        let t = FlightTable::from_records(vec![
            FlightRecord::new(2010, 1, "AA", "CA", Some(15.0), Some(1.0)),
            FlightRecord::new(2010, 2, "AA", "CA", Some(5.0), Some(1.0)),
        ]);
        let figure = arr_delay_figure(&monthly_mean_arr_delay(&t, 2010));

        assert_eq!(figure.data.len(), 1);
        assert_eq!(figure.data[0].x.len(), 2);
        assert_eq!(figure.data[0].y, vec![Some(15.0), Some(5.0)]);
        assert_eq!(figure.layout.title.text, "Month vs Average Flight Delay Time");
    }

    #[test]
    fn test_bar_figure_uses_state_labels() {
        let t = FlightTable::from_records(vec![
            FlightRecord::new(2010, 1, "AA", "CA", None, Some(3.0)),
            FlightRecord::new(2010, 1, "AA", "TX", None, Some(2.0)),
        ]);
        let figure = flights_figure(&flights_by_dest_state(&t, 2010));

        assert_eq!(figure.data[0].x, vec![Value::from("CA"), Value::from("TX")]);
        assert_eq!(figure.data[0].y, vec![Some(3.0), Some(2.0)]);
    }

    #[test]
    fn test_airline_figure_one_trace_per_airline() {
        let series = monthly_mean_delay_by_airline(&table(), 2010, DelayCategory::Carrier);
        let figure = delay_category_figure(DelayCategory::Carrier, &series);

        assert_eq!(figure.data.len(), 2);
        assert_eq!(figure.data[0].name.as_deref(), Some("AA"));
        assert_eq!(figure.data[0].x, vec![Value::from(1u32), Value::from(2u32)]);
        assert_eq!(figure.data[0].y, vec![Some(10.0), Some(6.0)]);
        assert_eq!(figure.data[1].name.as_deref(), Some("DL"));
        assert_eq!(
            figure.layout.title.text,
            "Average carrier delay time (minutes) by airline"
        );
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let series = monthly_mean_delay_by_airline(
            &FlightTable::from_records(vec![record_with_carrier_delay(2010, 1, "AA", None)]),
            2010,
            DelayCategory::Carrier,
        );
        let figure = delay_category_figure(DelayCategory::Carrier, &series);
        let json = serde_json::to_value(&figure).unwrap();

        assert_eq!(json["data"][0]["y"][0], Value::Null);
    }

    #[test]
    fn test_empty_series_yields_empty_figure() {
        let figure = arr_delay_figure(&monthly_mean_arr_delay(&table(), 1999));
        assert_eq!(figure.data[0].x.len(), 0);
        assert_eq!(figure.data[0].y.len(), 0);
    }
}
