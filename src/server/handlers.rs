//! HTTP request handlers for the dashboard endpoints
//!
//! Each figure has its own distinctly named builder and response field, so
//! no chart's update path can shadow another's.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use super::error::ApiError;
use super::pages;
use super::state::AppState;
use crate::aggregate::{
    flights_by_dest_state, monthly_mean_arr_delay, monthly_mean_delay_by_airline, DelayCategory,
};
use crate::chart::{arr_delay_figure, delay_category_figure, flights_figure, Figure};
use crate::table::FlightTable;

/// Health check endpoint
///
/// Returns a simple status response to verify the server is running
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

/// GET / - The airline performance dashboard page
pub async fn performance_page() -> Html<&'static str> {
    Html(pages::PERFORMANCE_PAGE)
}

/// GET /delay - The flight delay statistics dashboard page
pub async fn delay_page() -> Html<&'static str> {
    Html(pages::DELAY_PAGE)
}

/// Response for the years listing
#[derive(Debug, Serialize)]
pub struct YearsResponse {
    /// Distinct years present in the dataset, ascending
    pub years: Vec<i32>,
    /// Total number of records loaded
    pub records: usize,
}

/// GET /years - Distinct years available in the loaded table
pub async fn list_years(State(state): State<Arc<AppState>>) -> Json<YearsResponse> {
    Json(YearsResponse {
        years: state.table.years(),
        records: state.table.len(),
    })
}

/// Query parameters for the figure endpoints
#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: Option<String>,
}

/// Parses the year parameter, surfacing a 400 for missing or non-integer
/// input. A valid year that is absent from the table is not an error; the
/// aggregations return empty series for it.
fn parse_year(params: &YearQuery) -> Result<i32, ApiError> {
    let raw = params
        .year
        .as_deref()
        .ok_or_else(|| ApiError::InvalidYear("Missing 'year' parameter".to_string()))?;

    raw.trim()
        .parse::<i32>()
        .map_err(|_| ApiError::InvalidYear(format!("'{}' is not a valid year", raw)))
}

/// Response for the performance dashboard figures
#[derive(Debug, Serialize)]
pub struct PerformanceResponse {
    pub year: i32,
    /// True when the table has no records for the requested year, so the
    /// page can show an explicit message instead of blank charts
    pub no_data: bool,
    /// Line figure: average arrival delay per month
    pub arr_delay: Figure,
    /// Bar figure: total flights per destination state
    pub flights: Figure,
}

/// GET /api/performance?year=Y - Figures for the performance dashboard
pub async fn performance_figures(
    State(state): State<Arc<AppState>>,
    Query(params): Query<YearQuery>,
) -> Result<Json<PerformanceResponse>, ApiError> {
    let year = parse_year(&params)?;
    let table = &state.table;

    let delay_series = monthly_mean_arr_delay(table, year);
    let flights_series = flights_by_dest_state(table, year);

    Ok(Json(PerformanceResponse {
        year,
        no_data: !table.contains_year(year),
        arr_delay: arr_delay_figure(&delay_series),
        flights: flights_figure(&flights_series),
    }))
}

/// Response for the delay statistics dashboard figures
#[derive(Debug, Serialize)]
pub struct DelaysResponse {
    pub year: i32,
    /// True when the table has no records for the requested year
    pub no_data: bool,
    pub carrier: Figure,
    pub weather: Figure,
    pub nas: Figure,
    pub security: Figure,
    pub late_aircraft: Figure,
}

fn category_figure(table: &FlightTable, year: i32, category: DelayCategory) -> Figure {
    delay_category_figure(
        category,
        &monthly_mean_delay_by_airline(table, year, category),
    )
}

/// GET /api/delays?year=Y - The five delay-category figures
pub async fn delay_figures(
    State(state): State<Arc<AppState>>,
    Query(params): Query<YearQuery>,
) -> Result<Json<DelaysResponse>, ApiError> {
    let year = parse_year(&params)?;
    let table = &state.table;

    Ok(Json(DelaysResponse {
        year,
        no_data: !table.contains_year(year),
        carrier: category_figure(table, year, DelayCategory::Carrier),
        weather: category_figure(table, year, DelayCategory::Weather),
        nas: category_figure(table, year, DelayCategory::Nas),
        security: category_figure(table, year, DelayCategory::Security),
        late_aircraft: category_figure(table, year, DelayCategory::LateAircraft),
    }))
}
