//! Embedded dashboard pages
//!
//! The pages are the rendering collaborator: a year input that re-fetches
//! the figure endpoints on every change and hands the returned figures to
//! Plotly untouched. The server core never depends on them.

/// The airline performance dashboard (arrival delay line + flights bar).
pub const PERFORMANCE_PAGE: &str = include_str!("static/performance.html");

/// The flight delay statistics dashboard (five per-airline delay lines).
pub const DELAY_PAGE: &str = include_str!("static/delay.html");
