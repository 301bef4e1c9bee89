pub mod record;
pub mod table;
pub mod aggregate;
pub mod chart;
pub mod loader;
pub mod server;


pub use record::FlightRecord;
pub use table::FlightTable;
pub use aggregate::{
    compute_series,
    delay_breakdown,
    flights_by_dest_state,
    monthly_mean_arr_delay,
    monthly_mean_delay_by_airline,
    AggregatedSeries,
    DelayCategory,
    GroupColumn,
    KeyValue,
    Reducer,
    SeriesRow,
    ValueColumn,
};
pub use chart::{
    arr_delay_figure, bar_figure, delay_category_figure, flights_figure, line_figure,
    line_figure_by_airline, Figure, Layout, Trace, TraceKind,
};
pub use loader::{decode_latin1, parse_csv, DatasetLoader, LoadError, LoaderConfig, DEFAULT_DATA_URL};
pub use server::{run_server, ApiError, AppState, ServerConfig};
