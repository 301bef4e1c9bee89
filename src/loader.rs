use crate::record::FlightRecord;
use crate::table::FlightTable;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

/// Default location of the airline on-time performance dataset.
pub const DEFAULT_DATA_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBMDeveloperSkillsNetwork-DV0101EN-SkillsNetwork/Data%20Files/airline_data.csv";

/// Configuration for the dataset loader
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Request timeout in seconds (default: 60)
    pub timeout_seconds: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            timeout_seconds: 60,
        }
    }
}

/// One-time dataset loader.
///
/// Downloads the flight CSV from its fixed URL (or reads it from a local
/// file), decodes ISO-8859-1, and parses it into a [`FlightTable`]. Any
/// failure is fatal to startup; there is no retry path.
#[derive(Debug)]
pub struct DatasetLoader {
    client: Client,
    config: LoaderConfig,
}

impl DatasetLoader {
    /// Creates a loader with default configuration.
    pub fn new() -> Result<Self, LoadError> {
        Self::with_config(LoaderConfig::default())
    }

    /// Creates a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Result<Self, LoadError> {
        let timeout = Duration::from_secs(config.timeout_seconds);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LoadError::ClientCreation(e.to_string()))?;

        Ok(DatasetLoader { client, config })
    }

    /// Downloads and parses the dataset from a URL.
    ///
    /// # Arguments
    /// * `url` - CSV resource location; [`DEFAULT_DATA_URL`] for the
    ///   reference dataset
    ///
    /// # Errors
    /// Returns `LoadError` if the request fails, the server responds with a
    /// non-success status, or the body does not parse as the expected CSV.
    pub async fn fetch(&self, url: &str) -> Result<FlightTable, LoadError> {
        tracing::info!(url, "downloading flight dataset");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Http(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown error")
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let table = parse_csv(&decode_latin1(&bytes))?;
        tracing::info!(records = table.len(), "flight dataset loaded");
        Ok(table)
    }

    /// Reads and parses the dataset from a local file.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<FlightTable, LoadError> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "reading flight dataset");

        let bytes = std::fs::read(path).map_err(|e| LoadError::Io(e.to_string()))?;
        let table = parse_csv(&decode_latin1(&bytes))?;
        tracing::info!(records = table.len(), "flight dataset loaded");
        Ok(table)
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }
}

/// Decodes ISO-8859-1 bytes into a string.
///
/// Latin-1 code points map one-to-one onto Unicode scalar values, so the
/// decode cannot fail.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Parses CSV text (with a header row) into a flight table.
///
/// Record order is preserved. Columns beyond those named by
/// [`FlightRecord`] are ignored.
pub fn parse_csv(text: &str) -> Result<FlightTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: FlightRecord = result?;
        records.push(record);
    }

    Ok(FlightTable::from_records(records))
}

/// Errors that can occur while loading the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// HTTP client creation failed
    ClientCreation(String),
    /// Network error during download
    Network(String),
    /// Server responded with a non-success status
    Http(String),
    /// Local file could not be read
    Io(String),
    /// CSV body could not be parsed
    Parse(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::ClientCreation(msg) => write!(f, "Client creation error: {}", msg),
            LoadError::Network(msg) => write!(f, "Network error: {}", msg),
            LoadError::Http(msg) => write!(f, "Download error: {}", msg),
            LoadError::Io(msg) => write!(f, "File error: {}", msg),
            LoadError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}
