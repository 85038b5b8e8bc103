use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("format error: {0}")]
    Format(#[from] staff_atlas_csvs::CsvError),

    #[error("geocoding error: {0}")]
    Geocode(#[from] staff_atlas_geocode::GeocodeError),

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}
