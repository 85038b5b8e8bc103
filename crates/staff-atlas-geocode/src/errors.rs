use thiserror::Error;

pub type GeocodeResult<T> = Result<T, GeocodeError>;

/// Errors local to a geocoding call. These never affect the dataset codec.
#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("address must not be empty")]
    EmptyAddress,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("address not found: {0}")]
    NotFound(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cache IO error: {0}")]
    CacheIo(#[from] std::io::Error),

    #[error("cache format error: {0}")]
    CacheFormat(#[from] serde_json::Error),
}
