use thiserror::Error;

pub type CsvResult<T> = Result<T, CsvError>;

/// File-level format errors. Fatal to the whole import; per-row issues are
/// handled by defaulting or skipping and never surface here.
#[derive(Error, Debug)]
pub enum CsvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file must contain a header line and at least one data row")]
    TooFewLines,

    #[error("header contains none of the required columns (expected one of: {0})")]
    MissingHeaderTokens(String),
}
