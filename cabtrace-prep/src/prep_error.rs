use cabtrace_core::{grid::GridError, segment::SegmentError, token::TokenError};

#[derive(thiserror::Error, Debug)]
pub enum PrepError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("malformed record in '{filepath}' at line {line}: {msg}")]
    MalformedRecord {
        filepath: String,
        line: u64,
        msg: String,
    },
    #[error("malformed nested cell: {0}")]
    NestedCellError(String),
    #[error("output file '{0}' already exists, use --overwrite to replace it")]
    OutputExists(String),
    #[error("failure encoding trajectory in row {row}: {source}")]
    EncodeError { row: usize, source: TokenError },
    #[error(transparent)]
    SegmentError(#[from] SegmentError),
    #[error(transparent)]
    TokenError(#[from] TokenError),
    #[error(transparent)]
    GridError(#[from] GridError),
    #[error("failure reading or writing csv: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("{0}")]
    InternalError(String),
}
