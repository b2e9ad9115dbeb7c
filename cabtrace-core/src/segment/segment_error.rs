#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SegmentError {
    #[error("invalid duration window, min_seconds {min_seconds} exceeds max_seconds {max_seconds}")]
    InvalidWindow { min_seconds: i64, max_seconds: i64 },
    #[error("invalid duration window, bounds must be non-negative, found [{min_seconds}, {max_seconds}]")]
    NegativeWindow { min_seconds: i64, max_seconds: i64 },
}
