#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TokenError {
    #[error("point {index} has {found} coordinates, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("dimensionality must be at least 2 to hold the sentinel coordinates, found {0}")]
    InvalidDimensionality(usize),
    #[error("max_length must be positive")]
    InvalidMaxLength,
}
