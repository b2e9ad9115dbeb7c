#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GridError {
    #[error("grid accuracy must be a positive number of meters, found {0}")]
    InvalidAccuracy(f64),
    #[error("grid bounds are not finite: {0}")]
    InvalidBounds(String),
    #[error("gini search gap must be at least 1")]
    InvalidGap,
    #[error("gini search sample size must be at least 1")]
    InvalidSampleSize,
    #[error("cannot search grid parameters without any points")]
    EmptyInput,
    #[error("unknown gini criterion '{0}', expected one of max, min, median")]
    UnknownCriterion(String),
}
