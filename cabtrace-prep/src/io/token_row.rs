use serde::{Deserialize, Serialize};

/// a row of the tokens table: the fixed-length encoding of one segment along
/// with its duration label.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TokenRow {
    #[serde(with = "crate::io::nested_cell")]
    pub processed_trajectory: Vec<Vec<f64>>,
    /// trip duration in seconds
    pub time_elapsed: i64,
}
