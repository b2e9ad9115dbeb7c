use serde::{Deserialize, Serialize};

/// names of the columns read from each input file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub vehicle: String,
    pub timestamp: String,
    /// coordinate features of a ping, in the order they are written to the
    /// trajectory. longitude and latitude must come first.
    pub features: Vec<String>,
    pub status: String,
}

impl ColumnConfig {
    pub fn dimensionality(&self) -> usize {
        self.features.len()
    }
}
