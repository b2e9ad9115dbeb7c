use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// opaque identifier of a taxi as it appears in the source dataset.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub String);

impl Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VehicleId {
    fn from(value: &str) -> Self {
        VehicleId(value.to_string())
    }
}

impl From<String> for VehicleId {
    fn from(value: String) -> Self {
        VehicleId(value)
    }
}
