use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{OccupancyStatus, VehicleId};

/// a single GPS observation of a vehicle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ping {
    pub vehicle_id: VehicleId,
    pub timestamp: NaiveDateTime,
    /// coordinate features in dataset order. the first two values are always
    /// longitude and latitude, some datasets append further features such as
    /// hour of day or traffic intensity.
    pub features: Vec<f64>,
    pub status: OccupancyStatus,
}

impl Ping {
    pub fn new(
        vehicle_id: VehicleId,
        timestamp: NaiveDateTime,
        features: Vec<f64>,
        status: OccupancyStatus,
    ) -> Ping {
        Ping {
            vehicle_id,
            timestamp,
            features,
            status,
        }
    }

    pub fn longitude(&self) -> Option<f64> {
        self.features.first().copied()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.features.get(1).copied()
    }
}
