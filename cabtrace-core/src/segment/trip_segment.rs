use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::VehicleId;

/// an occupied trip of a single vehicle whose duration fell within the
/// configured window. the trajectory runs from the first occupied ping up to
/// and including the first free ping that follows it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub vehicle_id: VehicleId,
    pub trajectory: Vec<Vec<f64>>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// seconds between start_time and end_time
    pub time_elapsed: i64,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.trajectory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectory.is_empty()
    }
}
