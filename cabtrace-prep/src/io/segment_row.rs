use cabtrace_core::segment::Segment;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::date::date_codec::timestamp;

/// a row of the segments table, one per qualifying trip.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SegmentRow {
    pub vehicle_id: String,
    #[serde(with = "crate::io::nested_cell")]
    pub trajectory: Vec<Vec<f64>>,
    #[serde(with = "timestamp")]
    pub start_time: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub end_time: NaiveDateTime,
    /// trip duration in seconds
    pub time_elapsed: i64,
}

impl From<Segment> for SegmentRow {
    fn from(value: Segment) -> Self {
        SegmentRow {
            vehicle_id: value.vehicle_id.0,
            trajectory: value.trajectory,
            start_time: value.start_time,
            end_time: value.end_time,
            time_elapsed: value.time_elapsed,
        }
    }
}
