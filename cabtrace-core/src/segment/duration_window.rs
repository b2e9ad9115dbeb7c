use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::SegmentError;

/// inclusive range of trip durations, in seconds, that qualify a trip as a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DurationWindowConfig")]
pub struct DurationWindow {
    min_seconds: i64,
    max_seconds: i64,
}

#[derive(Deserialize)]
struct DurationWindowConfig {
    min_seconds: i64,
    max_seconds: i64,
}

impl TryFrom<DurationWindowConfig> for DurationWindow {
    type Error = SegmentError;

    fn try_from(value: DurationWindowConfig) -> Result<Self, Self::Error> {
        DurationWindow::new(value.min_seconds, value.max_seconds)
    }
}

impl DurationWindow {
    pub fn new(min_seconds: i64, max_seconds: i64) -> Result<DurationWindow, SegmentError> {
        if min_seconds < 0 || max_seconds < 0 {
            return Err(SegmentError::NegativeWindow {
                min_seconds,
                max_seconds,
            });
        }
        if min_seconds > max_seconds {
            return Err(SegmentError::InvalidWindow {
                min_seconds,
                max_seconds,
            });
        }
        Ok(DurationWindow {
            min_seconds,
            max_seconds,
        })
    }

    pub fn min_seconds(&self) -> i64 {
        self.min_seconds
    }

    pub fn max_seconds(&self) -> i64 {
        self.max_seconds
    }

    /// true if `seconds` lies within [min_seconds, max_seconds].
    pub fn contains(&self, seconds: i64) -> bool {
        self.min_seconds <= seconds && seconds <= self.max_seconds
    }
}

impl Display for DurationWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}s, {}s]", self.min_seconds, self.max_seconds)
    }
}
