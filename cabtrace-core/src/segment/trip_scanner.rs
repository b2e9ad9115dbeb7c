use crate::model::{OccupancyStatus, Ping};

use super::{DurationWindow, Segment};

/// state of a [`TripScanner`] between two pings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanState {
    /// no occupied ping has been seen since the last trip closed
    #[default]
    Idle,
    /// a trip began at the ping with index `start`
    TripOpen { start: usize },
}

/// single pass over the time-ordered pings of one vehicle, yielding every trip
/// that closes within the duration window.
///
/// a trip opens at the first occupied ping seen while idle and closes at the
/// next free ping. further occupied pings while a trip is open do not move its
/// start, and free pings while idle are ignored. a trip that is still open when
/// the pings run out is dropped.
pub struct TripScanner<'a> {
    pings: &'a [Ping],
    window: DurationWindow,
    state: ScanState,
    cursor: usize,
}

impl<'a> TripScanner<'a> {
    pub fn new(pings: &'a [Ping], window: DurationWindow) -> TripScanner<'a> {
        TripScanner {
            pings,
            window,
            state: ScanState::Idle,
            cursor: 0,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// builds the segment for the trip spanning pings `start..=end`, if its
    /// duration qualifies.
    fn close_trip(&self, start: usize, end: usize) -> Option<Segment> {
        let first = &self.pings[start];
        let last = &self.pings[end];
        let time_elapsed = (last.timestamp - first.timestamp).num_seconds();
        if !self.window.contains(time_elapsed) {
            log::trace!(
                "vehicle {} trip at {} lasted {time_elapsed}s, outside of {}",
                first.vehicle_id,
                first.timestamp,
                self.window
            );
            return None;
        }
        let trajectory = self.pings[start..=end]
            .iter()
            .map(|p| p.features.clone())
            .collect();
        Some(Segment {
            vehicle_id: first.vehicle_id.clone(),
            trajectory,
            start_time: first.timestamp,
            end_time: last.timestamp,
            time_elapsed,
        })
    }
}

impl Iterator for TripScanner<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.pings.len() {
            let index = self.cursor;
            self.cursor += 1;
            match (self.state, self.pings[index].status) {
                (ScanState::Idle, OccupancyStatus::Occupied) => {
                    self.state = ScanState::TripOpen { start: index };
                }
                (ScanState::TripOpen { start }, OccupancyStatus::Free) => {
                    self.state = ScanState::Idle;
                    if let Some(segment) = self.close_trip(start, index) {
                        return Some(segment);
                    }
                }
                _ => {}
            }
        }
        if let ScanState::TripOpen { start } = self.state {
            log::trace!(
                "dropping unclosed trip of vehicle {} starting at {}",
                self.pings[start].vehicle_id,
                self.pings[start].timestamp
            );
            self.state = ScanState::Idle;
        }
        None
    }
}
