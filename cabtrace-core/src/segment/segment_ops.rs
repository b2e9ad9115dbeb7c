use itertools::Itertools;
use rayon::prelude::*;

use crate::model::{Ping, VehicleId};

use super::{DurationWindow, Segment, TripScanner};

/// extracts the qualifying trips from the time-ordered pings of a single vehicle.
pub fn extract_segments(pings: &[Ping], window: &DurationWindow) -> Vec<Segment> {
    TripScanner::new(pings, *window).collect()
}

/// splits a ping collection into one sequence per vehicle. the relative order
/// of the pings of each vehicle is preserved and partitions are sorted by
/// vehicle identifier.
pub fn partition_by_vehicle(pings: Vec<Ping>) -> Vec<(VehicleId, Vec<Ping>)> {
    pings
        .into_iter()
        .map(|p| (p.vehicle_id.clone(), p))
        .into_group_map()
        .into_iter()
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .collect_vec()
}

/// partitions pings by vehicle and runs the trip scan on each partition in
/// parallel. segments come back grouped by vehicle identifier in ascending
/// order, and in trip order within each vehicle.
pub fn extract_all(pings: Vec<Ping>, window: &DurationWindow) -> Vec<Segment> {
    let partitions = partition_by_vehicle(pings);
    log::debug!("scanning trips of {} vehicles", partitions.len());
    partitions
        .par_iter()
        .map(|(_, vehicle_pings)| extract_segments(vehicle_pings, window))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}
