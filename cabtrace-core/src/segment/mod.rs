//! extraction of occupied trips from the pings of a vehicle.
mod duration_window;
mod segment_error;
mod segment_ops;
mod trip_scanner;
mod trip_segment;

pub use duration_window::DurationWindow;
pub use segment_error::SegmentError;
pub use segment_ops::{extract_all, extract_segments, partition_by_vehicle};
pub use trip_scanner::{ScanState, TripScanner};
pub use trip_segment::Segment;
