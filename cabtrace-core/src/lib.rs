//! trip segmentation and trajectory tokenization for taxi GPS datasets.
//!
//! the [`segment`] module scans time-ordered pings of a single vehicle for
//! occupied trips, the [`token`] module turns the coordinates of a trip into a
//! fixed-length sequence for sequence models, and the [`grid`] module assigns
//! GPS coordinates to a rectangular grid for aggregation.
pub mod grid;
pub mod model;
pub mod segment;
pub mod token;
