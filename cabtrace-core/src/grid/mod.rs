//! rectangular grids over WGS84 coordinates.
//!
//! cells are sized in meters and converted to degree deltas in closed form
//! using a spherical earth, so no reprojection is involved.
mod gini;
mod grid_cell;
mod grid_error;
mod grid_ops;
mod grid_params;

pub use gini::{gini_index, search_params_by_gini, GiniCriterion, GiniSearch};
pub use grid_cell::GridCell;
pub use grid_error::GridError;
pub use grid_ops::{count_by_cell, rect_grid};
pub use grid_params::GridParams;

/// earth radius used when converting meters to degrees
pub const EARTH_RADIUS_METERS: f64 = 6371004.0;
/// default side length of a grid cell in meters
pub const DEFAULT_ACCURACY_METERS: f64 = 500.0;
