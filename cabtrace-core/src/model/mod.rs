mod occupancy_status;
mod ping;
mod vehicle_id;

pub use occupancy_status::OccupancyStatus;
pub use ping::Ping;
pub use vehicle_id::VehicleId;
