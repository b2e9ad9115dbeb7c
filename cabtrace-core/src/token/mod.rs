//! fixed-length encoding of trajectories for sequence models.
//!
//! a trajectory of `n` points of dimensionality `d` becomes
//! `[start] + points + [end]` followed by zero padding, where every vector has
//! width `d + 1`. the extra channel holds the 1-based position of a point, or a
//! negative flag for the sentinels.
mod token_config;
mod token_encoder;
mod token_error;
mod token_sequence;

pub use token_config::TokenConfig;
pub use token_encoder::TokenEncoder;
pub use token_error::TokenError;
pub use token_sequence::TokenSequence;

/// value of the first two channels of the start sentinel
pub const START_SENTINEL_VALUE: f64 = -20.0;
/// value of the first two channels of the end sentinel
pub const END_SENTINEL_VALUE: f64 = 20.0;
/// position channel of the start sentinel
pub const START_FLAG: f64 = -1.0;
/// position channel of the end sentinel
pub const END_FLAG: f64 = -2.0;
