//! batch operations of the command line application.
pub mod encode_ops;
pub mod extract_ops;
pub mod grid_ops;
mod input_file;
pub mod max_length_ops;

pub use input_file::{discover_inputs, InputFile};
