//! reading and writing of the tabular files of a run.
pub mod nested_cell;
mod ping_reader;
mod segment_row;
mod token_row;
mod writer_ops;

pub use ping_reader::read_pings;
pub use segment_row::SegmentRow;
pub use token_row::TokenRow;
pub use writer_ops::{create_reader, create_writer, read_rows};
