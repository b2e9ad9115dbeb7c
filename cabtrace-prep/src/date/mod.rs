pub mod date_codec;
mod date_iterator;

pub use date_iterator::DateIterator;
