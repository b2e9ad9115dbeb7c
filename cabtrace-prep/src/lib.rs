pub mod app;
pub mod config;
pub mod date;
pub mod io;
pub mod pipeline;
mod prep_error;

pub use prep_error::PrepError;
