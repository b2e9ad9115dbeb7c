//! dataset configuration: column layout, timestamp format, input files and
//! the trip duration window.
mod column_config;
mod dataset_config;
mod dataset_preset;
mod source_config;
mod timestamp_format;

pub use column_config::ColumnConfig;
pub use dataset_config::DatasetConfig;
pub use dataset_preset::DatasetPreset;
pub use source_config::SourceConfig;
pub use timestamp_format::TimestampFormat;

/// prefix of environment variables that override dataset configuration, for
/// example `CABTRACE_WINDOW__MIN_SECONDS=300`.
pub const ENV_PREFIX: &str = "CABTRACE";
