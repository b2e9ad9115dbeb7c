use std::path::Path;

use cabtrace_core::segment::DurationWindow;
use config::Config;
use serde::{Deserialize, Serialize};

use super::{ColumnConfig, DatasetPreset, SourceConfig, TimestampFormat, ENV_PREFIX};
use crate::PrepError;

/// everything needed to turn the raw files of a dataset into segments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub columns: ColumnConfig,
    pub timestamp: TimestampFormat,
    pub source: SourceConfig,
    pub window: DurationWindow,
}

impl DatasetConfig {
    /// builds the configuration for a run. values come from the preset, then
    /// from the optional TOML file, then from `CABTRACE_` environment variables,
    /// each layer overriding the previous one.
    pub fn load(
        preset: &DatasetPreset,
        config_file: Option<&Path>,
    ) -> Result<DatasetConfig, PrepError> {
        let defaults = preset.dataset_config()?;
        let default_source =
            Config::try_from(&defaults).map_err(|e| PrepError::ConfigReadError {
                msg: format!("failed converting {preset:?} preset to configuration"),
                source: e,
            })?;
        let mut builder = Config::builder().add_source(default_source);
        if let Some(path) = config_file {
            let filepath = path.to_str().unwrap_or_default();
            log::info!("reading dataset configuration from {filepath}");
            builder = builder.add_source(config::File::new(filepath, config::FileFormat::Toml));
        }
        let environment = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        let config = builder
            .add_source(environment)
            .build()
            .map_err(|e| PrepError::ConfigReadError {
                msg: String::from("failed reading dataset configuration"),
                source: e,
            })?;
        let dataset = config
            .try_deserialize::<DatasetConfig>()
            .map_err(|e| PrepError::ConfigReadError {
                msg: String::from("failed decoding dataset configuration"),
                source: e,
            })?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn validate(&self) -> Result<(), PrepError> {
        if self.columns.features.len() < 2 {
            return Err(PrepError::ConfigurationError(format!(
                "at least the longitude and latitude feature columns are required, found {:?}",
                self.columns.features
            )));
        }
        if let SourceConfig::DateRange {
            start_date,
            end_date,
            ..
        } = &self.source
        {
            if end_date < start_date {
                return Err(PrepError::ConfigurationError(format!(
                    "end date {end_date} is before start date {start_date}"
                )));
            }
        }
        if self.timestamp.requires_file_date()
            && matches!(self.source, SourceConfig::Directory { .. })
        {
            return Err(PrepError::ConfigurationError(String::from(
                "time-of-day timestamps can only be read from a date range source",
            )));
        }
        Ok(())
    }
}
