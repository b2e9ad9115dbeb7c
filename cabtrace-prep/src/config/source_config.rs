use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::PrepError;

/// where the input files of a dataset are found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum SourceConfig {
    /// one file per calendar day, named by `filename_format` (a strftime
    /// template), for every date in [start_date, end_date].
    DateRange {
        directory: String,
        filename_format: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
    /// every file in `directory` whose name ends with `suffix`.
    Directory { directory: String, suffix: String },
}

impl SourceConfig {
    pub fn directory(&self) -> &str {
        match self {
            SourceConfig::DateRange { directory, .. } => directory,
            SourceConfig::Directory { directory, .. } => directory,
        }
    }

    pub fn set_directory(&mut self, value: String) {
        match self {
            SourceConfig::DateRange { directory, .. } => *directory = value,
            SourceConfig::Directory { directory, .. } => *directory = value,
        }
    }

    /// replaces either end of a date range. a directory source has no dates
    /// to replace.
    pub fn set_dates(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<(), PrepError> {
        if start.is_none() && end.is_none() {
            return Ok(());
        }
        match self {
            SourceConfig::DateRange {
                start_date,
                end_date,
                ..
            } => {
                if let Some(start) = start {
                    *start_date = start;
                }
                if let Some(end) = end {
                    *end_date = end;
                }
                Ok(())
            }
            SourceConfig::Directory { directory, .. } => Err(PrepError::ConfigurationError(
                format!("directory source '{directory}' does not take a date range"),
            )),
        }
    }
}
