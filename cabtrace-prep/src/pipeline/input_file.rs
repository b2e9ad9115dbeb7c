use std::path::PathBuf;

use chrono::NaiveDate;
use itertools::Itertools;

use crate::{
    config::SourceConfig,
    date::{date_codec::filename::format_filename, DateIterator},
    PrepError,
};

/// an input file of a run, with the calendar date it covers when the
/// dataset is organized by day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    pub date: Option<NaiveDate>,
}

impl InputFile {
    pub fn filename(&self) -> String {
        self.path.to_str().unwrap_or_default().to_string()
    }
}

/// lists the input files of a source. for a date range every date yields a
/// file whether or not it exists; callers report the missing ones. for a
/// directory, matching files are returned in name order.
pub fn discover_inputs(source: &SourceConfig) -> Result<Vec<InputFile>, PrepError> {
    match source {
        SourceConfig::DateRange {
            directory,
            filename_format,
            start_date,
            end_date,
        } => {
            let files = DateIterator::new(*start_date, Some(*end_date))
                .map(|date| InputFile {
                    path: PathBuf::from(directory).join(format_filename(&date, filename_format)),
                    date: Some(date),
                })
                .collect_vec();
            Ok(files)
        }
        SourceConfig::Directory { directory, suffix } => {
            let entries = std::fs::read_dir(directory).map_err(|e| {
                PrepError::ConfigurationError(format!(
                    "failure reading input directory '{directory}': {e}"
                ))
            })?;
            let mut paths = vec![];
            for entry in entries {
                let path = entry?.path();
                let matches = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(suffix.as_str()));
                if path.is_file() && matches {
                    paths.push(path);
                }
            }
            let files = paths
                .into_iter()
                .sorted()
                .map(|path| InputFile { path, date: None })
                .collect_vec();
            Ok(files)
        }
    }
}
