use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// how the timestamp column of an input file is written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum TimestampFormat {
    /// a time of day, combined with the calendar date of the file it was read from
    TimeOfDay { format: String },
    /// a complete date and time
    DateTime { format: String },
}

impl TimestampFormat {
    pub fn requires_file_date(&self) -> bool {
        matches!(self, TimestampFormat::TimeOfDay { .. })
    }

    /// parses a timestamp cell. time-of-day formats need the date of the file.
    pub fn parse(&self, value: &str, file_date: Option<&NaiveDate>) -> Result<NaiveDateTime, String> {
        let value = value.trim();
        match self {
            TimestampFormat::TimeOfDay { format } => {
                let date = file_date.ok_or_else(|| {
                    String::from("time-of-day timestamps require a dated input file")
                })?;
                NaiveTime::parse_from_str(value, format)
                    .map(|time| date.and_time(time))
                    .map_err(|e| format!("invalid time '{value}' for format '{format}': {e}"))
            }
            TimestampFormat::DateTime { format } => NaiveDateTime::parse_from_str(value, format)
                .map_err(|e| format!("invalid timestamp '{value}' for format '{format}': {e}")),
        }
    }
}
