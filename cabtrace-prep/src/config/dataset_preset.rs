use cabtrace_core::segment::DurationWindow;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{ColumnConfig, DatasetConfig, SourceConfig, TimestampFormat};
use crate::{date::date_codec::filename::DEFAULT_FILENAME_FORMAT, PrepError};

/// default configurations for the supported taxi datasets.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DatasetPreset {
    /// Shenzhen taxi GPS, one `yyyy-m-d.csv` file per day with time-of-day
    /// timestamps. keeps trips of 3 minutes to 2 hours.
    Shenzhen,
    /// Chengdu taxi GPS with hour of day and traffic intensity features, a
    /// directory of `*traffic_average.csv` files. keeps trips of 10 to 50 minutes.
    Chengdu,
}

impl DatasetPreset {
    pub fn dataset_config(&self) -> Result<DatasetConfig, PrepError> {
        match self {
            DatasetPreset::Shenzhen => {
                let start_date = preset_date(2018, 10, 1)?;
                let end_date = preset_date(2018, 10, 30)?;
                Ok(DatasetConfig {
                    columns: ColumnConfig {
                        vehicle: String::from("VehicleNum"),
                        timestamp: String::from("time"),
                        features: vec![String::from("longitude"), String::from("latitude")],
                        status: String::from("status"),
                    },
                    timestamp: TimestampFormat::TimeOfDay {
                        format: String::from("%H:%M:%S"),
                    },
                    source: SourceConfig::DateRange {
                        directory: String::from("shenzhen/taxi"),
                        filename_format: String::from(DEFAULT_FILENAME_FORMAT),
                        start_date,
                        end_date,
                    },
                    window: DurationWindow::new(180, 7200)?,
                })
            }
            DatasetPreset::Chengdu => Ok(DatasetConfig {
                columns: ColumnConfig {
                    vehicle: String::from("VehicleNum"),
                    timestamp: String::from("Time"),
                    features: vec![
                        String::from("Lng"),
                        String::from("Lat"),
                        String::from("Hour"),
                        String::from("traffic"),
                    ],
                    status: String::from("Status"),
                },
                timestamp: TimestampFormat::DateTime {
                    format: String::from("%Y/%m/%d %H:%M:%S"),
                },
                source: SourceConfig::Directory {
                    directory: String::from("data"),
                    suffix: String::from("traffic_average.csv"),
                },
                window: DurationWindow::new(600, 3000)?,
            }),
        }
    }
}

fn preset_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, PrepError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        PrepError::InternalError(format!("invalid preset date {year}-{month}-{day}"))
    })
}
