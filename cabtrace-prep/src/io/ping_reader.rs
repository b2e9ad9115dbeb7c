use std::path::Path;

use cabtrace_core::model::{OccupancyStatus, Ping, VehicleId};
use chrono::NaiveDate;
use csv::StringRecord;

use super::create_reader;
use crate::{
    config::{ColumnConfig, TimestampFormat},
    PrepError,
};

/// positions of the configured columns within the header of a file.
struct ColumnIndices {
    vehicle: usize,
    timestamp: usize,
    features: Vec<usize>,
    status: usize,
}

impl ColumnIndices {
    fn new(headers: &StringRecord, columns: &ColumnConfig) -> Result<ColumnIndices, String> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| format!("column '{name}' not found in header"))
        };
        Ok(ColumnIndices {
            vehicle: find(columns.vehicle.as_str())?,
            timestamp: find(columns.timestamp.as_str())?,
            features: columns
                .features
                .iter()
                .map(|f| find(f.as_str()))
                .collect::<Result<Vec<_>, _>>()?,
            status: find(columns.status.as_str())?,
        })
    }
}

/// reads every ping of an input file, in file order.
///
/// any malformed record fails the whole file; no partial result is returned.
/// `file_date` is the calendar date of a daily file, required when the
/// timestamps are times of day.
pub fn read_pings(
    filepath: &Path,
    columns: &ColumnConfig,
    timestamp_format: &TimestampFormat,
    file_date: Option<&NaiveDate>,
) -> Result<Vec<Ping>, PrepError> {
    let filename = filepath.to_str().unwrap_or_default();
    let malformed = |line: u64, msg: String| PrepError::MalformedRecord {
        filepath: filename.to_string(),
        line,
        msg,
    };
    let mut reader = create_reader(filepath)?;
    let headers = reader.headers()?.clone();
    let indices = ColumnIndices::new(&headers, columns).map_err(|msg| malformed(1, msg))?;

    let mut pings = vec![];
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let ping = parse_record(&record, &indices, timestamp_format, file_date)
            .map_err(|msg| malformed(line, msg))?;
        pings.push(ping);
    }
    Ok(pings)
}

fn parse_record(
    record: &StringRecord,
    indices: &ColumnIndices,
    timestamp_format: &TimestampFormat,
    file_date: Option<&NaiveDate>,
) -> Result<Ping, String> {
    let cell = |index: usize| {
        record
            .get(index)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| format!("missing value in column {}", index + 1))
    };
    let vehicle_id = VehicleId::from(cell(indices.vehicle)?);
    let timestamp = timestamp_format.parse(cell(indices.timestamp)?, file_date)?;
    let features = indices
        .features
        .iter()
        .map(|index| {
            let value = cell(*index)?;
            let number = value
                .parse::<f64>()
                .map_err(|e| format!("invalid number '{value}': {e}"))?;
            if number.is_finite() {
                Ok(number)
            } else {
                Err(format!("feature value '{value}' is not a finite number"))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    let status = cell(indices.status)?.parse::<OccupancyStatus>()?;
    Ok(Ping::new(vehicle_id, timestamp, features, status))
}
