use std::{fmt::Display, path::Path};

use cabtrace_core::token::{TokenConfig, TokenEncoder};

use crate::{
    io::{read_rows, SegmentRow},
    PrepError,
};

/// trajectory length statistics of a segments table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxLengthReport {
    pub segments: usize,
    pub longest: usize,
}

impl MaxLengthReport {
    pub fn from_rows(rows: &[SegmentRow]) -> MaxLengthReport {
        let longest = rows
            .iter()
            .map(|row| row.trajectory.len())
            .max()
            .unwrap_or_default();
        MaxLengthReport {
            segments: rows.len(),
            longest,
        }
    }

    /// smallest max length that encodes every trajectory without truncation:
    /// the points, both sentinels, and at least one padding vector.
    pub fn recommended_max_length(&self) -> usize {
        self.longest + 3
    }

    /// encodes the longest trajectory of `rows` at the recommended max length
    /// and checks that it decodes back without loss.
    pub fn verify(&self, rows: &[SegmentRow]) -> Result<(), PrepError> {
        let Some(longest) = rows
            .iter()
            .filter(|row| row.trajectory.len() == self.longest)
            .map(|row| &row.trajectory)
            .next()
        else {
            return Ok(());
        };
        let Some(dimensionality) = longest.first().map(|point| point.len()) else {
            return Ok(());
        };
        let config = TokenConfig::new(self.recommended_max_length(), dimensionality)?;
        let sequence = TokenEncoder::new(config)?.encode(longest)?;
        if sequence.is_truncated() || &sequence.decode() != longest {
            return Err(PrepError::InternalError(format!(
                "max length {} does not hold a trajectory of {} points",
                config.max_length, self.longest
            )));
        }
        Ok(())
    }
}

impl Display for MaxLengthReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "maximum trajectory length over {} segments: {}, smallest max length without truncation: {}",
            self.segments,
            self.longest,
            self.recommended_max_length()
        )
    }
}

pub fn run_max_length(input_file: &Path) -> Result<MaxLengthReport, PrepError> {
    let rows: Vec<SegmentRow> = read_rows(input_file)?;
    let report = MaxLengthReport::from_rows(&rows);
    report.verify(&rows)?;
    Ok(report)
}
