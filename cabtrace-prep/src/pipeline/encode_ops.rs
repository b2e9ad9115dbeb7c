use std::{
    fmt::Display,
    path::Path,
    sync::{Arc, Mutex},
};

use cabtrace_core::token::{TokenConfig, TokenEncoder};
use csv::QuoteStyle;
use kdam::{Bar, BarExt};
use rayon::prelude::*;

use crate::{
    io::{create_writer, read_rows, SegmentRow, TokenRow},
    PrepError,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    pub rows: usize,
    pub truncated: usize,
}

impl Display for EncodeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} trajectories encoded, {} truncated",
            self.rows, self.truncated
        )
    }
}

/// encodes the trajectory of every segment row, keeping row order. any
/// trajectory with a point of the wrong width fails the whole run, and the
/// error names the lowest such row.
pub fn encode_rows(
    rows: Vec<SegmentRow>,
    config: TokenConfig,
) -> Result<(Vec<TokenRow>, EncodeSummary), PrepError> {
    let encoder = TokenEncoder::new(config)?;
    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .desc("encode trajectories")
            .total(rows.len())
            .build()
            .map_err(PrepError::InternalError)?,
    ));
    let encoded = rows
        .into_par_iter()
        .enumerate()
        .map(|(row, segment)| {
            if let Ok(mut bar) = bar.clone().lock() {
                let _ = bar.update(1);
            }
            encoder
                .encode(&segment.trajectory)
                .map(|sequence| (sequence, segment.time_elapsed))
                .map_err(|source| PrepError::EncodeError { row, source })
        })
        .collect::<Vec<_>>();
    eprintln!();

    // results are in row order, so the first error is the lowest failing row
    let encoded = encoded.into_iter().collect::<Result<Vec<_>, PrepError>>()?;
    let mut summary = EncodeSummary::default();
    let token_rows = encoded
        .into_iter()
        .map(|(sequence, time_elapsed)| {
            summary.rows += 1;
            if sequence.is_truncated() {
                summary.truncated += 1;
            }
            TokenRow {
                processed_trajectory: sequence.into_tokens(),
                time_elapsed,
            }
        })
        .collect::<Vec<_>>();
    Ok((token_rows, summary))
}

/// reads a segments table, encodes it and writes the tokens table.
pub fn run_encode(
    input_file: &Path,
    output_file: &Path,
    config: TokenConfig,
    overwrite: bool,
) -> Result<EncodeSummary, PrepError> {
    config.validate()?;
    if output_file.exists() && !overwrite {
        return Err(PrepError::OutputExists(
            output_file.to_str().unwrap_or_default().to_string(),
        ));
    }
    let rows: Vec<SegmentRow> = read_rows(input_file)?;
    log::info!(
        "read {} segments from {}",
        rows.len(),
        input_file.to_str().unwrap_or_default()
    );
    let (token_rows, summary) = encode_rows(rows, config)?;
    if summary.truncated > 0 {
        log::warn!(
            "{} of {} trajectories were truncated to max length {}",
            summary.truncated,
            summary.rows,
            config.max_length
        );
    }
    let mut writer = create_writer(output_file, true, QuoteStyle::Necessary, overwrite)?;
    for row in token_rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod test {
    use super::{encode_rows, run_encode};
    use crate::{
        io::{read_rows, SegmentRow, TokenRow},
        PrepError,
    };
    use cabtrace_core::token::{TokenConfig, TokenError};
    use chrono::NaiveDate;
    use tempdir::TempDir;

    fn segment_row(trajectory: Vec<Vec<f64>>, time_elapsed: i64) -> SegmentRow {
        let start_time = NaiveDate::from_ymd_opt(2018, 10, 1)
            .and_then(|d| d.and_hms_opt(8, 0, 0))
            .expect("valid timestamp");
        SegmentRow {
            vehicle_id: String::from("22223"),
            trajectory,
            start_time,
            end_time: start_time + chrono::Duration::seconds(time_elapsed),
            time_elapsed,
        }
    }

    #[test]
    fn test_encode_preserves_order() {
        let rows = (1..=20)
            .map(|n| segment_row(vec![vec![n as f64, 0.5]; n], n as i64 * 60))
            .collect::<Vec<_>>();
        let config = TokenConfig::new(16, 2).expect("valid config");
        let (tokens, summary) = encode_rows(rows, config).expect("encode should succeed");
        assert_eq!(tokens.len(), 20);
        for (i, row) in tokens.iter().enumerate() {
            assert_eq!(row.time_elapsed, (i as i64 + 1) * 60);
            assert_eq!(row.processed_trajectory.len(), 16);
            assert_eq!(row.processed_trajectory[1][0], (i + 1) as f64);
        }
        // n + 2 >= 16 for n in 14..=20
        assert_eq!(summary.truncated, 7);
        assert_eq!(summary.rows, 20);
    }

    #[test]
    fn test_dimension_mismatch_reports_row() {
        let rows = vec![
            segment_row(vec![vec![1.0, 2.0]], 600),
            segment_row(vec![vec![1.0, 2.0], vec![1.0, 2.0, 3.0]], 600),
        ];
        let error = encode_rows(rows, TokenConfig::default()).expect_err("should fail");
        assert!(matches!(
            error,
            PrepError::EncodeError {
                row: 1,
                source: TokenError::DimensionMismatch {
                    index: 1,
                    expected: 2,
                    found: 3
                }
            }
        ));
    }

    #[test]
    fn test_dimension_mismatch_reports_lowest_row() {
        let mut rows = (0..200)
            .map(|_| segment_row(vec![vec![114.05, 22.53]], 600))
            .collect::<Vec<_>>();
        for row in [37, 120, 199] {
            rows[row].trajectory = vec![vec![114.05, 22.53, 1.0]];
        }
        let error = encode_rows(rows, TokenConfig::default()).expect_err("should fail");
        assert!(matches!(error, PrepError::EncodeError { row: 37, .. }));
    }

    #[test]
    fn test_run_encode_writes_tokens() {
        let dir = TempDir::new("cabtrace_encode").expect("temp dir");
        let input = dir.path().join("results.csv");
        let output = dir.path().join("token_traj.csv.gz");
        let mut writer = csv::Writer::from_path(&input).expect("writer");
        writer
            .serialize(segment_row(vec![vec![1.0, 2.0], vec![3.0, 4.0]], 600))
            .expect("serialize row");
        writer.flush().expect("flush");
        drop(writer);

        let config = TokenConfig::new(5, 2).expect("valid config");
        let summary = run_encode(&input, &output, config, false).expect("encode run");
        assert_eq!(summary.rows, 1);
        assert_eq!(summary.truncated, 0);

        let rows: Vec<TokenRow> = read_rows(&output).expect("rows should read");
        assert_eq!(
            rows[0].processed_trajectory,
            vec![
                vec![-20.0, -20.0, -1.0],
                vec![1.0, 2.0, 1.0],
                vec![3.0, 4.0, 2.0],
                vec![20.0, 20.0, -2.0],
                vec![0.0, 0.0, 0.0],
            ]
        );
        assert_eq!(rows[0].time_elapsed, 600);

        // existing output is left alone without overwrite
        let again = run_encode(&input, &output, config, false);
        assert!(matches!(again, Err(PrepError::OutputExists(_))));
        run_encode(&input, &output, config, true).expect("overwrite should succeed");
    }
}
