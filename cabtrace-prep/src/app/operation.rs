//! operations of the cabtrace command line tool. a typical run goes
//! `segments` -> `max-length` -> `tokens`, with `grid` used to inspect the
//! spatial distribution of a single day of pings.
use std::path::{Path, PathBuf};

use cabtrace_core::{
    grid::{GiniCriterion, DEFAULT_ACCURACY_METERS},
    token::TokenConfig,
};
use chrono::NaiveDate;
use clap::{value_parser, Subcommand};

use crate::{
    config::{DatasetConfig, DatasetPreset},
    pipeline::{
        encode_ops, extract_ops,
        grid_ops::{self, GridSource},
        max_length_ops,
    },
    PrepError,
};

#[derive(Debug, Clone, Subcommand)]
pub enum PrepOperation {
    /// extract occupied trip segments from the raw GPS files of a dataset
    Segments {
        /// dataset providing the default configuration
        #[arg(long, value_enum, default_value_t = DatasetPreset::Shenzhen)]
        preset: DatasetPreset,
        /// TOML file overriding the preset configuration
        #[arg(long)]
        config_file: Option<String>,
        /// directory containing the raw GPS files
        #[arg(long)]
        input_directory: Option<String>,
        /// first date of a date range source
        #[arg(long, value_parser = value_parser!(NaiveDate))]
        start_date: Option<NaiveDate>,
        /// last date (inclusive) of a date range source
        #[arg(long, value_parser = value_parser!(NaiveDate))]
        end_date: Option<NaiveDate>,
        /// segments table to write, gzipped if it ends with .gz
        #[arg(long, default_value_t = String::from("results.csv"))]
        output_file: String,
        #[arg(long)]
        overwrite: bool,
    },
    /// encode the trajectories of a segments table into fixed-length token sequences
    Tokens {
        #[arg(long, default_value_t = String::from("results.csv"))]
        input_file: String,
        #[arg(long, default_value_t = String::from("token_traj.csv"))]
        output_file: String,
        /// number of vectors in every encoded sequence
        #[arg(long, default_value_t = TokenConfig::DEFAULT_MAX_LENGTH)]
        max_length: usize,
        /// number of coordinate values per trajectory point
        #[arg(long, default_value_t = TokenConfig::DEFAULT_DIMENSIONALITY)]
        dimensionality: usize,
        #[arg(long)]
        overwrite: bool,
    },
    /// report the longest trajectory of a segments table
    MaxLength {
        #[arg(long, default_value_t = String::from("results.csv"))]
        input_file: String,
    },
    /// count the pings of one raw GPS file per grid cell
    Grid {
        #[arg(long, value_enum, default_value_t = DatasetPreset::Shenzhen)]
        preset: DatasetPreset,
        #[arg(long)]
        config_file: Option<String>,
        /// raw GPS file to read
        #[arg(long)]
        input_file: String,
        /// calendar date of the file, required for time-of-day timestamps
        #[arg(long, value_parser = value_parser!(NaiveDate))]
        file_date: Option<NaiveDate>,
        /// lon1,lat1,lon2,lat2. when omitted the grid origin is searched by Gini index
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        bounds: Option<Vec<f64>>,
        /// also write empty cells covering the bounds
        #[arg(long, requires = "bounds")]
        full_extent: bool,
        /// side length of a grid cell in meters
        #[arg(long, default_value_t = DEFAULT_ACCURACY_METERS)]
        accuracy: f64,
        /// max, min or median
        #[arg(long, default_value_t = GiniCriterion::Max)]
        gini: GiniCriterion,
        /// candidate origins per axis in the Gini search
        #[arg(long, default_value_t = 10)]
        gap: usize,
        /// points sampled for the Gini search
        #[arg(long, default_value_t = 10000)]
        sample: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = String::from("grid_counts.csv"))]
        output_file: String,
        #[arg(long)]
        overwrite: bool,
    },
}

impl PrepOperation {
    pub fn run(&self) -> Result<(), PrepError> {
        match self {
            PrepOperation::Segments {
                preset,
                config_file,
                input_directory,
                start_date,
                end_date,
                output_file,
                overwrite,
            } => {
                let output_path = Path::new(output_file);
                check_output(output_path, *overwrite)?;
                let mut config = load_config(preset, config_file.as_deref())?;
                if let Some(directory) = input_directory {
                    config.source.set_directory(directory.clone());
                }
                config.source.set_dates(*start_date, *end_date)?;
                let (segments, summary) = extract_ops::run_extract(&config)?;
                extract_ops::write_segments(segments, output_path, *overwrite)?;
                for (filename, error) in summary.files_failed.iter() {
                    log::error!("{filename}: {error}");
                }
                println!("{summary}");
                Ok(())
            }
            PrepOperation::Tokens {
                input_file,
                output_file,
                max_length,
                dimensionality,
                overwrite,
            } => {
                let config = TokenConfig::new(*max_length, *dimensionality)?;
                let summary = encode_ops::run_encode(
                    Path::new(input_file),
                    Path::new(output_file),
                    config,
                    *overwrite,
                )?;
                println!("{summary}");
                Ok(())
            }
            PrepOperation::MaxLength { input_file } => {
                let report = max_length_ops::run_max_length(Path::new(input_file))?;
                println!("{report}");
                Ok(())
            }
            PrepOperation::Grid {
                preset,
                config_file,
                input_file,
                file_date,
                bounds,
                full_extent,
                accuracy,
                gini,
                gap,
                sample,
                seed,
                output_file,
                overwrite,
            } => {
                let output_path = Path::new(output_file);
                check_output(output_path, *overwrite)?;
                let config = load_config(preset, config_file.as_deref())?;
                if config.timestamp.requires_file_date() && file_date.is_none() {
                    return Err(PrepError::ConfigurationError(format!(
                        "--file-date is required to read time-of-day timestamps of {preset:?}"
                    )));
                }
                let source = match bounds {
                    Some(values) => GridSource::Bounds(grid_ops::bounds_from_slice(values)?),
                    None => GridSource::Gini {
                        criterion: *gini,
                        gap: *gap,
                        sample: *sample,
                        seed: *seed,
                    },
                };
                let (mut rows, params) = grid_ops::count_pings(
                    Path::new(input_file),
                    file_date.as_ref(),
                    &config,
                    &source,
                    *accuracy,
                )?;
                if let (true, GridSource::Bounds(extent)) = (*full_extent, &source) {
                    rows = grid_ops::fill_extent(rows, extent, *accuracy)?;
                }
                grid_ops::write_grid_counts(&rows, output_path, *overwrite)?;
                println!(
                    "{} grid cells written, grid origin ({}, {}), cell size ({}, {})",
                    rows.len(),
                    params.lon_start,
                    params.lat_start,
                    params.delta_lon,
                    params.delta_lat
                );
                Ok(())
            }
        }
    }
}

fn load_config(
    preset: &DatasetPreset,
    config_file: Option<&str>,
) -> Result<DatasetConfig, PrepError> {
    let path = config_file.map(PathBuf::from);
    DatasetConfig::load(preset, path.as_deref())
}

/// fails before any work is done when the output would be clobbered.
fn check_output(output_file: &Path, overwrite: bool) -> Result<(), PrepError> {
    if output_file.exists() && !overwrite {
        Err(PrepError::OutputExists(
            output_file.to_str().unwrap_or_default().to_string(),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::app::{PrepApp, PrepOperation};
    use crate::io::{read_rows, SegmentRow, TokenRow};
    use crate::pipeline::grid_ops::GridCountRow;
    use cabtrace_core::grid::GiniCriterion;
    use clap::Parser;
    use std::path::PathBuf;
    use tempdir::TempDir;

    fn resource_dir(name: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("src")
            .join("resources")
            .join(name)
            .to_str()
            .expect("utf-8 path")
            .to_string()
    }

    #[test]
    fn test_parse_grid_arguments() {
        let app = PrepApp::try_parse_from([
            "cabtrace",
            "--parallelism",
            "2",
            "grid",
            "--input-file",
            "2018-10-1.csv",
            "--file-date",
            "2018-10-01",
            "--bounds",
            "113.6,22.4,114.8,22.9",
            "--gini",
            "median",
        ])
        .expect("arguments should parse");
        assert_eq!(app.parallelism, Some(2));
        match app.op {
            PrepOperation::Grid {
                bounds,
                gini,
                accuracy,
                ..
            } => {
                assert_eq!(bounds, Some(vec![113.6, 22.4, 114.8, 22.9]));
                assert_eq!(gini, GiniCriterion::Median);
                assert_eq!(accuracy, 500.0);
            }
            other => panic!("unexpected operation {other:?}"),
        }
    }

    #[test]
    fn test_segments_then_tokens() {
        let dir = TempDir::new("cabtrace_app").expect("temp dir");
        let segments_file = dir.path().join("results.csv");
        let tokens_file = dir.path().join("token_traj.csv");
        let segments_arg = segments_file.to_str().expect("utf-8 path");
        let tokens_arg = tokens_file.to_str().expect("utf-8 path");
        let input_dir = resource_dir("shenzhen");

        let segments = PrepApp::try_parse_from([
            "cabtrace",
            "segments",
            "--preset",
            "shenzhen",
            "--input-directory",
            input_dir.as_str(),
            "--start-date",
            "2018-10-01",
            "--end-date",
            "2018-10-03",
            "--output-file",
            segments_arg,
        ])
        .expect("arguments should parse");
        segments.op.run().expect("segments should run");
        let rows: Vec<SegmentRow> = read_rows(&segments_file).expect("segments table");
        assert_eq!(rows.len(), 3);

        // a second run refuses to replace the table
        assert!(segments.op.run().is_err());

        let tokens = PrepApp::try_parse_from([
            "cabtrace",
            "tokens",
            "--input-file",
            segments_arg,
            "--output-file",
            tokens_arg,
            "--max-length",
            "8",
        ])
        .expect("arguments should parse");
        tokens.op.run().expect("tokens should run");
        let token_rows: Vec<TokenRow> = read_rows(&tokens_file).expect("tokens table");
        assert_eq!(token_rows.len(), 3);
        assert!(token_rows.iter().all(|r| r.processed_trajectory.len() == 8));
        assert_eq!(
            token_rows.iter().map(|r| r.time_elapsed).collect::<Vec<_>>(),
            vec![600, 2400, 1800]
        );
    }

    #[test]
    fn test_grid_requires_file_date_for_time_of_day() {
        let dir = TempDir::new("cabtrace_app").expect("temp dir");
        let output = dir.path().join("grid_counts.csv");
        let input = PathBuf::from(resource_dir("shenzhen")).join("2018-10-1.csv");
        let app = PrepApp::try_parse_from([
            "cabtrace",
            "grid",
            "--input-file",
            input.to_str().expect("utf-8 path"),
            "--output-file",
            output.to_str().expect("utf-8 path"),
        ])
        .expect("arguments should parse");
        assert!(app.op.run().is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_grid_with_bounds() {
        let dir = TempDir::new("cabtrace_app").expect("temp dir");
        let counts_file = dir.path().join("grid_counts.csv");
        let extent_file = dir.path().join("grid_extent.csv");
        let input = PathBuf::from(resource_dir("shenzhen")).join("2018-10-1.csv");
        let run_grid = |output: &PathBuf, full_extent: bool| {
            let mut args = vec![
                "cabtrace",
                "grid",
                "--input-file",
                input.to_str().expect("utf-8 path"),
                "--file-date",
                "2018-10-01",
                "--bounds",
                "114.05,22.53,114.09,22.56",
                "--output-file",
                output.to_str().expect("utf-8 path"),
            ];
            if full_extent {
                args.push("--full-extent");
            }
            let app = PrepApp::try_parse_from(args).expect("arguments should parse");
            app.op.run().expect("grid should run");
            read_rows::<GridCountRow>(output).expect("grid table")
        };

        let counts = run_grid(&counts_file, false);
        assert_eq!(counts.iter().map(|r| r.count).sum::<u64>(), 14);
        assert!(counts.iter().all(|r| r.count > 0));

        let extent = run_grid(&extent_file, true);
        assert_eq!(extent.iter().map(|r| r.count).sum::<u64>(), 14);
        assert!(extent.len() >= 63);
        assert!(extent.len() > counts.len());
    }

    #[test]
    fn test_bounds_need_four_values() {
        let app = PrepApp::try_parse_from([
            "cabtrace",
            "grid",
            "--input-file",
            "2018-10-1.csv",
            "--file-date",
            "2018-10-01",
            "--bounds",
            "113.6,22.4,114.8",
            "--output-file",
            "unused.csv",
        ])
        .expect("arguments should parse");
        assert!(app.op.run().is_err());
        // --full-extent only applies to explicit bounds
        let without_bounds =
            PrepApp::try_parse_from(["cabtrace", "grid", "--input-file", "a.csv", "--full-extent"]);
        assert!(without_bounds.is_err());
    }

    #[test]
    fn test_directory_source_rejects_dates() {
        let app = PrepApp::try_parse_from([
            "cabtrace",
            "segments",
            "--preset",
            "chengdu",
            "--input-directory",
            resource_dir("chengdu").as_str(),
            "--start-date",
            "2014-08-03",
            "--output-file",
            "unused.csv",
        ])
        .expect("arguments should parse");
        assert!(app.op.run().is_err());
    }
}
