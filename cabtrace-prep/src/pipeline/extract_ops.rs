use std::{fmt::Display, path::Path};

use cabtrace_core::segment::{self, Segment};
use csv::QuoteStyle;
use kdam::tqdm;

use super::{discover_inputs, InputFile};
use crate::{
    config::DatasetConfig,
    io::{create_writer, read_pings, SegmentRow},
    PrepError,
};

/// result of extracting segments from a single input file.
#[derive(Debug)]
pub enum FileOutcome {
    Processed(Vec<Segment>),
    Missing,
    Failed(PrepError),
}

/// tally of an extraction run across its input files.
#[derive(Debug, Default)]
pub struct ExtractSummary {
    pub files_processed: usize,
    pub files_missing: Vec<String>,
    pub files_failed: Vec<(String, String)>,
    pub segments: usize,
}

impl Display for ExtractSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} files processed, {} missing, {} failed, {} segments",
            self.files_processed,
            self.files_missing.len(),
            self.files_failed.len(),
            self.segments
        )
    }
}

/// reads one input file and extracts its segments. trips do not continue
/// across files: a trip still open at the end of a file is dropped.
pub fn extract_file(
    input: &InputFile,
    config: &DatasetConfig,
) -> Result<Vec<Segment>, PrepError> {
    let pings = read_pings(
        &input.path,
        &config.columns,
        &config.timestamp,
        input.date.as_ref(),
    )?;
    Ok(segment::extract_all(pings, &config.window))
}

/// runs extraction on one file, classifying the outcome. a missing file or a
/// failure in one file never stops the run.
pub fn process_file(input: &InputFile, config: &DatasetConfig) -> FileOutcome {
    if !input.path.is_file() {
        return FileOutcome::Missing;
    }
    match extract_file(input, config) {
        Ok(segments) => FileOutcome::Processed(segments),
        Err(e) => FileOutcome::Failed(e),
    }
}

/// extracts segments from every input file of the dataset, in input order.
pub fn run_extract(config: &DatasetConfig) -> Result<(Vec<Segment>, ExtractSummary), PrepError> {
    config.validate()?;
    let inputs = discover_inputs(&config.source)?;
    log::info!(
        "extracting trips in {} from {} input files",
        config.window,
        inputs.len()
    );
    let mut summary = ExtractSummary::default();
    let mut segments = vec![];
    let total = inputs.len();
    for input in tqdm!(inputs.iter(), total = total, desc = "extract segments") {
        let filename = input.filename();
        match process_file(input, config) {
            FileOutcome::Processed(file_segments) => {
                log::info!(
                    "finished processing {filename} with {} segments",
                    file_segments.len()
                );
                summary.files_processed += 1;
                summary.segments += file_segments.len();
                segments.extend(file_segments);
            }
            FileOutcome::Missing => {
                log::warn!("file not found: {filename}");
                summary.files_missing.push(filename);
            }
            FileOutcome::Failed(e) => {
                log::error!("failed processing {filename}: {e}");
                summary.files_failed.push((filename, e.to_string()));
            }
        }
    }
    eprintln!();
    Ok((segments, summary))
}

pub fn write_segments(
    segments: Vec<Segment>,
    output_file: &Path,
    overwrite: bool,
) -> Result<(), PrepError> {
    let mut writer = create_writer(output_file, true, QuoteStyle::Necessary, overwrite)?;
    for segment in segments {
        writer.serialize(SegmentRow::from(segment))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{run_extract, write_segments};
    use crate::{
        config::{DatasetPreset, SourceConfig},
        io::{read_rows, SegmentRow},
    };
    use chrono::NaiveDate;
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
    fn test_shenzhen_date_range() {
        let mut config = DatasetPreset::Shenzhen.dataset_config().expect("preset");
        config.source = SourceConfig::DateRange {
            directory: resource_dir("shenzhen"),
            filename_format: String::from("%Y-%-m-%-d.csv"),
            start_date: NaiveDate::from_ymd_opt(2018, 10, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2018, 10, 4).expect("valid date"),
        };
        let (segments, summary) = run_extract(&config).expect("run should succeed");

        assert_eq!(summary.files_processed, 2);
        assert_eq!(summary.files_missing.len(), 1);
        assert!(summary.files_missing[0].ends_with("2018-10-2.csv"));
        assert_eq!(summary.files_failed.len(), 1);
        assert!(summary.files_failed[0].0.ends_with("2018-10-4.csv"));
        assert_eq!(summary.segments, 3);

        let summary_of = segments
            .iter()
            .map(|s| (s.vehicle_id.0.as_str(), s.len(), s.time_elapsed))
            .collect::<Vec<_>>();
        assert_eq!(
            summary_of,
            vec![("22223", 3, 600), ("36950", 4, 2400), ("22223", 2, 1800)]
        );
        assert_eq!(segments[0].trajectory[0], vec![114.0601, 22.5402]);
        assert_eq!(segments[0].trajectory[2], vec![114.0810, 22.5501]);
        assert_eq!(segments[2].start_time.to_string(), "2018-10-03 07:00:00");
    }

    #[test]
    fn test_chengdu_directory() {
        let mut config = DatasetPreset::Chengdu.dataset_config().expect("preset");
        config.source.set_directory(resource_dir("chengdu"));
        let (segments, summary) = run_extract(&config).expect("run should succeed");
        assert_eq!(summary.files_processed, 1);
        let durations = segments.iter().map(|s| s.time_elapsed).collect::<Vec<_>>();
        assert_eq!(durations, vec![900, 1800]);
        assert!(segments
            .iter()
            .all(|s| s.trajectory.iter().all(|p| p.len() == 4)));
    }

    #[test]
    fn test_written_segments_read_back() {
        let mut config = DatasetPreset::Chengdu.dataset_config().expect("preset");
        config.source.set_directory(resource_dir("chengdu"));
        let (segments, _) = run_extract(&config).expect("run should succeed");
        let expected = segments
            .iter()
            .cloned()
            .map(SegmentRow::from)
            .collect::<Vec<_>>();

        let dir = TempDir::new("cabtrace_extract").expect("temp dir");
        let output = dir.path().join("results_chengdu_4d.csv");
        write_segments(segments, &output, false).expect("write should succeed");
        let rows: Vec<SegmentRow> = read_rows(&output).expect("rows should read");
        assert_eq!(rows, expected);
        assert_eq!(rows[0].trajectory[0], vec![104.0721, 30.6632, 6.0, 0.42]);
    }
}
