use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use csv::QuoteStyle;
use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use serde::de::DeserializeOwned;

use crate::PrepError;

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "gz")
}

/// helper function to build a csv writer for either .csv or .csv.gz files
/// while respecting the user's overwrite preferences.
pub fn create_writer(
    filepath: &Path,
    has_headers: bool,
    quote_style: QuoteStyle,
    overwrite: bool,
) -> Result<csv::Writer<Box<dyn Write>>, PrepError> {
    if filepath.exists() && !overwrite {
        return Err(PrepError::OutputExists(
            filepath.to_str().unwrap_or_default().to_string(),
        ));
    }
    if let Some(parent) = filepath.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(filepath)?;
    let buffer: Box<dyn Write> = if is_gzip(filepath) {
        Box::new(GzEncoder::new(BufWriter::new(file), Compression::default()))
    } else {
        Box::new(BufWriter::new(file))
    };
    let writer = csv::WriterBuilder::new()
        .has_headers(has_headers)
        .quote_style(quote_style)
        .from_writer(buffer);
    Ok(writer)
}

/// opens a headered csv file, decompressing .gz files.
pub fn create_reader(filepath: &Path) -> Result<csv::Reader<Box<dyn Read>>, PrepError> {
    let file = File::open(filepath)?;
    let buffer: Box<dyn Read> = if is_gzip(filepath) {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(buffer))
}

/// reads every row of a headered csv file into `T`.
pub fn read_rows<T>(filepath: &Path) -> Result<Vec<T>, PrepError>
where
    T: DeserializeOwned,
{
    let filename = filepath.to_str().unwrap_or_default();
    let reader = create_reader(filepath)?;
    reader
        .into_deserialize::<T>()
        .map(|r| {
            r.map_err(|e| {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                PrepError::MalformedRecord {
                    filepath: filename.to_string(),
                    line,
                    msg: format!("{e}"),
                }
            })
        })
        .collect::<Result<Vec<T>, PrepError>>()
}
