// src/data_input/csv_loader.rs

use csv::ReaderBuilder;
use std::fs::File;
use std::io;
use std::path::Path;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::constants::TIMESTAMP_INPUT_FORMAT;
use crate::data_input::sample_data::SampleRow;

// Column names recognized after header trimming. The measured column ships
// as "Values"; a file that already labels it "Voltage" is accepted as-is.
const TIMESTAMP_HEADER: &str = "Timestamp";
const VALUES_HEADER: &str = "Values";
const VOLTAGE_HEADER: &str = "Voltage";

/// Failures while loading the input CSV. `MissingFile` is the one recoverable
/// case: the caller reports it and produces no outputs. Everything else ends
/// the run with a nonzero exit.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file '{0}' was not found")]
    MissingFile(String),

    #[error("column '{0}' not found in CSV header")]
    MissingColumn(&'static str),

    #[error("row {}: timestamp '{}' does not match format '{}'", .row, .value, TIMESTAMP_INPUT_FORMAT)]
    MalformedTimestamp { row: usize, value: String },

    #[error("row {row}: value '{value}' is not a number")]
    MalformedValue { row: usize, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Parses the voltage CSV and returns the series sorted by timestamp.
///
/// Sorting is stable, so rows sharing a timestamp keep their file order. The
/// returned vector index is the positional index every later stage (windows,
/// differences, extrema) operates on.
pub fn load_sample_file(input_file_path: &Path) -> Result<Vec<SampleRow>, LoadError> {
    let file = File::open(input_file_path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            LoadError::MissingFile(input_file_path.display().to_string())
        } else {
            LoadError::Io(err)
        }
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    // --- Header Index Mapping ---
    let header_record = reader.headers()?.clone();
    let timestamp_idx = header_record
        .iter()
        .position(|h| h == TIMESTAMP_HEADER)
        .ok_or(LoadError::MissingColumn(TIMESTAMP_HEADER))?;
    let voltage_idx = header_record
        .iter()
        .position(|h| h == VALUES_HEADER)
        .or_else(|| header_record.iter().position(|h| h == VOLTAGE_HEADER))
        .ok_or(LoadError::MissingColumn(VALUES_HEADER))?;

    // --- Data Reading and Storage ---
    let mut series: Vec<SampleRow> = Vec::new();
    for (row_index, result) in reader.records().enumerate() {
        let record = result?;

        let timestamp_str = record.get(timestamp_idx).unwrap_or("");
        let timestamp = NaiveDateTime::parse_from_str(timestamp_str, TIMESTAMP_INPUT_FORMAT)
            .map_err(|_| LoadError::MalformedTimestamp {
                row: row_index + 1,
                value: timestamp_str.to_string(),
            })?;

        let voltage_str = record.get(voltage_idx).unwrap_or("");
        let voltage = voltage_str
            .parse::<f64>()
            .map_err(|_| LoadError::MalformedValue {
                row: row_index + 1,
                value: voltage_str.to_string(),
            })?;

        series.push(SampleRow::new(timestamp, voltage));
    }

    println!("Data loaded successfully.");
    println!("Finished reading {} data rows.", series.len());

    // Stable sort by timestamp; equal timestamps keep input order.
    series.sort_by_key(|row| row.timestamp);

    if let Some(interval_s) = estimate_sample_interval_secs(&series) {
        println!("Estimated sample interval: {:.2} s.", interval_s);
    }

    Ok(series)
}

/// Mean positive gap between consecutive timestamps, in seconds. Zero gaps
/// (duplicate timestamps) are skipped; `None` when no positive gap exists.
pub fn estimate_sample_interval_secs(series: &[SampleRow]) -> Option<f64> {
    if series.len() < 2 {
        return None;
    }
    let mut total_s = 0.0;
    let mut gap_count: usize = 0;
    for pair in series.windows(2) {
        let delta_s = (pair[1].timestamp - pair[0].timestamp).num_milliseconds() as f64 / 1000.0;
        if delta_s > 0.0 {
            total_s += delta_s;
            gap_count += 1;
        }
    }
    if gap_count > 0 {
        Some(total_s / gap_count as f64)
    } else {
        None
    }
}

// src/data_input/csv_loader.rs
