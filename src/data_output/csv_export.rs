// src/data_output/csv_export.rs

use std::error::Error;
use std::fs::File;
use std::path::Path;

use crate::constants::{
    DOWNWARD_SLOPE_CSV, LOW_VOLTAGE_CSV, PEAKS_CSV, TIMESTAMP_OUTPUT_FORMAT,
};
use crate::data_input::sample_data::SampleRow;

/// Header for the enriched subsets (peaks, low voltage).
const ENRICHED_HEADER: [&str; 6] = [
    "Timestamp",
    "Voltage",
    "MA_1000",
    "MA_5000",
    "Slope",
    "Slope_Change",
];

/// Header for the slope-acceleration subset.
const ACCELERATION_HEADER: [&str; 3] = ["Timestamp", "Voltage", "Slope_Change"];

// Undefined statistics serialize as an empty field, not a placeholder number.
fn optional_field(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn write_enriched_subset(
    series: &[SampleRow],
    indices: &[usize],
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_writer(File::create(output_path)?);
    writer.write_record(ENRICHED_HEADER)?;
    for &i in indices {
        let row = &series[i];
        writer.write_record([
            row.timestamp.format(TIMESTAMP_OUTPUT_FORMAT).to_string(),
            row.voltage.to_string(),
            optional_field(row.ma_1000),
            optional_field(row.ma_5000),
            optional_field(row.slope),
            optional_field(row.slope_change),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_acceleration_subset(
    series: &[SampleRow],
    indices: &[usize],
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_writer(File::create(output_path)?);
    writer.write_record(ACCELERATION_HEADER)?;
    for &i in indices {
        let row = &series[i];
        writer.write_record([
            row.timestamp.format(TIMESTAMP_OUTPUT_FORMAT).to_string(),
            row.voltage.to_string(),
            optional_field(row.slope_change),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the three derived subsets into `output_dir` under their fixed file
/// names, overwriting any previous run, then prints the confirmation line.
/// Row order inside each file follows the series order, so repeated runs over
/// the same input produce identical bytes.
pub fn export_subsets(
    series: &[SampleRow],
    peaks: &[usize],
    low_voltage: &[usize],
    accelerated_drop: &[usize],
    output_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    write_enriched_subset(series, peaks, &output_dir.join(PEAKS_CSV))?;
    write_enriched_subset(series, low_voltage, &output_dir.join(LOW_VOLTAGE_CSV))?;
    write_acceleration_subset(series, accelerated_drop, &output_dir.join(DOWNWARD_SLOPE_CSV))?;
    println!(
        "Files saved: {}, {}, {}",
        PEAKS_CSV, LOW_VOLTAGE_CSV, DOWNWARD_SLOPE_CSV
    );
    Ok(())
}

// src/data_output/csv_export.rs
