// src/data_input/sample_data.rs

use chrono::NaiveDateTime;

/// Represents one row of the voltage series, with its derived statistics.
/// Derived fields are `Option<f64>`: `None` marks a row where the statistic
/// is undefined (not enough window history, or no predecessor row), never a
/// zero or NaN stand-in.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRow {
    /// Sample time, parsed from the "Timestamp" column.
    pub timestamp: NaiveDateTime,
    /// Measured voltage, parsed from the "Values" column.
    pub voltage: f64,
    /// Trailing 1000-row mean. `None` for the first 999 rows.
    pub ma_1000: Option<f64>,
    /// Trailing 5000-row mean. `None` for the first 4999 rows.
    pub ma_5000: Option<f64>,
    /// First backward difference of voltage. `None` at row 0.
    pub slope: Option<f64>,
    /// Second backward difference of voltage. `None` at rows 0 and 1.
    pub slope_change: Option<f64>,
}

impl SampleRow {
    /// A freshly loaded row: measured values only, derived statistics unset.
    pub fn new(timestamp: NaiveDateTime, voltage: f64) -> Self {
        SampleRow {
            timestamp,
            voltage,
            ma_1000: None,
            ma_5000: None,
            slope: None,
            slope_change: None,
        }
    }
}

/// Extracts the voltage column as a dense vector for the numeric stages.
pub fn voltage_column(series: &[SampleRow]) -> Vec<f64> {
    series.iter().map(|row| row.voltage).collect()
}

// src/data_input/sample_data.rs
