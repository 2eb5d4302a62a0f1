// src/data_analysis/threshold.rs

use crate::data_input::sample_data::SampleRow;

/// Rows whose voltage is strictly below `threshold`, in series order.
/// A voltage exactly at the threshold does not qualify.
pub fn detect_low_voltage(series: &[SampleRow], threshold: f64) -> Vec<usize> {
    series
        .iter()
        .enumerate()
        .filter(|(_, row)| row.voltage < threshold)
        .map(|(i, _)| i)
        .collect()
}

// src/data_analysis/threshold.rs
