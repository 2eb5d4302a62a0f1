// src/data_analysis/slope.rs

use crate::data_input::sample_data::SampleRow;

/// Fills `slope` (first backward difference of voltage) and `slope_change`
/// (second backward difference) on every row. Row 0 has no predecessor, so
/// its slope is `None`; rows 0 and 1 have no slope change.
pub fn add_slope_columns(series: &mut [SampleRow]) {
    let n = series.len();
    let mut slopes: Vec<Option<f64>> = vec![None; n];
    for i in 1..n {
        slopes[i] = Some(series[i].voltage - series[i - 1].voltage);
    }

    for (i, row) in series.iter_mut().enumerate() {
        row.slope = slopes[i];
        row.slope_change = if i >= 2 {
            match (slopes[i], slopes[i - 1]) {
                (Some(curr), Some(prev)) => Some(curr - prev),
                _ => None,
            }
        } else {
            None
        };
    }
}

/// Rows whose slope change falls strictly below `threshold`, in series order.
/// Rows with an undefined slope change never qualify.
pub fn detect_accelerated_drop(series: &[SampleRow], threshold: f64) -> Vec<usize> {
    series
        .iter()
        .enumerate()
        .filter(|(_, row)| matches!(row.slope_change, Some(change) if change < threshold))
        .map(|(i, _)| i)
        .collect()
}

// src/data_analysis/slope.rs
