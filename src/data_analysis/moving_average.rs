// src/data_analysis/moving_average.rs

use ndarray::Array1;
use std::collections::VecDeque;

use crate::constants::{MA_LONG_WINDOW, MA_SHORT_WINDOW};
use crate::data_input::sample_data::{voltage_column, SampleRow};

/// Trailing simple moving average over `window_size` rows, inclusive of the
/// current row. The result is `None` until a full window of history exists,
/// so the first `window_size - 1` entries are always `None`. A running sum
/// over a bounded `VecDeque` keeps this linear in the series length.
pub fn rolling_mean(data: &Array1<f64>, window_size: usize) -> Vec<Option<f64>> {
    if window_size == 0 {
        return vec![None; data.len()];
    }
    let mut means: Vec<Option<f64>> = Vec::with_capacity(data.len());
    let mut current_sum: f64 = 0.0;
    let mut history: VecDeque<f64> = VecDeque::with_capacity(window_size);
    for i in 0..data.len() {
        let val = data[i];
        history.push_back(val);
        current_sum += val;
        if history.len() > window_size {
            if let Some(old_val) = history.pop_front() {
                current_sum -= old_val;
            }
        }
        if history.len() == window_size {
            means.push(Some(current_sum / window_size as f64));
        } else {
            means.push(None);
        }
    }
    means
}

/// Fills `ma_1000` and `ma_5000` on every row from the voltage column.
pub fn add_moving_averages(series: &mut [SampleRow]) {
    let voltages = Array1::from(voltage_column(series));
    let short = rolling_mean(&voltages, MA_SHORT_WINDOW);
    let long = rolling_mean(&voltages, MA_LONG_WINDOW);
    for (i, row) in series.iter_mut().enumerate() {
        row.ma_1000 = short[i];
        row.ma_5000 = long[i];
    }
}

// src/data_analysis/moving_average.rs
