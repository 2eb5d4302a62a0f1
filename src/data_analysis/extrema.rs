// src/data_analysis/extrema.rs

use crate::data_input::sample_data::SampleRow;

/// Finds strict local extrema of the voltage column.
///
/// A row is a peak when its voltage is strictly greater than both immediate
/// neighbors, a low when strictly less than both. A tie with either neighbor
/// disqualifies the row from both classes, so no index can be in both lists.
/// The first and last rows have only one neighbor and are never classified.
/// Returns `(peak_indices, low_indices)`, each in ascending order.
pub fn detect_extrema(series: &[SampleRow]) -> (Vec<usize>, Vec<usize>) {
    let mut peaks: Vec<usize> = Vec::new();
    let mut lows: Vec<usize> = Vec::new();

    if series.len() >= 3 {
        for i in 1..series.len() - 1 {
            let prev = series[i - 1].voltage;
            let curr = series[i].voltage;
            let next = series[i + 1].voltage;
            if curr > prev && curr > next {
                peaks.push(i);
            } else if curr < prev && curr < next {
                lows.push(i);
            }
        }
    }

    println!("Found {} peaks and {} lows.", peaks.len(), lows.len());
    (peaks, lows)
}

// src/data_analysis/extrema.rs
