// src/plot_functions/plot_voltage_overview.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;
use std::error::Error;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::constants::{
    CHART_FILE_SUFFIX, COLOR_MA_LONG, COLOR_MA_SHORT, COLOR_RAW_VOLTAGE, LINE_WIDTH_MA,
    LINE_WIDTH_RAW,
};
use crate::data_input::sample_data::{voltage_column, SampleRow};
use crate::plot_framework::{calculate_range, draw_time_series_chart, PlotSeries, PlotStyle, TimePlotConfig};

/// Points for one moving-average line. Rows whose window has not filled yet
/// are skipped, so the line starts at the first defined row instead of
/// dropping to a placeholder value.
pub fn moving_average_points(
    series: &[SampleRow],
    select: fn(&SampleRow) -> Option<f64>,
) -> Vec<(NaiveDateTime, f64)> {
    series
        .iter()
        .filter_map(|row| select(row).map(|v| (row.timestamp, v)))
        .collect()
}

/// Generates the voltage overview chart: the raw series as a thin backdrop
/// line with both moving averages drawn over it in heavier strokes.
pub fn plot_voltage_overview(
    series: &[SampleRow],
    root_name: &str,
    style: &PlotStyle,
) -> Result<(), Box<dyn Error>> {
    let output_file = format!("{root_name}{CHART_FILE_SUFFIX}");

    if series.len() < 2 || series[0].timestamp == series[series.len() - 1].timestamp {
        println!("  INFO: Not enough distinct timestamps to draw '{output_file}'. Skipping chart.");
        return Ok(());
    }

    let raw_series_data: Vec<(NaiveDateTime, f64)> = series
        .iter()
        .map(|row| (row.timestamp, row.voltage))
        .collect();
    let ma_short_series_data = moving_average_points(series, |row| row.ma_1000);
    let ma_long_series_data = moving_average_points(series, |row| row.ma_5000);

    // The averages are means of raw values, so the raw column bounds the
    // vertical extent of all three lines.
    let voltages = Array1::from(voltage_column(series));
    let mut val_min = f64::INFINITY;
    let mut val_max = f64::NEG_INFINITY;
    if let Ok(min_val) = voltages.min() {
        val_min = *min_val;
    }
    if let Ok(max_val) = voltages.max() {
        val_max = *max_val;
    }
    if val_min.is_infinite() {
        println!("  INFO: No plottable voltage values for '{output_file}'. Skipping chart.");
        return Ok(());
    }
    let (final_val_min, final_val_max) = calculate_range(val_min, val_max);

    let x_range = series[0].timestamp..series[series.len() - 1].timestamp;

    let chart_series = vec![
        PlotSeries {
            data: raw_series_data,
            label: "Original Value".to_string(),
            color: COLOR_RAW_VOLTAGE,
            stroke_width: LINE_WIDTH_RAW,
        },
        PlotSeries {
            data: ma_short_series_data,
            label: "1000 Value Moving Average".to_string(),
            color: COLOR_MA_SHORT,
            stroke_width: LINE_WIDTH_MA,
        },
        PlotSeries {
            data: ma_long_series_data,
            label: "5000 Value Moving Average".to_string(),
            color: COLOR_MA_LONG,
            stroke_width: LINE_WIDTH_MA,
        },
    ];

    let config = TimePlotConfig {
        title: "Values with 1000 and 5000 Value Moving Averages".to_string(),
        x_range,
        y_range: final_val_min..final_val_max,
        series: chart_series,
        x_label: "Timestamp".to_string(),
        y_label: "Voltage".to_string(),
    };

    draw_time_series_chart(Path::new(&output_file), &config, style)
}
