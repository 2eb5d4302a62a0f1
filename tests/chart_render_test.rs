// tests/chart_render_test.rs

use std::fs;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use voltage_series_analyzer::constants::{
    CHART_FILE_SUFFIX, COLOR_MA_SHORT, COLOR_RAW_VOLTAGE, LINE_WIDTH_MA, LINE_WIDTH_RAW,
};
use voltage_series_analyzer::data_analysis::moving_average::add_moving_averages;
use voltage_series_analyzer::data_input::sample_data::SampleRow;
use voltage_series_analyzer::plot_framework::{
    calculate_range, draw_time_series_chart, PlotSeries, PlotStyle, TimePlotConfig,
};
use voltage_series_analyzer::plot_functions::plot_voltage_overview::plot_voltage_overview;

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn sample_series(len: usize) -> Vec<SampleRow> {
    (0..len)
        .map(|i| {
            let voltage = 20.0 + (i % 10) as f64;
            SampleRow::new(base_time() + Duration::seconds(i as i64), voltage)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_chart_renders_to_a_png_file() {
        let dir = TempDir::new().unwrap();
        let mut series = sample_series(60);
        add_moving_averages(&mut series);

        let stem = dir.path().join("overview");
        plot_voltage_overview(&series, &stem.to_string_lossy(), &PlotStyle::default()).unwrap();

        let chart_path = dir.path().join(format!("overview{CHART_FILE_SUFFIX}"));
        let bytes = fs::read(&chart_path).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn chart_draws_a_late_starting_line() {
        let dir = TempDir::new().unwrap();
        let output_path = dir.path().join("two_lines.png");

        let raw: Vec<(NaiveDateTime, f64)> = (0..12)
            .map(|i| (base_time() + Duration::minutes(i), 20.0 + (i % 5) as f64))
            .collect();
        // The shape a trailing average takes: fewer points, starting once
        // the window has filled.
        let averaged: Vec<(NaiveDateTime, f64)> =
            raw[4..].iter().map(|&(ts, _)| (ts, 22.0)).collect();
        let x_range = raw[0].0..raw[raw.len() - 1].0;

        let config = TimePlotConfig {
            title: "Voltage with a trailing average".to_string(),
            x_range,
            y_range: {
                let (y_min, y_max) = calculate_range(20.0, 24.0);
                y_min..y_max
            },
            series: vec![
                PlotSeries {
                    data: raw,
                    label: "Original Value".to_string(),
                    color: COLOR_RAW_VOLTAGE,
                    stroke_width: LINE_WIDTH_RAW,
                },
                PlotSeries {
                    data: averaged,
                    label: "Trailing Average".to_string(),
                    color: COLOR_MA_SHORT,
                    stroke_width: LINE_WIDTH_MA,
                },
            ],
            x_label: "Timestamp".to_string(),
            y_label: "Voltage".to_string(),
        };

        draw_time_series_chart(&output_path, &config, &PlotStyle::default()).unwrap();

        let bytes = fs::read(&output_path).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn degenerate_series_skips_the_chart() {
        let dir = TempDir::new().unwrap();
        let stem = dir.path().join("sparse");
        let chart_path = dir.path().join(format!("sparse{CHART_FILE_SUFFIX}"));

        let single = sample_series(1);
        plot_voltage_overview(&single, &stem.to_string_lossy(), &PlotStyle::default()).unwrap();
        assert!(!chart_path.exists());

        // Two rows on the same timestamp span no time axis either.
        let duplicated = vec![
            SampleRow::new(base_time(), 21.0),
            SampleRow::new(base_time(), 23.0),
        ];
        plot_voltage_overview(&duplicated, &stem.to_string_lossy(), &PlotStyle::default()).unwrap();
        assert!(!chart_path.exists());
    }
}
