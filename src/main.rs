// src/main.rs

use std::env;
use std::error::Error;
use std::path::Path;

use voltage_series_analyzer::constants::{
    DEFAULT_INPUT_FILE, LOW_VOLTAGE_THRESHOLD_V, SLOPE_ACCEL_THRESHOLD,
};
use voltage_series_analyzer::data_analysis::extrema::detect_extrema;
use voltage_series_analyzer::data_analysis::moving_average::add_moving_averages;
use voltage_series_analyzer::data_analysis::slope::{add_slope_columns, detect_accelerated_drop};
use voltage_series_analyzer::data_analysis::threshold::detect_low_voltage;
use voltage_series_analyzer::data_input::csv_loader::{load_sample_file, LoadError};
use voltage_series_analyzer::data_output::csv_export::export_subsets;
use voltage_series_analyzer::plot_framework::PlotStyle;
use voltage_series_analyzer::plot_functions::plot_voltage_overview::plot_voltage_overview;

fn main() -> Result<(), Box<dyn Error>> {
    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [input_file.csv]", args[0]);
        std::process::exit(1);
    }
    let input_file = args.get(1).map(String::as_str).unwrap_or(DEFAULT_INPUT_FILE);
    let input_path = Path::new(input_file);
    let root_name = input_path.file_stem().unwrap_or_default().to_string_lossy();

    // --- Load and Sort ---
    let mut series = match load_sample_file(input_path) {
        Ok(series) => series,
        Err(LoadError::MissingFile(path)) => {
            // The one non-fatal failure: report it and produce no outputs.
            eprintln!("Error: The file '{}' was not found.", path);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    // --- Derived Columns ---
    add_moving_averages(&mut series);
    add_slope_columns(&mut series);

    // --- Detection ---
    let (peaks, _lows) = detect_extrema(&series);
    let low_voltage = detect_low_voltage(&series, LOW_VOLTAGE_THRESHOLD_V);
    let accelerated_drop = detect_accelerated_drop(&series, SLOPE_ACCEL_THRESHOLD);

    // --- CSV Export ---
    export_subsets(&series, &peaks, &low_voltage, &accelerated_drop, Path::new("."))?;

    // --- Chart (only after the CSV files are on disk) ---
    plot_voltage_overview(&series, &root_name, &PlotStyle::default())?;

    Ok(())
}

// src/main.rs
