// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{GREEN, GREY_300, ORANGE, WHITE};
use plotters::style::RGBColor;

// Default input file, read from the current working directory when no path is
// given on the command line.
pub const DEFAULT_INPUT_FILE: &str = "Sample_Data.csv";

// Timestamp formats. Input rows carry day-first timestamps; exports carry the
// year-first form so downstream tooling sorts them lexically.
pub const TIMESTAMP_INPUT_FORMAT: &str = "%d-%m-%Y %H:%M:%S";
pub const TIMESTAMP_OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Moving-average window lengths in rows, inclusive of the current row.
pub const MA_SHORT_WINDOW: usize = 1000;
pub const MA_LONG_WINDOW: usize = 5000;

// Detection thresholds, fixed by the operating procedure. Both comparisons
// are strict. The slope-change threshold is a raw second difference per row
// and assumes a roughly constant sampling interval.
pub const LOW_VOLTAGE_THRESHOLD_V: f64 = 20.0;
pub const SLOPE_ACCEL_THRESHOLD: f64 = -2.0;

// Output CSV names. Fixed; written to the current working directory and
// overwritten on every run.
pub const PEAKS_CSV: &str = "peaks.csv";
pub const LOW_VOLTAGE_CSV: &str = "low_voltage.csv";
pub const DOWNWARD_SLOPE_CSV: &str = "downward_slope_acceleration.csv";

// Chart file suffix, appended to the input file stem.
pub const CHART_FILE_SUFFIX: &str = "_moving_averages.png";

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1400;
pub const PLOT_HEIGHT: u32 = 700;

// --- Plot Color Assignments ---
pub const COLOR_BACKGROUND: RGBColor = WHITE;
pub const COLOR_RAW_VOLTAGE: RGBColor = GREY_300;
pub const COLOR_MA_SHORT: RGBColor = ORANGE;
pub const COLOR_MA_LONG: RGBColor = GREEN;

// Stroke widths for lines. The raw series stays thin so the averages drawn
// over it remain readable.
pub const LINE_WIDTH_RAW: u32 = 1;
pub const LINE_WIDTH_MA: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Font sizes in points.
pub const FONT_SIZE_TITLE: i32 = 28;
pub const FONT_SIZE_AXIS_DESC: i32 = 16;
pub const FONT_SIZE_TICK_LABEL: i32 = 12;
pub const FONT_SIZE_LEGEND: i32 = 15;

// X-axis tick label format: day-month hour:minute, drawn rotated so dense
// tick rows do not overlap.
pub const X_TICK_LABEL_FORMAT: &str = "%d-%m %H:%M";

// src/constants.rs
