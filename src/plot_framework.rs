// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::types::RangedDateTime;
use plotters::drawing::IntoDrawingArea;
use plotters::element::PathElement;
use plotters::series::LineSeries;
use plotters::style::colors::BLACK;
use plotters::style::colors::WHITE;
use plotters::style::{Color, FontTransform, IntoFont, RGBColor};

use chrono::NaiveDateTime;
use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    COLOR_BACKGROUND, FONT_SIZE_AXIS_DESC, FONT_SIZE_LEGEND, FONT_SIZE_TICK_LABEL,
    FONT_SIZE_TITLE, LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH, X_TICK_LABEL_FORMAT,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// One line on a time chart. Rows with an undefined value are simply absent
/// from `data`, so a line may start later than the chart's left edge.
#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(NaiveDateTime, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

/// Everything one chart needs, bundled so plot functions stay declarative.
#[derive(Clone)]
pub struct TimePlotConfig {
    pub title: String,
    pub x_range: Range<NaiveDateTime>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

/// Chart appearance settings, passed explicitly into every render call
/// instead of living in any global state.
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub title_font_size: i32,
    pub axis_desc_font_size: i32,
    pub tick_label_font_size: i32,
    pub legend_font_size: i32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        PlotStyle {
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
            background: COLOR_BACKGROUND,
            title_font_size: FONT_SIZE_TITLE,
            axis_desc_font_size: FONT_SIZE_AXIS_DESC,
            tick_label_font_size: FONT_SIZE_TICK_LABEL,
            legend_font_size: FONT_SIZE_LEGEND,
        }
    }
}

/// Draws one time-series chart into a PNG file.
///
/// The x axis is a chrono time axis with rotated day-month hour:minute tick
/// labels. Every series with a non-empty label gets a legend entry; the
/// legend box sits in the upper-right corner over a translucent background.
pub fn draw_time_series_chart(
    output_path: &Path,
    config: &TimePlotConfig,
    style: &PlotStyle,
) -> Result<(), Box<dyn Error>> {
    let root_area =
        BitMapBackend::new(output_path, (style.width, style.height)).into_drawing_area();
    root_area.fill(&style.background)?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(&config.title, ("sans-serif", style.title_font_size))
        .margin(15)
        .x_label_area_size(80) // room for the rotated tick labels
        .y_label_area_size(60)
        .build_cartesian_2d(
            RangedDateTime::from(config.x_range.clone()),
            config.y_range.clone(),
        )?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(12)
        .y_labels(10)
        .x_label_formatter(&|ts: &NaiveDateTime| ts.format(X_TICK_LABEL_FORMAT).to_string())
        .light_line_style(BLACK.mix(0.1))
        .axis_desc_style(("sans-serif", style.axis_desc_font_size))
        .label_style(("sans-serif", style.tick_label_font_size))
        .x_label_style(
            ("sans-serif", style.tick_label_font_size)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .draw()?;

    let mut legend_series_count = 0;

    for s in &config.series {
        if s.data.is_empty() {
            continue;
        }
        let color = s.color;
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", style.legend_font_size))
            .draw()?;
    }

    root_area.present()?;
    println!("  Chart saved as '{}'.", output_path.display());
    Ok(())
}
