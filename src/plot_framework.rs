// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{EmptyElement, PathElement, Polygon, Rectangle, Text};
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, FontStyle, FontTransform, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::constants::{
    BOX_WIDTH, COLOR_BOX_OUTLINE, COLOR_FLIER, COLOR_GRID, FLIER_MARKER_SIZE,
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_MEDIAN_LABEL, FONT_SIZE_MESSAGE,
    FONT_SIZE_SITE_LABEL, GRID_OPACITY, LINE_WIDTH_BOX, LINE_WIDTH_MEDIAN, MEAN_MARKER_SIZE,
    MEDIAN_LABEL_DECIMALS, WHISKER_CAP_WIDTH,
};
use crate::data_analysis::box_stats::BoxStats;

// Pixel budget around the chart.
const TITLE_AREA_PX: u32 = 40;
const MEDIAN_LABEL_AREA_PX: u32 = 30;
const SITE_LABEL_AREA_PX: u32 = 140;
const Y_LABEL_AREA_PX: u32 = 80;

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

/// Draw a "Data Unavailable" message centered on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    let (x_range, y_range) = area.get_pixel_range();
    let center = (
        (x_range.end - x_range.start) / 2,
        (y_range.end - y_range.start) / 2,
    );
    let message = format!("{plot_type} Data Unavailable: {reason}");
    let text_style = ("sans-serif", FONT_SIZE_MESSAGE)
        .into_font()
        .color(&RED)
        .pos(Pos::new(HPos::Center, VPos::Center));
    area.draw(&Text::new(message, center, text_style))?;
    Ok(())
}

/// One box of a box plot. `stats` is `None` for a site without samples.
#[derive(Clone)]
pub struct BoxPlotEntry {
    pub label: String,
    pub stats: Option<BoxStats>,
    pub fill: RGBColor,
}

#[derive(Clone)]
pub struct BoxPlotConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub entries: Vec<BoxPlotEntry>,
    pub width: u32,
    pub height: u32,
}

impl BoxPlotConfig {
    /// Padded value range over every drawn box, fliers included.
    pub fn y_range(&self) -> Option<Range<f64>> {
        let (min, max) = self
            .entries
            .iter()
            .filter_map(|entry| entry.stats.as_ref())
            .map(BoxStats::value_range)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (min, max)| {
                (lo.min(min), hi.max(max))
            });
        if min.is_infinite() || max.is_infinite() {
            return None;
        }
        let (lo, hi) = calculate_range(min, max);
        Some(lo..hi)
    }

    /// Median annotation for the box at `index`.
    pub fn median_label(&self, index: usize) -> String {
        match self.entries.get(index).and_then(|entry| entry.stats.as_ref()) {
            Some(stats) => format!("{:.*}", MEDIAN_LABEL_DECIMALS, stats.median),
            None => "n/a".to_string(),
        }
    }
}

/// Five-pointed star outline around (0, 0), in pixel offsets.
fn star_offsets(radius: i32) -> Vec<(i32, i32)> {
    let inner = f64::from(radius) * 0.45;
    (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { f64::from(radius) } else { inner };
            let angle = -std::f64::consts::FRAC_PI_2 + f64::from(i) * std::f64::consts::PI / 5.0;
            (
                (r * angle.cos()).round() as i32,
                (r * angle.sin()).round() as i32,
            )
        })
        .collect()
}

/// Draws a vertical box plot to a PNG file.
///
/// Boxes sit at x = 1..=n in entry order. Each box gets its fill color, a
/// black median line, a white star at the sample mean and red `+` fliers.
/// Medians are annotated above the plot area and site names are written
/// rotated under the axis. Entries without stats leave an empty slot.
pub fn draw_box_plot(output_filename: &str, config: &BoxPlotConfig) -> Result<(), Box<dyn Error>> {
    let root_area =
        BitMapBackend::new(output_filename, (config.width, config.height)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let title_style = ("sans-serif", FONT_SIZE_CHART_TITLE)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    root_area.draw(&Text::new(
        config.title.clone(),
        (config.width as i32 / 2, 10),
        title_style,
    ))?;

    let y_range = match config.y_range() {
        Some(range) => range,
        None => {
            let plot_area = root_area.margin(TITLE_AREA_PX, 5, 5, 5);
            draw_unavailable_message(&plot_area, &config.title, "no samples for any site")?;
            root_area.present()?;
            println!("  Skipping box drawing for '{output_filename}': no samples for any site.");
            return Ok(());
        }
    };

    let box_count = config.entries.len();
    let x_range = 0.5..(box_count as f64 + 0.5);

    let mut chart = ChartBuilder::on(&root_area)
        .margin(10)
        .margin_top(TITLE_AREA_PX + MEDIAN_LABEL_AREA_PX)
        .x_label_area_size(SITE_LABEL_AREA_PX)
        .y_label_area_size(Y_LABEL_AREA_PX)
        .build_cartesian_2d(x_range, y_range.clone())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(box_count.max(1))
        .x_label_formatter(&|_| String::new())
        .y_labels(10)
        .y_label_formatter(&|y| format!("{y:.2}"))
        .light_line_style(WHITE)
        .bold_line_style(COLOR_GRID.mix(GRID_OPACITY))
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .axis_desc_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let half_box = BOX_WIDTH / 2.0;
    let half_cap = WHISKER_CAP_WIDTH / 2.0;
    let outline = COLOR_BOX_OUTLINE.stroke_width(LINE_WIDTH_BOX);
    let star = star_offsets(MEAN_MARKER_SIZE);
    let mut star_outline = star.clone();
    star_outline.push(star[0]);

    for (index, entry) in config.entries.iter().enumerate() {
        let x = index as f64 + 1.0;
        let stats = match &entry.stats {
            Some(stats) => stats,
            None => continue,
        };

        // Whiskers and caps.
        chart.draw_series(
            [
                vec![(x, stats.whisker_low), (x, stats.q1)],
                vec![(x, stats.q3), (x, stats.whisker_high)],
                vec![(x - half_cap, stats.whisker_low), (x + half_cap, stats.whisker_low)],
                vec![(x - half_cap, stats.whisker_high), (x + half_cap, stats.whisker_high)],
            ]
            .into_iter()
            .map(|points| PathElement::new(points, outline)),
        )?;

        // Filled box with outline drawn over it.
        let corners = [(x - half_box, stats.q1), (x + half_box, stats.q3)];
        chart.draw_series(std::iter::once(Rectangle::new(corners, entry.fill.filled())))?;
        chart.draw_series(std::iter::once(Rectangle::new(corners, outline)))?;

        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x - half_box, stats.median), (x + half_box, stats.median)],
            BLACK.stroke_width(LINE_WIDTH_MEDIAN),
        )))?;

        chart.draw_series(std::iter::once(
            EmptyElement::at((x, stats.mean))
                + Polygon::new(star.clone(), WHITE.filled())
                + PathElement::new(star_outline.clone(), BLACK.stroke_width(1)),
        ))?;

        let flier_style = COLOR_FLIER.stroke_width(1);
        chart.draw_series(stats.fliers.iter().map(|&value| {
            EmptyElement::at((x, value))
                + PathElement::new(
                    vec![(-FLIER_MARKER_SIZE, 0), (FLIER_MARKER_SIZE, 0)],
                    flier_style,
                )
                + PathElement::new(
                    vec![(0, -FLIER_MARKER_SIZE), (0, FLIER_MARKER_SIZE)],
                    flier_style,
                )
        }))?;
    }

    // Annotations live outside the plotting area, so they go on the root area.
    for (index, entry) in config.entries.iter().enumerate() {
        let x = index as f64 + 1.0;
        let (top_px, top_py) = chart.backend_coord(&(x, y_range.end));
        let (_, bottom_py) = chart.backend_coord(&(x, y_range.start));

        let weight = if index % 2 == 0 {
            FontStyle::Bold
        } else {
            FontStyle::Normal
        };
        let median_style = ("sans-serif", FONT_SIZE_MEDIAN_LABEL, weight)
            .into_font()
            .color(&entry.fill)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        root_area.draw(&Text::new(
            config.median_label(index),
            (top_px, top_py - 6),
            median_style,
        ))?;

        let site_style = ("sans-serif", FONT_SIZE_SITE_LABEL)
            .into_font()
            .transform(FontTransform::Rotate90)
            .color(&BLACK);
        root_area.draw(&Text::new(
            entry.label.clone(),
            (top_px + FONT_SIZE_SITE_LABEL / 2, bottom_py + 8),
            site_style,
        ))?;
    }

    root_area.present()?;
    println!("  Box plot saved as '{output_filename}'.");
    Ok(())
}


// src/plot_framework.rs
