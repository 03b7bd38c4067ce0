//! SVG scatter chart generation using manual SVG assembly.
//!
//! No charting library: the plot is a fixed-layout SVG string built the
//! same way for every input. Points carry `<title>` elements so hovering
//! in a browser shows the session key and compound for each lap.

use crate::parser::LapRecord;
use crate::utils::config::X_TICK_INTERVAL;
use crate::utils::error::ChartError;
use log::info;
use std::collections::BTreeSet;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 170.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 55.0;
const POINT_RADIUS: f64 = 4.0;
const Y_TICK_COUNT: usize = 5;

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Lap Time Analysis".to_string(),
            width: 1200,
            height: 600,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// One plottable point, pulled out of a lap record
///
/// **Private** - rows missing either coordinate never become points
struct Point<'a> {
    lap_number: f64,
    lap_time: f64,
    compound: &'a str,
    session_key: &'a str,
}

/// Generate an SVG scatter chart from filtered laps
///
/// **Public** - main entry point for chart generation
///
/// # Arguments
/// * `laps` - Filtered rows for one race/driver selection
/// * `config` - Optional chart configuration (title, dimensions)
///
/// # Returns
/// Complete SVG document as a string
///
/// # Errors
/// * `ChartError::EmptyChart` - no row has both a lap number and a lap time
pub fn generate_scatter(
    laps: &[LapRecord],
    config: Option<&ChartConfig>,
) -> Result<String, ChartError> {
    let config = config.cloned().unwrap_or_default();

    let points: Vec<Point> = laps
        .iter()
        .filter_map(|lap| {
            Some(Point {
                lap_number: lap.lap_number?,
                lap_time: lap.lap_time_seconds?,
                compound: &lap.compound,
                session_key: &lap.session_key,
            })
        })
        .collect();

    if points.is_empty() {
        return Err(ChartError::EmptyChart);
    }

    info!(
        "Generating scatter chart with {} points ({} rows skipped for missing values)",
        points.len(),
        laps.len() - points.len()
    );

    let compounds: BTreeSet<&str> = points.iter().map(|p| p.compound).collect();

    // Axis ranges. The x-axis always starts at 0 and is ticked at the
    // fixed lap interval; the y-axis hugs the data with a little padding.
    let x_max_data = points.iter().map(|p| p.lap_number).fold(0.0, f64::max);
    let x_max = (x_max_data / X_TICK_INTERVAL).ceil().max(1.0) * X_TICK_INTERVAL;

    let y_min_data = points
        .iter()
        .map(|p| p.lap_time)
        .fold(f64::INFINITY, f64::min);
    let y_max_data = points
        .iter()
        .map(|p| p.lap_time)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_pad = ((y_max_data - y_min_data) * 0.05).max(0.5);
    let y_min = y_min_data - y_pad;
    let y_max = y_max_data + y_pad;

    let width = config.width as f64;
    let height = config.height as f64;
    let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    let x_pos = |x: f64| MARGIN_LEFT + (x / x_max) * plot_width;
    let y_pos = |y: f64| MARGIN_TOP + ((y_max - y) / (y_max - y_min)) * plot_height;

    let mut svg = String::new();

    // Header
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        config.width, config.height, config.width, config.height
    ));

    // Styles
    svg.push_str(
        r#"<style>.pt:hover { stroke: black; stroke-width: 1.5; cursor: pointer; } .axis { stroke: #333; stroke-width: 1; } .grid { stroke: #ddd; stroke-width: 0.5; } .lbl { font: 12px sans-serif; fill: #333; }</style>"#,
    );

    // Background and title
    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        config.width, config.height
    ));
    svg.push_str(&format!(
        r#"<text x="{}" y="25" font-size="16" text-anchor="middle" font-weight="bold" font-family="sans-serif">{}</text>"#,
        (MARGIN_LEFT + plot_width / 2.0) as u64,
        xml_escape(&config.title)
    ));

    render_axes(
        &mut svg,
        x_max,
        y_min,
        y_max,
        plot_width,
        plot_height,
        &x_pos,
        &y_pos,
    );

    // Points, one circle per plottable lap
    for point in &points {
        svg.push_str(&format!(
            r#"<circle class="pt" cx="{:.1}" cy="{:.1}" r="{}" fill="{}" fill-opacity="0.85"><title>Lap {}: {:.3}s | compound: {} | session: {}</title></circle>"#,
            x_pos(point.lap_number),
            y_pos(point.lap_time),
            POINT_RADIUS,
            compound_color(point.compound),
            point.lap_number,
            point.lap_time,
            xml_escape(point.compound),
            xml_escape(point.session_key),
        ));
    }

    render_legend(&mut svg, &compounds, width);

    svg.push_str("</svg>");

    Ok(svg)
}

/// Draw axis lines, tick marks, grid lines, and axis labels
///
/// **Private** - internal helper for generate_scatter
fn render_axes(
    svg: &mut String,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    plot_width: f64,
    plot_height: f64,
    x_pos: &dyn Fn(f64) -> f64,
    y_pos: &dyn Fn(f64) -> f64,
) {
    let x_axis_y = MARGIN_TOP + plot_height;

    // Axis lines
    svg.push_str(&format!(
        r#"<line class="axis" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
        MARGIN_LEFT,
        x_axis_y,
        MARGIN_LEFT + plot_width,
        x_axis_y
    ));
    svg.push_str(&format!(
        r#"<line class="axis" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
        MARGIN_LEFT, MARGIN_TOP, MARGIN_LEFT, x_axis_y
    ));

    // X ticks at the fixed lap interval, starting from 0
    let mut tick = 0.0;
    while tick <= x_max {
        let x = x_pos(tick);
        svg.push_str(&format!(
            r#"<line class="grid" x1="{:.1}" y1="{}" x2="{:.1}" y2="{}"/>"#,
            x, MARGIN_TOP, x, x_axis_y
        ));
        svg.push_str(&format!(
            r#"<text class="lbl" x="{:.1}" y="{}" text-anchor="middle">{}</text>"#,
            x,
            x_axis_y + 18.0,
            tick as u64
        ));
        tick += X_TICK_INTERVAL;
    }

    // Y ticks, evenly spaced over the padded range
    for i in 0..=Y_TICK_COUNT {
        let value = y_min + (y_max - y_min) * (i as f64 / Y_TICK_COUNT as f64);
        let y = y_pos(value);
        svg.push_str(&format!(
            r#"<line class="grid" x1="{}" y1="{:.1}" x2="{}" y2="{:.1}"/>"#,
            MARGIN_LEFT,
            y,
            MARGIN_LEFT + plot_width,
            y
        ));
        svg.push_str(&format!(
            r#"<text class="lbl" x="{}" y="{:.1}" text-anchor="end">{:.1}</text>"#,
            MARGIN_LEFT - 8.0,
            y + 4.0,
            value
        ));
    }

    // Axis labels
    svg.push_str(&format!(
        r#"<text class="lbl" x="{:.1}" y="{:.1}" text-anchor="middle">Lap Number</text>"#,
        MARGIN_LEFT + plot_width / 2.0,
        x_axis_y + 40.0
    ));
    svg.push_str(&format!(
        r#"<text class="lbl" x="18" y="{:.1}" text-anchor="middle" transform="rotate(-90 18 {:.1})">Lap Time (seconds)</text>"#,
        MARGIN_TOP + plot_height / 2.0,
        MARGIN_TOP + plot_height / 2.0
    ));
}

/// Draw the compound legend in the right margin
///
/// **Private** - internal helper for generate_scatter
fn render_legend(svg: &mut String, compounds: &BTreeSet<&str>, width: f64) {
    let legend_x = width - MARGIN_RIGHT + 20.0;

    svg.push_str(&format!(
        r#"<text class="lbl" x="{:.1}" y="{}" font-weight="bold">Tire Compound</text>"#,
        legend_x, MARGIN_TOP
    ));

    for (i, compound) in compounds.iter().enumerate() {
        let y = MARGIN_TOP + 20.0 + i as f64 * 20.0;
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="12" height="12" fill="{}"/>"#,
            legend_x,
            y - 10.0,
            compound_color(compound)
        ));
        svg.push_str(&format!(
            r#"<text class="lbl" x="{:.1}" y="{:.1}">{}</text>"#,
            legend_x + 18.0,
            y,
            xml_escape(compound)
        ));
    }
}

/// Color for a tire compound
///
/// **Private** - the usual compound colors, with a fallback for anything
/// the feed labels differently
fn compound_color(compound: &str) -> &'static str {
    match compound.to_uppercase().as_str() {
        "SOFT" => "#da291c",
        "MEDIUM" => "#ffc906",
        "HARD" => "#9b9b9b",
        "INTERMEDIATE" => "#43b02a",
        "WET" => "#0067ad",
        _ => "#8e44ad",
    }
}

/// Minimal XML text escaping for attribute and element content
///
/// **Private** - internal utility
fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lap(number: Option<f64>, time: Option<f64>, compound: &str) -> LapRecord {
        LapRecord {
            meeting_name: "Monza".to_string(),
            driver_number: "44".to_string(),
            driver_name: "Hamilton".to_string(),
            session_key: "9001".to_string(),
            compound: compound.to_string(),
            lap_number: number,
            lap_time_seconds: time,
        }
    }

    #[test]
    fn test_scatter_has_one_circle_per_plottable_lap() {
        let laps = vec![
            lap(Some(1.0), Some(90.1), "SOFT"),
            lap(Some(2.0), Some(90.3), "SOFT"),
            lap(Some(3.0), Some(91.0), "HARD"),
        ];

        let svg = generate_scatter(&laps, None).unwrap();
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("Lap Number"));
        assert!(svg.contains("Lap Time (seconds)"));
    }

    #[test]
    fn test_rows_with_missing_values_are_skipped() {
        let laps = vec![
            lap(Some(1.0), Some(90.1), "SOFT"),
            lap(None, Some(90.3), "SOFT"),
            lap(Some(3.0), None, "SOFT"),
        ];

        let svg = generate_scatter(&laps, None).unwrap();
        assert_eq!(svg.matches("<circle").count(), 1);
    }

    #[test]
    fn test_no_plottable_points_is_an_error() {
        let laps = vec![lap(None, None, "SOFT")];
        let result = generate_scatter(&laps, None);
        assert!(matches!(result, Err(ChartError::EmptyChart)));
    }

    #[test]
    fn test_legend_lists_each_compound_once() {
        let laps = vec![
            lap(Some(1.0), Some(90.1), "SOFT"),
            lap(Some(2.0), Some(90.2), "SOFT"),
            lap(Some(3.0), Some(91.0), "HARD"),
        ];

        let svg = generate_scatter(&laps, None).unwrap();
        assert!(svg.contains(">SOFT</text>"));
        assert!(svg.contains(">HARD</text>"));
        assert_eq!(svg.matches(">SOFT</text>").count(), 1);
    }

    #[test]
    fn test_x_ticks_follow_the_fixed_interval() {
        let laps = vec![
            lap(Some(1.0), Some(90.1), "SOFT"),
            lap(Some(25.0), Some(92.0), "SOFT"),
        ];

        let svg = generate_scatter(&laps, None).unwrap();
        // max lap 25 rounds the axis up to 30: ticks 0, 10, 20, 30
        assert!(svg.contains(">0</text>"));
        assert!(svg.contains(">10</text>"));
        assert!(svg.contains(">20</text>"));
        assert!(svg.contains(">30</text>"));
    }

    #[test]
    fn test_hover_title_carries_session_and_compound() {
        let laps = vec![lap(Some(1.0), Some(90.1), "SOFT")];
        let svg = generate_scatter(&laps, None).unwrap();
        assert!(svg.contains("compound: SOFT"));
        assert!(svg.contains("session: 9001"));
    }

    #[test]
    fn test_custom_title_is_escaped() {
        let laps = vec![lap(Some(1.0), Some(90.1), "SOFT")];
        let config = ChartConfig::new().with_title("A <B> & C");
        let svg = generate_scatter(&laps, Some(&config)).unwrap();
        assert!(svg.contains("A &lt;B&gt; &amp; C"));
    }
}
