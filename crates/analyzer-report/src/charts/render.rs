//! plotters drawing for the chart reports.

use std::fmt::Display;
use std::path::Path;

use analyzer_core::error::{AnalyzerError, Result};
use plotters::prelude::*;

use super::ProgressionSeries;

const CHART_SIZE: (u32, u32) = (1500, 750);
const BAR_COLOR: RGBColor = RGBColor(0x63, 0x66, 0xf1);
/// Most date labels drawn under the progression chart.
const MAX_DATE_LABELS: usize = 12;
/// Half the height of a bar, in category units.
const BAR_HALF_WIDTH: f64 = 0.35;

fn chart_err<E: Display>(err: E) -> AnalyzerError {
    AnalyzerError::Chart(err.to_string())
}

fn rgb((r, g, b): (u8, u8, u8)) -> RGBColor {
    RGBColor(r, g, b)
}

/// Axis range for `count` categories centred on `0..count`, with half a
/// slot of padding either side.
fn category_range(count: usize) -> std::ops::Range<f64> {
    -0.5..(count.max(1) as f64 - 0.5)
}

/// Label for the category nearest to tick `value`, blank between categories.
fn category_label<S: AsRef<str>>(labels: &[S], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels
        .get(idx as usize)
        .map(|l| l.as_ref().to_string())
        .unwrap_or_default()
}

/// Line chart of 1RM values over a categorical date axis.
pub(super) fn draw_progression(
    path: &Path,
    dates: &[String],
    series: &[ProgressionSeries],
) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let values = series.iter().flat_map(|s| s.points.iter().map(|(_, v)| *v));
    let (y_min, y_max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let (y_min, y_max) = if y_min.is_finite() && y_max.is_finite() {
        let pad = ((y_max - y_min) * 0.1).max(5.0);
        ((y_min - pad).max(0.0), y_max + pad)
    } else {
        (0.0, 1.0)
    };

    let mut chart = ChartBuilder::on(&root)
        .caption("1RM Progression", ("sans-serif", 28))
        .margin(25)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .build_cartesian_2d(category_range(dates.len()), y_min..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_labels(dates.len().clamp(1, MAX_DATE_LABELS))
        .x_label_formatter(&|v| category_label(dates, *v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .x_desc("Date")
        .y_desc("Weight (kg)")
        .draw()
        .map_err(chart_err)?;

    for s in series {
        let color = rgb(s.color);
        chart
            .draw_series(LineSeries::new(
                s.points.iter().map(|&(x, y)| (f64::from(x), y)),
                color.stroke_width(2),
            ))
            .map_err(chart_err)?
            .label(s.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], color.stroke_width(2)));
        chart
            .draw_series(
                s.points
                    .iter()
                    .map(|&(x, y)| Circle::new((f64::from(x), y), 4, color.filled())),
            )
            .map_err(chart_err)?;
    }

    if !series.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()
            .map_err(chart_err)?;
    }

    root.present().map_err(chart_err)
}

/// Horizontal bar chart of total sets per muscle.
pub(super) fn draw_volume_bars(path: &Path, bars: &[(&str, u64)]) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let names: Vec<&str> = bars.iter().map(|(muscle, _)| *muscle).collect();
    let x_max = bars.iter().map(|(_, sets)| *sets).max().unwrap_or(1);
    let x_max = x_max.saturating_add((x_max / 10).max(1));

    let mut chart = ChartBuilder::on(&root)
        .caption("Total Volume by Muscle (logged sets)", ("sans-serif", 28))
        .margin(25)
        .set_label_area_size(LabelAreaPosition::Left, 140)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(0u64..x_max, category_range(bars.len()))
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(bars.len())
        .y_label_formatter(&|v| category_label(&names, *v))
        .x_desc("Total Sets")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(bars.iter().enumerate().map(|(i, (_, sets))| {
            let y = i as f64;
            Rectangle::new(
                [(0, y - BAR_HALF_WIDTH), (*sets, y + BAR_HALF_WIDTH)],
                BAR_COLOR.filled(),
            )
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_range_has_one_slot_per_category() {
        assert_eq!(category_range(3), -0.5..2.5);
        assert_eq!(category_range(1), -0.5..0.5);
        assert_eq!(category_range(0), -0.5..0.5);
    }

    #[test]
    fn test_category_label_only_on_whole_ticks() {
        let labels = ["quads", "glutes", "chest"];
        assert_eq!(category_label(&labels, 0.0), "quads");
        assert_eq!(category_label(&labels, 2.000_000_000_1), "chest");
        assert_eq!(category_label(&labels, 1.5), "");
        assert_eq!(category_label(&labels, 3.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }
}
