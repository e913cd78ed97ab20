//! Line charts with gradient fills

use super::surface::{DrawSurface, LinearGradient, Point, Stroke};
use crate::models::ChartPoint;
use crate::state::SharedRandom;

/// Inset of single-series charts
pub const LINE_CHART_PADDING: f64 = 20.0;

/// Inset of multi-series charts
pub const LARGE_CHART_PADDING: f64 = 30.0;

/// Per-point noise half-widths of the derived series in a large chart
pub const LARGE_CHART_NOISE: [f64; 3] = [10.0, 7.5, 12.5];

/// Color of the large chart axes
pub const AXIS_COLOR: &str = "rgba(255, 255, 255, 0.2)";

const LINE_WIDTH: f64 = 2.0;
const AXIS_WIDTH: f64 = 1.0;

/// Append a two-digit hex alpha to a `#rrggbb` color
pub fn with_alpha(color: &str, alpha: u8) -> String {
    format!("{}{:02x}", color, alpha)
}

/// Maps values and sample indices into the padded plot area
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    width: f64,
    height: f64,
    padding: f64,
    low: f64,
    range: f64,
}

impl PlotArea {
    /// A flat series gets a unit range centred on its value
    fn new(surface: &dyn DrawSurface, padding: f64, values: impl Iterator<Item = f64>) -> Self {
        let (width, height) = surface.size();
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

        let (low, range) = if max > min {
            (min, max - min)
        } else {
            (min - 0.5, 1.0)
        };

        Self {
            width,
            height,
            padding,
            low,
            range,
        }
    }

    fn chart_width(&self) -> f64 {
        self.width - self.padding * 2.0
    }

    fn chart_height(&self) -> f64 {
        self.height - self.padding * 2.0
    }

    fn baseline(&self) -> f64 {
        self.height - self.padding
    }

    fn point(&self, index: usize, count: usize, value: f64) -> Point {
        let x = if count > 1 {
            self.padding + index as f64 / (count - 1) as f64 * self.chart_width()
        } else {
            self.padding
        };
        let y = self.baseline() - (value - self.low) / self.range * self.chart_height();

        Point::new(x, y)
    }

    fn polyline(&self, values: &[f64]) -> Vec<Point> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| self.point(i, values.len(), *v))
            .collect()
    }

    /// Area under the polyline, closed along the baseline
    fn area(&self, line: &[Point]) -> Vec<Point> {
        let mut area = Vec::with_capacity(line.len() + 2);
        area.push(Point::new(self.padding, self.baseline()));
        area.extend_from_slice(line);
        area.push(Point::new(self.width - self.padding, self.baseline()));
        area
    }

    fn vertical_gradient(&self, color: &str, top_alpha: u8, bottom_alpha: u8) -> LinearGradient {
        LinearGradient {
            start: Point::new(0.0, self.padding),
            end: Point::new(0.0, self.baseline()),
            stops: vec![
                (0.0, with_alpha(color, top_alpha)),
                (1.0, with_alpha(color, bottom_alpha)),
            ],
        }
    }
}

/// Draw a single filled line chart
pub fn draw_line_chart(surface: &mut dyn DrawSurface, series: &[ChartPoint], color: &str) {
    surface.clear();
    if series.is_empty() {
        return;
    }

    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let plot = PlotArea::new(surface, LINE_CHART_PADDING, values.iter().copied());
    let line = plot.polyline(&values);

    surface.fill_path(&plot.area(&line), &plot.vertical_gradient(color, 0x80, 0x20));
    surface.stroke_path(
        &line,
        &Stroke {
            color: color.to_string(),
            width: LINE_WIDTH,
        },
    );
}

/// Derive three noisy variants of `base`, one per noise half-width
pub fn derive_layers(base: &[ChartPoint], rng: &SharedRandom) -> [Vec<f64>; 3] {
    LARGE_CHART_NOISE.map(|half_width| {
        base.iter()
            .map(|p| p.value + rng.jitter(half_width))
            .collect()
    })
}

/// Draw three overlaid series derived from `base` on a shared scale, with axes
pub fn draw_large_chart(
    surface: &mut dyn DrawSurface,
    base: &[ChartPoint],
    colors: &[&str; 3],
    rng: &SharedRandom,
) {
    surface.clear();
    if base.is_empty() {
        return;
    }

    let layers = derive_layers(base, rng);
    let plot = PlotArea::new(
        surface,
        LARGE_CHART_PADDING,
        layers.iter().flat_map(|layer| layer.iter().copied()),
    );

    for (i, (layer, color)) in layers.iter().zip(colors.iter()).enumerate() {
        let line = plot.polyline(layer);

        if i == 0 {
            surface.fill_path(&plot.area(&line), &plot.vertical_gradient(color, 0x40, 0x10));
        }

        surface.stroke_path(
            &line,
            &Stroke {
                color: color.to_string(),
                width: LINE_WIDTH,
            },
        );
    }

    let axis = Stroke {
        color: AXIS_COLOR.to_string(),
        width: AXIS_WIDTH,
    };
    let padding = plot.padding;

    // Y axis
    surface.stroke_path(
        &[Point::new(padding, padding), Point::new(padding, plot.baseline())],
        &axis,
    );

    // X axis
    surface.stroke_path(
        &[
            Point::new(padding, plot.baseline()),
            Point::new(plot.width - padding, plot.baseline()),
        ],
        &axis,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::surface::{DrawOp, RecordingSurface};

    fn series(values: &[f64]) -> Vec<ChartPoint> {
        values
            .iter()
            .enumerate()
            .map(|(time, value)| ChartPoint { time, value: *value })
            .collect()
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha("#f1c40f", 0x80), "#f1c40f80");
        assert_eq!(with_alpha("#3498db", 0x10), "#3498db10");
    }

    #[test]
    fn test_line_chart_geometry() {
        let mut surface = RecordingSurface::new(240.0, 140.0);

        draw_line_chart(&mut surface, &series(&[10.0, 30.0, 20.0]), "#f1c40f");

        let ops = surface.ops();
        assert_eq!(ops[0], DrawOp::Clear);

        let strokes = surface.strokes();
        assert_eq!(strokes.len(), 1);
        let (line, stroke) = &strokes[0];
        assert_eq!(stroke.color, "#f1c40f");
        assert_eq!(stroke.width, 2.0);
        assert_eq!(
            line,
            &vec![
                Point::new(20.0, 120.0),
                Point::new(120.0, 20.0),
                Point::new(220.0, 70.0),
            ]
        );

        let fills = surface.fills();
        assert_eq!(fills.len(), 1);
        let (area, gradient) = &fills[0];
        assert_eq!(area.first(), Some(&Point::new(20.0, 120.0)));
        assert_eq!(area.last(), Some(&Point::new(220.0, 120.0)));
        assert_eq!(area.len(), 5);
        assert_eq!(gradient.start, Point::new(0.0, 20.0));
        assert_eq!(gradient.end, Point::new(0.0, 120.0));
        assert_eq!(
            gradient.stops,
            vec![(0.0, "#f1c40f80".to_string()), (1.0, "#f1c40f20".to_string())]
        );
    }

    #[test]
    fn test_flat_series_strokes_centre_line() {
        let mut surface = RecordingSurface::new(200.0, 100.0);

        draw_line_chart(&mut surface, &series(&[42.0; 24]), "#f39c12");

        let strokes = surface.strokes();
        let (line, _) = &strokes[0];
        assert_eq!(line.len(), 24);
        for point in line {
            assert!(point.x.is_finite());
            assert_eq!(point.y, 50.0);
        }
        assert_eq!(line[0].x, 20.0);
        assert_eq!(line[23].x, 180.0);
    }

    #[test]
    fn test_single_point_and_empty_series() {
        let mut surface = RecordingSurface::new(200.0, 100.0);

        draw_line_chart(&mut surface, &series(&[5.0]), "#f39c12");
        let (line, _) = &surface.strokes()[0];
        assert_eq!(line, &vec![Point::new(20.0, 50.0)]);

        draw_line_chart(&mut surface, &[], "#f39c12");
        assert!(surface.current_frame().is_empty());
        assert_eq!(surface.clear_count(), 2);
    }

    #[test]
    fn test_large_chart_layers_and_axes() {
        let mut surface = RecordingSurface::new(400.0, 200.0);
        let colors = ["#3498db", "#2980b9", "#1abc9c"];
        let base = series(&[100.0, 120.0, 90.0, 110.0]);

        draw_large_chart(&mut surface, &base, &colors, &SharedRandom::seeded(6));

        let fills = surface.fills();
        assert_eq!(fills.len(), 1);
        assert_eq!(
            fills[0].1.stops,
            vec![(0.0, "#3498db40".to_string()), (1.0, "#3498db10".to_string())]
        );

        let strokes = surface.strokes();
        assert_eq!(strokes.len(), 5);
        for (i, color) in colors.iter().enumerate() {
            assert_eq!(strokes[i].1.color, *color);
            assert_eq!(strokes[i].1.width, 2.0);
            assert_eq!(strokes[i].0.len(), 4);
        }

        let (y_axis, axis_stroke) = &strokes[3];
        assert_eq!(y_axis, &vec![Point::new(30.0, 30.0), Point::new(30.0, 170.0)]);
        assert_eq!(axis_stroke.color, AXIS_COLOR);
        assert_eq!(axis_stroke.width, 1.0);

        let (x_axis, _) = &strokes[4];
        assert_eq!(x_axis, &vec![Point::new(30.0, 170.0), Point::new(370.0, 170.0)]);
    }

    #[test]
    fn test_large_chart_shared_scale() {
        let mut surface = RecordingSurface::new(400.0, 200.0);
        let base = series(&[50.0; 48]);

        draw_large_chart(
            &mut surface,
            &base,
            &["#9b59b6", "#8e44ad", "#e74c3c"],
            &SharedRandom::seeded(12),
        );

        // One shared scale: the extreme points of all layers touch the plot bounds
        let ys: Vec<f64> = surface.strokes()[..3]
            .iter()
            .flat_map(|(line, _)| line.iter().map(|p| p.y))
            .collect();
        let top = ys.iter().cloned().fold(f64::INFINITY, f64::min);
        let bottom = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        assert!((top - 30.0).abs() < 1e-9);
        assert!((bottom - 170.0).abs() < 1e-9);
    }

    #[test]
    fn test_derived_layers_respect_noise() {
        let base = series(&[100.0; 48]);
        let layers = derive_layers(&base, &SharedRandom::seeded(21));

        for (layer, half_width) in layers.iter().zip(LARGE_CHART_NOISE) {
            assert_eq!(layer.len(), 48);
            assert!(layer.iter().all(|v| (v - 100.0).abs() <= half_width));
        }
    }
}
