//! Line chart painted directly with the egui painter.
//!
//! Draws a dashed grid, labelled axes, the series line with point markers, a
//! legend, and a tooltip for the point nearest the pointer.

use eframe::egui::{Align2, FontId, Pos2, Rect, Response, RichText, Sense, Shape, Stroke, Ui, pos2, vec2};

use super::components::colors;
use crate::models::SeriesPoint;

const Y_AXIS_WIDTH: f32 = 56.0;
const X_AXIS_HEIGHT: f32 = 24.0;
const LEGEND_HEIGHT: f32 = 28.0;
const PLOT_PADDING: f32 = 16.0;
const Y_INTERVALS: usize = 4;

/// Evenly spaced round tick values from 0 up to at least `max`.
///
/// Step sizes are 1, 2 or 5 times a power of ten, picked so the range splits
/// into roughly `intervals` parts.
pub fn nice_ticks(max: f64, intervals: usize) -> Vec<f64> {
    if !max.is_finite() || max <= 0.0 || intervals == 0 {
        return vec![0.0];
    }

    let raw = max / intervals as f64;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let normalized = raw / magnitude;
    let step = magnitude
        * if normalized <= 1.0 {
            1.0
        } else if normalized <= 2.0 {
            2.0
        } else if normalized <= 5.0 {
            5.0
        } else {
            10.0
        };

    let count = (max / step).ceil() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

/// Maps series indices and values onto the plot rectangle.
#[derive(Debug, Clone, Copy)]
pub struct ChartGeometry {
    plot: Rect,
    count: usize,
    y_max: f64,
}

impl ChartGeometry {
    pub fn new(plot: Rect, count: usize, y_max: f64) -> Self {
        Self { plot, count, y_max }
    }

    fn step(&self) -> f32 {
        if self.count > 1 {
            self.plot.width() / (self.count - 1) as f32
        } else {
            0.0
        }
    }

    /// Horizontal position of the point at `index`.
    pub fn x(&self, index: usize) -> f32 {
        if self.count <= 1 {
            self.plot.center().x
        } else {
            self.plot.left() + self.step() * index as f32
        }
    }

    /// Vertical position of `value`; 0 sits on the bottom edge.
    pub fn y(&self, value: f64) -> f32 {
        if self.y_max <= 0.0 {
            return self.plot.bottom();
        }
        let t = (value / self.y_max).clamp(0.0, 1.0) as f32;
        self.plot.bottom() - t * self.plot.height()
    }

    pub fn point(&self, index: usize, value: f64) -> Pos2 {
        pos2(self.x(index), self.y(value))
    }

    /// Index of the point closest to horizontal position `x`.
    pub fn nearest_index(&self, x: f32) -> Option<usize> {
        match self.count {
            0 => None,
            1 => Some(0),
            n => {
                let i = ((x - self.plot.left()) / self.step()).round();
                Some(i.clamp(0.0, (n - 1) as f32) as usize)
            }
        }
    }
}

fn format_value(value: f64) -> String {
    format!("{value:.0}")
}

/// Tooltip text for a hovered point, e.g. `Jan: waste 4000`.
pub fn tooltip_text(point: &SeriesPoint, name: &str) -> String {
    format!("{}: {name} {}", point.label, format_value(point.value))
}

/// Paint `series` as a line chart filling the available width.
pub fn line_chart(ui: &mut Ui, series: &[SeriesPoint], name: &str, height: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter_at(rect);
    let font = FontId::proportional(12.0);

    let plot = Rect::from_min_max(
        pos2(rect.left() + Y_AXIS_WIDTH, rect.top() + PLOT_PADDING),
        pos2(rect.right() - PLOT_PADDING, rect.bottom() - X_AXIS_HEIGHT - LEGEND_HEIGHT),
    );

    let max = series.iter().map(|p| p.value).fold(0.0, f64::max);
    let ticks = nice_ticks(max, Y_INTERVALS);
    let y_max = ticks.last().copied().unwrap_or(0.0);
    let geometry = ChartGeometry::new(plot, series.len(), y_max);
    let grid = Stroke::new(1.0, colors::GRID);
    let axis = Stroke::new(1.0, colors::AXIS);

    // Grid and Y axis labels
    for &tick in &ticks {
        let y = geometry.y(tick);
        painter.extend(Shape::dashed_line(&[pos2(plot.left(), y), pos2(plot.right(), y)], grid, 3.0, 3.0));
        painter.text(pos2(plot.left() - 8.0, y), Align2::RIGHT_CENTER, format_value(tick), font.clone(), colors::AXIS);
    }

    // Grid and X axis labels
    for (i, point) in series.iter().enumerate() {
        let x = geometry.x(i);
        painter.extend(Shape::dashed_line(&[pos2(x, plot.top()), pos2(x, plot.bottom())], grid, 3.0, 3.0));
        painter.text(pos2(x, plot.bottom() + 6.0), Align2::CENTER_TOP, point.label, font.clone(), colors::AXIS);
    }

    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
    painter.line_segment([plot.left_top(), plot.left_bottom()], axis);

    let points: Vec<Pos2> = series
        .iter()
        .enumerate()
        .map(|(i, p)| geometry.point(i, p.value))
        .collect();

    painter.add(Shape::line(points.clone(), Stroke::new(2.0, colors::ACCENT)));
    for &p in &points {
        painter.circle(p, 3.0, colors::SURFACE, Stroke::new(2.0, colors::ACCENT));
    }

    // Legend
    let legend_center = pos2(rect.center().x, rect.bottom() - LEGEND_HEIGHT / 2.0);
    let swatch = [legend_center - vec2(40.0, 0.0), legend_center - vec2(24.0, 0.0)];
    painter.line_segment(swatch, Stroke::new(2.0, colors::ACCENT));
    painter.circle(swatch[0].lerp(swatch[1], 0.5), 3.0, colors::SURFACE, Stroke::new(2.0, colors::ACCENT));
    painter.text(legend_center - vec2(16.0, 0.0), Align2::LEFT_CENTER, name, font, colors::ACCENT);

    // Tooltip
    let hovered = response
        .hover_pos()
        .filter(|pos| plot.expand(PLOT_PADDING).contains(*pos))
        .and_then(|pos| geometry.nearest_index(pos.x));

    match hovered {
        Some(i) => {
            let active = points[i];
            painter.line_segment([pos2(active.x, plot.top()), pos2(active.x, plot.bottom())], axis);
            painter.circle_filled(active, 8.0, colors::ACCENT);

            let point = series[i];
            response.on_hover_ui_at_pointer(|ui| {
                ui.label(RichText::new(tooltip_text(&point, name)).color(colors::TEXT));
            })
        }
        None => response,
    }
}
