// src/ui/visualization/plot.rs
use crate::math::{
    region::Region,
    types::{Bounds2D, ClassifiedSample, Point2D},
};
use crate::sim::resources::{EstimateHistory, PlotSnapshot};
use bevy_egui::egui::{self, Color32, Pos2, Rect, Sense, Shape, Stroke};
use std::f64::consts::PI;

/// Anzahl der Gitterabschnitte pro Achse (Schrittweite r/10).
pub const GRID_DIVISIONS: usize = 10;

pub const HIT_RGB: (u8, u8, u8) = (0, 168, 255);
pub const MISS_RGB: (u8, u8, u8) = (230, 90, 40);

const BACKGROUND: Color32 = Color32::from_rgb(240, 240, 240);
const GRID_COLOR: Color32 = Color32::from_rgb(170, 170, 170);
const POINT_RADIUS_PX: f32 = 1.5;

fn rgb(color: (u8, u8, u8)) -> Color32 {
    Color32::from_rgb(color.0, color.1, color.2)
}

/// Farbe eines Treffers bzw. Fehlschusses, für Graph und Log.
pub fn sample_color(hit: bool) -> Color32 {
    if hit { rgb(HIT_RGB) } else { rgb(MISS_RGB) }
}

/// Abbildung Datenkoordinaten -> Bildschirm. Die y-Achse zeigt nach oben.
#[derive(Debug, Clone, Copy)]
pub struct PlotTransform {
    view: Bounds2D,
    screen: Rect,
}

impl PlotTransform {
    pub fn new(view: Bounds2D, screen: Rect) -> Self {
        Self { view, screen }
    }

    pub fn to_screen(&self, point: Point2D) -> Pos2 {
        let tx = (point.x - self.view.min.x) / self.view.width();
        let ty = (point.y - self.view.min.y) / self.view.height();
        Pos2::new(
            self.screen.left() + (tx as f32) * self.screen.width(),
            self.screen.bottom() - (ty as f32) * self.screen.height(),
        )
    }

    /// Pixel pro Dateneinheit entlang x.
    pub fn pixels_per_unit(&self) -> f32 {
        (self.screen.width() as f64 / self.view.width()) as f32
    }
}

/// Zeichnet Region, Gitter und Stichproben aus dem Snapshot auf eine quadratische Fläche.
pub fn paint_plot(ui: &mut egui::Ui, snapshot: &PlotSnapshot, size: f32) {
    let (response, painter) = ui.allocate_painter(egui::Vec2::splat(size), Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 0.0, BACKGROUND);

    let Some(region) = snapshot.region else {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No valid region. Enter a, b, r and confirm.",
            egui::FontId::proportional(16.0),
            Color32::DARK_GRAY,
        );
        return;
    };

    let transform = PlotTransform::new(region.sampling_bounds(), rect);
    let painter = painter.with_clip_rect(rect);
    painter.extend(grid_shapes(&region, &transform));

    // Kreisrand und Fläche, rot mit Transparenz
    painter.circle(
        transform.to_screen(region.center()),
        (region.radius() as f32) * transform.pixels_per_unit(),
        Color32::from_rgba_unmultiplied(255, 0, 0, 51),
        Stroke::new(1.0, Color32::from_rgba_unmultiplied(255, 0, 0, 120)),
    );

    painter.extend(sample_shapes(&snapshot.samples, &transform));
}

fn grid_shapes(region: &Region, transform: &PlotTransform) -> Vec<Shape> {
    let bounds = region.sampling_bounds();
    let (xs, ys) = bounds.grid_ticks(GRID_DIVISIONS);
    let vertical = xs.into_iter().map(|x| {
        (
            Point2D::new(x, bounds.min.y),
            Point2D::new(x, bounds.max.y),
        )
    });
    let horizontal = ys.into_iter().map(|y| {
        (
            Point2D::new(bounds.min.x, y),
            Point2D::new(bounds.max.x, y),
        )
    });
    vertical
        .chain(horizontal)
        .flat_map(|(from, to)| {
            Shape::dotted_line(
                &[transform.to_screen(from), transform.to_screen(to)],
                GRID_COLOR,
                6.0,
                0.6,
            )
        })
        .collect()
}

fn sample_shapes(samples: &[ClassifiedSample], transform: &PlotTransform) -> Vec<Shape> {
    samples
        .iter()
        .map(|sample| {
            Shape::circle_filled(
                transform.to_screen(sample.position),
                POINT_RADIUS_PX,
                sample_color(sample.hit),
            )
        })
        .collect()
}

/// Konvergenzdiagramm: π-Schätzung pro Batch, Referenzlinie bei π.
pub fn paint_convergence(ui: &mut egui::Ui, history: &EstimateHistory, size: egui::Vec2) {
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 2.0, BACKGROUND);

    let Some((low, high)) = value_range(history.iter().map(|p| p.pi)) else {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No estimate yet",
            egui::FontId::proportional(12.0),
            Color32::DARK_GRAY,
        );
        return;
    };

    // x-Achse: Anzahl der Stichproben seit Beginn des sichtbaren Verlaufs
    let first_total = history.iter().next().map_or(0, |p| p.total_count);
    let last_total = history.back().map_or(0, |p| p.total_count);
    let span = last_total.saturating_sub(first_total).max(1) as f64;
    let to_screen = |total: u64, value: f64| {
        let tx = (total.saturating_sub(first_total) as f64 / span) as f32;
        let ty = ((value - low) / (high - low)) as f32;
        Pos2::new(
            rect.left() + tx * rect.width(),
            rect.bottom() - ty * rect.height(),
        )
    };

    let reference_y = to_screen(first_total, PI).y;
    painter.extend(Shape::dashed_line(
        &[
            Pos2::new(rect.left(), reference_y),
            Pos2::new(rect.right(), reference_y),
        ],
        Stroke::new(1.0, Color32::RED),
        4.0,
        3.0,
    ));

    let points: Vec<Pos2> = history
        .iter()
        .map(|p| to_screen(p.total_count, p.pi))
        .collect();
    painter.add(Shape::line(points, Stroke::new(1.5, rgb(HIT_RGB))));
}

/// Wertebereich inklusive π, mit etwas Rand. `None` ohne Werte.
fn value_range<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    let mut iter = values.into_iter().peekable();
    iter.peek()?;
    let (low, high) = iter.fold((PI, PI), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let margin = ((high - low) * 0.1).max(1e-3);
    Some((low - margin, high + margin))
}
