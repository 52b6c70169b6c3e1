// src/ui/visualization/svg.rs
use super::plot::{GRID_DIVISIONS, HIT_RGB, MISS_RGB};
use crate::math::{region::Region, types::ClassifiedSample};
use ::svg::Document;
use ::svg::node::element::{Circle, Group, Line, Rectangle};

/// Relative Größen für Linien und Punkte, abhängig von der Kantenlänge der Ansicht.
struct SvgStyle {
    stroke_w_thin: f64,
    point_radius: f64,
    dash: f64,
}

impl SvgStyle {
    fn for_side(side: f64) -> Self {
        Self {
            stroke_w_thin: side * 0.002,
            point_radius: side * 0.004,
            dash: side * 0.01,
        }
    }
}

fn rgb_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Baut ein SVG-Dokument der Ansicht `[a, a+r] × [b, b+r]`.
///
/// SVG counts y downwards, so y values are mirrored inside the view box:
/// `y_svg = 2b + r - y`.
pub fn build_plot_document(
    region: &Region,
    samples: &[ClassifiedSample],
    svg_pixel_size: f64,
) -> Document {
    let (a, b, r) = (region.a(), region.b(), region.radius());
    let flip_y = |y: f64| 2.0 * b + r - y;
    let style = SvgStyle::for_side(r);

    let background = Rectangle::new()
        .set("x", a)
        .set("y", b)
        .set("width", r)
        .set("height", r)
        .set("fill", "#f0f0f0");

    let mut grid = Group::new()
        .set("stroke", "#aaaaaa")
        .set("stroke-width", style.stroke_w_thin)
        .set("stroke-dasharray", format!("{},{}", style.dash, style.dash));
    let (xs, ys) = region.sampling_bounds().grid_ticks(GRID_DIVISIONS);
    for x in xs {
        grid = grid.add(
            Line::new()
                .set("x1", x)
                .set("y1", b)
                .set("x2", x)
                .set("y2", b + r),
        );
    }
    for y in ys {
        let y = flip_y(y);
        grid = grid.add(
            Line::new()
                .set("x1", a)
                .set("y1", y)
                .set("x2", a + r)
                .set("y2", y),
        );
    }

    // Kreis um (a, b); die viewBox schneidet ihn auf den sichtbaren Quadranten zu
    let boundary = Circle::new()
        .set("cx", a)
        .set("cy", flip_y(b))
        .set("r", r)
        .set("fill", "red")
        .set("fill-opacity", 0.2);

    let mut points = Group::new();
    for sample in samples {
        let color = if sample.hit { HIT_RGB } else { MISS_RGB };
        points = points.add(
            Circle::new()
                .set("cx", sample.x())
                .set("cy", flip_y(sample.y()))
                .set("r", style.point_radius)
                .set("fill", rgb_hex(color)),
        );
    }

    Document::new()
        .set("width", svg_pixel_size)
        .set("height", svg_pixel_size)
        .set("viewBox", (a, b, r, r))
        .add(background)
        .add(grid)
        .add(boundary)
        .add(points)
}
