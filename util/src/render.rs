//! Drawing a separation as an SVG document.

use kurbo::Rect;
use linesep::{Axis, Separation};
use svg::{
    node::element::{Circle, Line as SvgLine, Rectangle},
    Document,
};

const VERTICAL_COLOR: &str = "#005F73";
const HORIZONTAL_COLOR: &str = "#BB3E03";

/// Draws the points of `separation` and its committed lines.
///
/// SVG's y axis points down, so we flip it to get the usual orientation.
pub fn render_svg(separation: &Separation) -> Document {
    let bounds = bounds(separation);
    let flip = |y: f64| bounds.max_y() + bounds.min_y() - y;

    let size = bounds.width().max(bounds.height());
    let radius = size / 100.0;
    let stroke_width = size / 300.0;

    let mut doc = Document::new()
        .set(
            "viewBox",
            (bounds.min_x(), bounds.min_y(), bounds.width(), bounds.height()),
        )
        .add(
            Rectangle::new()
                .set("x", bounds.min_x())
                .set("y", bounds.min_y())
                .set("width", bounds.width())
                .set("height", bounds.height())
                .set("fill", "white"),
        );

    let segments = separation.to_kurbo_lines(bounds);
    for (segment, line) in segments.iter().zip(separation.lines()) {
        let color = match line.axis {
            Axis::X => VERTICAL_COLOR,
            Axis::Y => HORIZONTAL_COLOR,
        };
        doc = doc.add(
            SvgLine::new()
                .set("x1", segment.p0.x)
                .set("y1", flip(segment.p0.y))
                .set("x2", segment.p1.x)
                .set("y2", flip(segment.p1.y))
                .set("stroke", color)
                .set("stroke-width", stroke_width),
        );
    }

    for p in separation.points() {
        doc = doc.add(
            Circle::new()
                .set("cx", p.x)
                .set("cy", flip(p.y))
                .set("r", radius)
                .set("fill", "black"),
        );
    }

    doc
}

// The bounding box of the points, padded so that points on the boundary
// aren't cut off and a single point still gets a non-empty box.
fn bounds(separation: &Separation) -> Rect {
    let rect = separation.bounding_box();
    let pad = 1.0 + rect.width().max(rect.height()) / 20.0;
    rect.inflate(pad, pad)
}

#[cfg(test)]
mod tests {
    use linesep::{separate, SeparatorConfig};

    use super::*;

    #[test]
    fn draws_everything() {
        let square = [(0.0, 0.0), (0.0, 3.0), (3.0, 0.0), (3.0, 3.0)];
        let sep = separate(&square, &SeparatorConfig::default()).unwrap();
        let text = render_svg(&sep).to_string();
        assert_eq!(text.matches("<circle").count(), 4);
        assert_eq!(text.matches("<line").count(), 2);
        assert!(text.contains(VERTICAL_COLOR));
        assert!(text.contains(HORIZONTAL_COLOR));
    }

    #[test]
    fn single_point() {
        let sep = separate(&[(2.0, 2.0)], &SeparatorConfig::default()).unwrap();
        let rect = bounds(&sep);
        assert!(rect.width() > 0.0);
        assert!(rect.contains(kurbo::Point::new(2.0, 2.0)));
    }
}
