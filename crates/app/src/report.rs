//! Text summary of a replayed scene

use overlay::{DrawList, RenderingSurface};
use shapes::{PathSegment, ShapePayload};
use std::fmt::Write;

/// One-line description of a draw-list entry
pub fn describe(payload: &ShapePayload) -> String {
    match payload {
        ShapePayload::Rectangle(r) | ShapePayload::Ellipse(r) => {
            format!("({}, {}) {}x{}", r.x, r.y, r.width, r.height)
        }
        ShapePayload::Arc(a) => format!(
            "({}, {}) {}x{} from {}° sweep {}°",
            a.bounds.x, a.bounds.y, a.bounds.width, a.bounds.height, a.start_angle, a.sweep_angle
        ),
        ShapePayload::Pie(p) => format!(
            "({}, {}) {}x{} from {}° sweep {}°",
            p.bounds.x, p.bounds.y, p.bounds.width, p.bounds.height, p.start_angle, p.sweep_angle
        ),
        ShapePayload::Bezier(point) => format!("control point ({}, {})", point.x, point.y),
        ShapePayload::ClosedCurve(c) => {
            format!("{} points, tension {}", c.points().len(), c.tension())
        }
        ShapePayload::Curve(c) => format!("{} points, tension {}", c.points().len(), c.tension()),
        ShapePayload::Icon(i) => format!(
            "{} at ({}, {})",
            i.icon.path().display(),
            i.position.x,
            i.position.y
        ),
        ShapePayload::Image(i) => format!(
            "{} into ({}, {}) {}x{}",
            i.image.path().display(),
            i.bounds.x,
            i.bounds.y,
            i.bounds.width,
            i.bounds.height
        ),
        ShapePayload::GraphicPath(path) => {
            let closed = path
                .segments()
                .iter()
                .filter(|s| matches!(s, PathSegment::Close))
                .count();
            format!(
                "{} segments, {} figures, {} closed",
                path.segments().len(),
                path.figure_count(),
                closed
            )
        }
        ShapePayload::Polygon(p) => format!("{} points", p.points().len()),
        ShapePayload::String(t) => format!(
            "{:?} at ({}, {}) {} {}pt #{:08X}",
            t.text,
            t.position.x,
            t.position.y,
            t.font.family,
            t.font.size,
            t.color.to_argb()
        ),
    }
}

/// Full report: one line per entry, then totals
pub fn render(list: &DrawList, locked: bool) -> String {
    let mut out = String::new();

    for (index, item) in list.items().iter().enumerate() {
        let _ = writeln!(out, "{:>4}  {:<12} {}", index, item.kind(), describe(item));
    }

    let _ = writeln!(out);
    for (kind, count) in list.counts() {
        let _ = writeln!(out, "{:<12} {}", kind, count);
    }
    let _ = writeln!(
        out,
        "bezier segments: {} ({} pending points)",
        list.bezier_segments().len(),
        list.pending_bezier_points()
    );
    let _ = writeln!(out, "refreshes: {}", list.refresh_count());
    let _ = writeln!(out, "visible: {}", list.is_visible());
    let _ = writeln!(out, "locked: {}", locked);

    out
}
