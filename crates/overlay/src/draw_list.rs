//! Headless rendering surface
//!
//! Keeps the draw list, visibility and paint requests in memory. Used when
//! no window backend is attached, e.g. to validate scenes.

use crate::surface::RenderingSurface;
use crate::{OverlayResult, TargetWindow};
use shapes::{
    ArcShape, ClosedCurve, Curve, GraphicPath, IconShape, ImageShape, PieShape, PointF, Polygon,
    RectF, ShapeKind, ShapePayload, TextShape,
};
use std::collections::BTreeMap;
use tracing::trace;

/// Control points per cubic segment after the start point
const POINTS_PER_SEGMENT: usize = 3;

/// One cubic Bézier segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSegment {
    pub start: PointF,
    pub control1: PointF,
    pub control2: PointF,
    pub end: PointF,
}

/// In-memory draw list
#[derive(Debug, Default)]
pub struct DrawList {
    target: TargetWindow,
    borderless: bool,
    visible: bool,
    items: Vec<ShapePayload>,
    bezier_points: Vec<PointF>,
    refresh_count: u64,
}

impl DrawList {
    pub fn new(target: TargetWindow, borderless: bool) -> Self {
        Self {
            target,
            borderless,
            ..Default::default()
        }
    }

    pub fn target(&self) -> TargetWindow {
        self.target
    }

    pub fn is_borderless(&self) -> bool {
        self.borderless
    }

    /// Shapes in insertion order, Bézier control points included
    pub fn items(&self) -> &[ShapePayload] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of repaints requested so far
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    /// Shape count per kind
    pub fn counts(&self) -> BTreeMap<ShapeKind, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.kind()).or_insert(0) += 1;
        }
        counts
    }

    pub fn bezier_points(&self) -> &[PointF] {
        &self.bezier_points
    }

    /// Complete cubic segments built from the accumulated control points.
    /// Each segment starts where the previous one ended.
    pub fn bezier_segments(&self) -> Vec<BezierSegment> {
        let Some((&first, rest)) = self.bezier_points.split_first() else {
            return Vec::new();
        };

        let mut start = first;
        rest.chunks_exact(POINTS_PER_SEGMENT)
            .map(|chunk| {
                let segment = BezierSegment {
                    start,
                    control1: chunk[0],
                    control2: chunk[1],
                    end: chunk[2],
                };
                start = segment.end;
                segment
            })
            .collect()
    }

    /// Control points that do not complete a segment yet
    pub fn pending_bezier_points(&self) -> usize {
        let n = self.bezier_points.len();
        if n <= POINTS_PER_SEGMENT {
            // The start point alone does not draw anything yet
            return n;
        }
        (n - 1) % POINTS_PER_SEGMENT
    }

    /// Drop every accumulated shape
    pub fn clear(&mut self) {
        self.items.clear();
        self.bezier_points.clear();
    }

    fn push(&mut self, payload: ShapePayload) {
        trace!(kind = %payload.kind(), index = self.items.len(), "draw list push");
        self.items.push(payload);
    }
}

impl RenderingSurface for DrawList {
    fn create(target: &TargetWindow, borderless: bool) -> OverlayResult<Self> {
        Ok(Self::new(*target, borderless))
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn add_rectangle(&mut self, rect: RectF) {
        self.push(ShapePayload::Rectangle(rect));
    }

    fn add_arc(&mut self, arc: ArcShape) {
        self.push(ShapePayload::Arc(arc));
    }

    fn add_bezier(&mut self, point: PointF) {
        self.bezier_points.push(point);
        self.push(ShapePayload::Bezier(point));
    }

    fn add_closed_curve(&mut self, curve: ClosedCurve) {
        self.push(ShapePayload::ClosedCurve(curve));
    }

    fn add_curve(&mut self, curve: Curve) {
        self.push(ShapePayload::Curve(curve));
    }

    fn add_ellipse(&mut self, bounds: RectF) {
        self.push(ShapePayload::Ellipse(bounds));
    }

    fn add_icon(&mut self, icon: IconShape) {
        self.push(ShapePayload::Icon(icon));
    }

    fn add_image(&mut self, image: ImageShape) {
        self.push(ShapePayload::Image(image));
    }

    fn add_graphic_path(&mut self, path: GraphicPath) {
        self.push(ShapePayload::GraphicPath(path));
    }

    fn add_pie(&mut self, pie: PieShape) {
        self.push(ShapePayload::Pie(pie));
    }

    fn add_polygon(&mut self, polygon: Polygon) {
        self.push(ShapePayload::Polygon(polygon));
    }

    fn add_string(&mut self, text: TextShape) {
        self.push(ShapePayload::String(text));
    }

    fn refresh(&mut self) {
        self.refresh_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> PointF {
        PointF::new(x, y)
    }

    #[test]
    fn keeps_insertion_order_and_counts() {
        let mut list = DrawList::new(TargetWindow::new(1, 0x10), true);
        list.add_rectangle(RectF::new(0.0, 0.0, 5.0, 5.0));
        list.add_ellipse(RectF::new(1.0, 1.0, 2.0, 2.0));
        list.add_rectangle(RectF::new(2.0, 2.0, 5.0, 5.0));

        assert_eq!(list.len(), 3);
        assert_eq!(list.items()[1].kind(), ShapeKind::Ellipse);
        assert_eq!(list.counts()[&ShapeKind::Rectangle], 2);
        assert_eq!(list.counts()[&ShapeKind::Ellipse], 1);
    }

    #[test]
    fn bezier_points_group_into_chained_segments() {
        let mut list = DrawList::default();
        assert!(list.bezier_segments().is_empty());
        assert_eq!(list.pending_bezier_points(), 0);

        list.add_bezier(p(0.0, 0.0));
        assert!(list.bezier_segments().is_empty());
        assert_eq!(list.pending_bezier_points(), 1);

        for point in [p(1.0, 2.0), p(3.0, 2.0)] {
            list.add_bezier(point);
        }
        assert!(list.bezier_segments().is_empty());
        assert_eq!(list.pending_bezier_points(), 3);

        list.add_bezier(p(4.0, 0.0));
        assert_eq!(
            list.bezier_segments(),
            vec![BezierSegment {
                start: p(0.0, 0.0),
                control1: p(1.0, 2.0),
                control2: p(3.0, 2.0),
                end: p(4.0, 0.0),
            }]
        );
        assert_eq!(list.pending_bezier_points(), 0);

        list.add_bezier(p(5.0, -2.0));
        list.add_bezier(p(7.0, -2.0));
        assert_eq!(list.bezier_segments().len(), 1);
        assert_eq!(list.pending_bezier_points(), 2);

        list.add_bezier(p(8.0, 0.0));
        let segments = list.bezier_segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].start, p(4.0, 0.0));
        assert_eq!(segments[1].end, p(8.0, 0.0));
    }

    #[test]
    fn visibility_refresh_and_clear() {
        let mut list = DrawList::create(&TargetWindow::new(7, 0x20), false).unwrap();
        assert!(!list.is_borderless());
        assert!(!list.is_visible());

        list.show();
        assert!(list.is_visible());
        list.hide();
        assert!(!list.is_visible());

        list.add_bezier(p(0.0, 0.0));
        list.refresh();
        list.refresh();
        assert_eq!(list.refresh_count(), 2);

        list.clear();
        assert!(list.is_empty());
        assert!(list.bezier_points().is_empty());
        assert_eq!(list.refresh_count(), 2);
    }
}
