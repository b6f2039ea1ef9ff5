//! Rendering surface boundary
//!
//! The surface owns the overlay window, the accumulated draw list and the
//! paint cycle. The controller only drives it through this trait.

use crate::{OverlayResult, TargetWindow};
use parking_lot::Mutex;
use shapes::{
    ArcShape, ClosedCurve, Curve, GraphicPath, IconShape, ImageShape, PieShape, PointF, Polygon,
    RectF, TextShape,
};
use std::sync::Arc;

/// Shared handle to a surface. Calls must stay on the thread that owns the
/// surface's window.
pub type SurfaceHandle = Arc<Mutex<dyn RenderingSurface + Send>>;

pub trait RenderingSurface {
    /// Create a surface positioned over `target`
    fn create(target: &TargetWindow, borderless: bool) -> OverlayResult<Self>
    where
        Self: Sized;

    fn show(&mut self);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;

    fn add_rectangle(&mut self, rect: RectF);
    fn add_arc(&mut self, arc: ArcShape);
    /// Append one control point to the accumulated Bézier curve
    fn add_bezier(&mut self, point: PointF);
    fn add_closed_curve(&mut self, curve: ClosedCurve);
    fn add_curve(&mut self, curve: Curve);
    fn add_ellipse(&mut self, bounds: RectF);
    fn add_icon(&mut self, icon: IconShape);
    fn add_image(&mut self, image: ImageShape);
    fn add_graphic_path(&mut self, path: GraphicPath);
    fn add_pie(&mut self, pie: PieShape);
    fn add_polygon(&mut self, polygon: Polygon);
    fn add_string(&mut self, text: TextShape);

    /// Request a repaint. Does not wait for the paint to finish.
    fn refresh(&mut self);
}

/// Wrap a surface into a shareable handle
pub fn into_handle<S: RenderingSurface + Send + 'static>(surface: S) -> SurfaceHandle {
    Arc::new(Mutex::new(surface))
}
