//! Overlay lifecycle and shape dispatch

use crate::surface::{into_handle, RenderingSurface, SurfaceHandle};
use crate::{OverlayError, OverlayResult, TargetWindow};
use shapes::{RawShape, ShapeKind, ShapePayload};
use tracing::{debug, warn};

/// Modification lock state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LockState {
    /// Shapes and surface may be changed
    #[default]
    Unlocked,
    /// No further structural changes
    Locked,
}

impl LockState {
    /// Check if structural changes are allowed
    pub fn can_modify(&self) -> bool {
        matches!(self, LockState::Unlocked)
    }
}

/// Overlay drawn above a target window
pub struct Overlay {
    target: TargetWindow,
    surface: SurfaceHandle,
    lock: LockState,
}

impl Overlay {
    /// Bind an existing surface to `target`
    pub fn new(target: TargetWindow, surface: SurfaceHandle) -> Self {
        Self {
            target,
            surface,
            lock: LockState::Unlocked,
        }
    }

    /// Create a borderless overlay above `target`
    pub fn create<S>(target: TargetWindow) -> OverlayResult<Self>
    where
        S: RenderingSurface + Send + 'static,
    {
        Self::create_with_options::<S>(target, true)
    }

    /// Create an overlay above `target`. A bordered window is useful when
    /// testing placement.
    pub fn create_with_options<S>(target: TargetWindow, borderless: bool) -> OverlayResult<Self>
    where
        S: RenderingSurface + Send + 'static,
    {
        let surface = S::create(&target, borderless)?;
        debug!(pid = target.pid, hwnd = target.hwnd, borderless, "overlay created");
        Ok(Self::new(target, into_handle(surface)))
    }

    pub fn target(&self) -> TargetWindow {
        self.target
    }

    pub fn lock_state(&self) -> LockState {
        self.lock
    }

    pub fn is_locked(&self) -> bool {
        !self.lock.can_modify()
    }

    /// Lock the overlay against further modification. There is no unlock.
    pub fn lock(&mut self) {
        if self.lock.can_modify() {
            debug!(hwnd = self.target.hwnd, "overlay locked");
        }
        self.lock = LockState::Locked;
    }

    fn ensure_unlocked(&self, operation: &str) -> OverlayResult<()> {
        if self.lock.can_modify() {
            Ok(())
        } else {
            warn!(hwnd = self.target.hwnd, operation, "rejected: overlay is locked");
            Err(OverlayError::Locked)
        }
    }

    /// Current rendering surface
    pub fn rendering_surface(&self) -> OverlayResult<SurfaceHandle> {
        self.ensure_unlocked("rendering_surface")?;
        Ok(self.surface.clone())
    }

    /// Replace the rendering surface
    pub fn set_rendering_surface(&mut self, surface: SurfaceHandle) -> OverlayResult<()> {
        self.ensure_unlocked("set_rendering_surface")?;
        self.surface = surface;
        debug!(hwnd = self.target.hwnd, "rendering surface replaced");
        Ok(())
    }

    /// Show or hide the overlay window. Allowed while locked.
    pub fn set_visible(&self, visible: bool) {
        let mut surface = self.surface.lock();
        if visible {
            surface.show();
        } else {
            surface.hide();
        }
        debug!(hwnd = self.target.hwnd, visible, "overlay visibility changed");
    }

    /// Add `payload` as a shape of `kind` and request a repaint
    pub fn add_shape(&mut self, kind: ShapeKind, payload: ShapePayload) -> OverlayResult<()> {
        self.ensure_unlocked("add_shape")?;

        if !kind.accepts(&payload) {
            let actual = payload.kind();
            warn!(expected = %kind, actual = %actual, "rejected: payload does not match kind");
            return Err(OverlayError::TypeMismatch {
                expected: kind,
                actual,
            });
        }

        let mut surface = self.surface.lock();
        match payload {
            ShapePayload::Rectangle(rect) => surface.add_rectangle(rect),
            ShapePayload::Arc(arc) => surface.add_arc(arc),
            ShapePayload::Bezier(point) => surface.add_bezier(point),
            ShapePayload::ClosedCurve(curve) => surface.add_closed_curve(curve),
            ShapePayload::Curve(curve) => surface.add_curve(curve),
            ShapePayload::Ellipse(bounds) => surface.add_ellipse(bounds),
            ShapePayload::Icon(icon) => surface.add_icon(icon),
            ShapePayload::Image(image) => surface.add_image(image),
            ShapePayload::GraphicPath(path) => surface.add_graphic_path(path),
            ShapePayload::Pie(pie) => surface.add_pie(pie),
            ShapePayload::Polygon(polygon) => surface.add_polygon(polygon),
            ShapePayload::String(text) => surface.add_string(text),
        }
        surface.refresh();

        debug!(kind = %kind, "shape added");
        Ok(())
    }

    /// Add `payload` under its own kind
    pub fn add(&mut self, payload: ShapePayload) -> OverlayResult<()> {
        self.add_shape(payload.kind(), payload)
    }

    /// Add a shape read from an untyped source.
    ///
    /// The record is decoded as the named kind, so a record shaped for a
    /// different kind fails as [`OverlayError::Shape`] with
    /// `ShapeError::Malformed`, never as [`OverlayError::TypeMismatch`].
    /// An unknown kind name fails with `ShapeError::InvalidKind`.
    pub fn add_raw(&mut self, raw: &RawShape) -> OverlayResult<()> {
        self.ensure_unlocked("add_raw")?;

        let payload = raw.to_payload().map_err(|e| {
            warn!(kind = %raw.kind, error = %e, "rejected: invalid raw shape");
            OverlayError::from(e)
        })?;
        self.add(payload)
    }
}

impl std::fmt::Debug for Overlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Overlay")
            .field("target", &self.target)
            .field("lock", &self.lock)
            .finish_non_exhaustive()
    }
}
