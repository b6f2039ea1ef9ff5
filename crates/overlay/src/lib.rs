//! Overlay controller
//!
//! Binds an overlay to a target window, gates structural changes behind a
//! one-way lock, and dispatches typed shapes to a rendering surface.

pub mod controller;
pub mod draw_list;
pub mod scene;
pub mod surface;

pub use controller::{LockState, Overlay};
pub use draw_list::DrawList;
pub use scene::SceneConfig;
pub use surface::{RenderingSurface, SurfaceHandle};

use shapes::{ShapeError, ShapeKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("Overlay is locked from modification")]
    Locked,

    #[error("Payload for {actual} does not match the required {expected} record")]
    TypeMismatch {
        expected: ShapeKind,
        actual: ShapeKind,
    },

    #[error("Invalid shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("Rendering surface error: {0}")]
    Surface(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scene shape #{index} rejected: {source}")]
    Scene {
        index: usize,
        #[source]
        source: Box<OverlayError>,
    },
}

pub type OverlayResult<T> = Result<T, OverlayError>;

/// Window the overlay is drawn above
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TargetWindow {
    /// Owning process id
    pub pid: u32,
    /// Raw main window handle
    pub hwnd: isize,
}

impl TargetWindow {
    pub fn new(pid: u32, hwnd: isize) -> Self {
        Self { pid, hwnd }
    }
}
