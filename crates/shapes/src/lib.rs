//! Shape registry for the overlay
//!
//! Defines the closed set of drawable shape kinds and the payload record
//! each kind requires.

pub mod geometry;
pub mod kind;
pub mod payload;
pub mod raw;

pub use geometry::{Color, PointF, RectF};
pub use kind::ShapeKind;
pub use payload::{
    ArcShape, ClosedCurve, Curve, FontDescriptor, GraphicPath, IconShape, ImageShape,
    PathSegment, PieShape, Polygon, ResourceRef, ShapePayload, TextShape,
};
pub use raw::RawShape;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Unknown shape kind: {0}")]
    InvalidKind(String),

    #[error("{shape} needs at least {required} points, got {actual}")]
    TooFewPoints {
        shape: ShapeKind,
        required: usize,
        actual: usize,
    },

    #[error("Invalid graphic path: {0}")]
    InvalidPath(String),

    #[error("Curve tension must be finite and non-negative, got {0}")]
    InvalidTension(f32),

    #[error("Payload does not describe a {kind}: {reason}")]
    Malformed { kind: ShapeKind, reason: String },
}

pub type ShapeResult<T> = Result<T, ShapeError>;
