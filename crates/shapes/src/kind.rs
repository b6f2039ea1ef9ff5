//! Shape kinds supported by the overlay

use crate::{ShapeError, ShapePayload};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every shape the overlay can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Arc,
    Bezier,
    ClosedCurve,
    Curve,
    Ellipse,
    Icon,
    Image,
    GraphicPath,
    Pie,
    Polygon,
    String,
}

impl ShapeKind {
    /// All kinds in declaration order
    pub const ALL: [ShapeKind; 12] = [
        ShapeKind::Rectangle,
        ShapeKind::Arc,
        ShapeKind::Bezier,
        ShapeKind::ClosedCurve,
        ShapeKind::Curve,
        ShapeKind::Ellipse,
        ShapeKind::Icon,
        ShapeKind::Image,
        ShapeKind::GraphicPath,
        ShapeKind::Pie,
        ShapeKind::Polygon,
        ShapeKind::String,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Arc => "Arc",
            ShapeKind::Bezier => "Bezier",
            ShapeKind::ClosedCurve => "ClosedCurve",
            ShapeKind::Curve => "Curve",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Icon => "Icon",
            ShapeKind::Image => "Image",
            ShapeKind::GraphicPath => "GraphicPath",
            ShapeKind::Pie => "Pie",
            ShapeKind::Polygon => "Polygon",
            ShapeKind::String => "String",
        }
    }

    /// Check whether `payload` is the record this kind requires
    pub fn accepts(&self, payload: &ShapePayload) -> bool {
        payload.kind() == *self
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ShapeError::InvalidKind(s.to_string()))
    }
}

impl TryFrom<u8> for ShapeKind {
    type Error = ShapeError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| ShapeError::InvalidKind(index.to_string()))
    }
}
