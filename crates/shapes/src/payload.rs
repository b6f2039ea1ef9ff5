//! Shape payload records
//!
//! Every record that carries a point list validates it on construction, and
//! deserialization goes through the same constructors.

use crate::{PointF, RectF, Color, ShapeError, ShapeKind, ShapeResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default curve tension used when none is given
pub const DEFAULT_TENSION: f32 = 0.5;

/// One shape instance, tagged by kind
#[derive(Debug, Clone, PartialEq)]
pub enum ShapePayload {
    Rectangle(RectF),
    Arc(ArcShape),
    /// One control point; a curve is accumulated from repeated adds
    Bezier(PointF),
    ClosedCurve(ClosedCurve),
    Curve(Curve),
    Ellipse(RectF),
    Icon(IconShape),
    Image(ImageShape),
    GraphicPath(GraphicPath),
    Pie(PieShape),
    Polygon(Polygon),
    String(TextShape),
}

impl ShapePayload {
    /// Kind implied by this variant
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapePayload::Rectangle(_) => ShapeKind::Rectangle,
            ShapePayload::Arc(_) => ShapeKind::Arc,
            ShapePayload::Bezier(_) => ShapeKind::Bezier,
            ShapePayload::ClosedCurve(_) => ShapeKind::ClosedCurve,
            ShapePayload::Curve(_) => ShapeKind::Curve,
            ShapePayload::Ellipse(_) => ShapeKind::Ellipse,
            ShapePayload::Icon(_) => ShapeKind::Icon,
            ShapePayload::Image(_) => ShapeKind::Image,
            ShapePayload::GraphicPath(_) => ShapeKind::GraphicPath,
            ShapePayload::Pie(_) => ShapeKind::Pie,
            ShapePayload::Polygon(_) => ShapeKind::Polygon,
            ShapePayload::String(_) => ShapeKind::String,
        }
    }
}

/// Elliptical arc inside a bounding box, angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcShape {
    pub bounds: RectF,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

/// Filled wedge inside a bounding box, angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieShape {
    pub bounds: RectF,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

fn require_points(shape: ShapeKind, points: &[PointF], required: usize) -> ShapeResult<()> {
    if points.len() < required {
        return Err(ShapeError::TooFewPoints {
            shape,
            required,
            actual: points.len(),
        });
    }
    Ok(())
}

fn require_tension(tension: f32) -> ShapeResult<()> {
    if !tension.is_finite() || tension < 0.0 {
        return Err(ShapeError::InvalidTension(tension));
    }
    Ok(())
}

fn default_tension() -> f32 {
    DEFAULT_TENSION
}

#[derive(Deserialize)]
struct CurveDef {
    points: Vec<PointF>,
    #[serde(default = "default_tension")]
    tension: f32,
}

/// Open cardinal spline through at least two points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveDef")]
pub struct Curve {
    points: Vec<PointF>,
    tension: f32,
}

impl Curve {
    pub const MIN_POINTS: usize = 2;

    pub fn new(points: Vec<PointF>, tension: f32) -> ShapeResult<Self> {
        require_points(ShapeKind::Curve, &points, Self::MIN_POINTS)?;
        require_tension(tension)?;
        Ok(Self { points, tension })
    }

    pub fn points(&self) -> &[PointF] {
        &self.points
    }

    pub fn tension(&self) -> f32 {
        self.tension
    }
}

impl TryFrom<CurveDef> for Curve {
    type Error = ShapeError;

    fn try_from(def: CurveDef) -> Result<Self, Self::Error> {
        Self::new(def.points, def.tension)
    }
}

/// Closed cardinal spline through at least three points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveDef")]
pub struct ClosedCurve {
    points: Vec<PointF>,
    tension: f32,
}

impl ClosedCurve {
    pub const MIN_POINTS: usize = 3;

    pub fn new(points: Vec<PointF>, tension: f32) -> ShapeResult<Self> {
        require_points(ShapeKind::ClosedCurve, &points, Self::MIN_POINTS)?;
        require_tension(tension)?;
        Ok(Self { points, tension })
    }

    pub fn points(&self) -> &[PointF] {
        &self.points
    }

    pub fn tension(&self) -> f32 {
        self.tension
    }
}

impl TryFrom<CurveDef> for ClosedCurve {
    type Error = ShapeError;

    fn try_from(def: CurveDef) -> Result<Self, Self::Error> {
        Self::new(def.points, def.tension)
    }
}

#[derive(Deserialize)]
struct PolygonDef {
    points: Vec<PointF>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolygonDef")]
pub struct Polygon {
    points: Vec<PointF>,
}

impl Polygon {
    pub const MIN_POINTS: usize = 3;

    pub fn new(points: Vec<PointF>) -> ShapeResult<Self> {
        require_points(ShapeKind::Polygon, &points, Self::MIN_POINTS)?;
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PointF] {
        &self.points
    }
}

impl TryFrom<PolygonDef> for Polygon {
    type Error = ShapeError;

    fn try_from(def: PolygonDef) -> Result<Self, Self::Error> {
        Self::new(def.points)
    }
}

/// Path to an icon or image file. Never opened here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceRef(PathBuf);

impl ResourceRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconShape {
    pub icon: ResourceRef,
    pub position: PointF,
}

/// Image scaled into `bounds`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageShape {
    pub image: ResourceRef,
    pub bounds: RectF,
}

/// One step of a graphic path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum PathSegment {
    /// Start a new figure
    MoveTo(PointF),
    LineTo(PointF),
    /// Cubic Bézier from the current point
    BezierTo {
        control1: PointF,
        control2: PointF,
        end: PointF,
    },
    /// Close the current figure
    Close,
}

#[derive(Deserialize)]
struct GraphicPathDef {
    segments: Vec<PathSegment>,
}

/// Ordered path geometry; always starts with `MoveTo`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GraphicPathDef")]
pub struct GraphicPath {
    segments: Vec<PathSegment>,
}

impl GraphicPath {
    pub fn new(segments: Vec<PathSegment>) -> ShapeResult<Self> {
        match segments.first() {
            None => return Err(ShapeError::InvalidPath("path has no segments".into())),
            Some(PathSegment::MoveTo(_)) => {}
            Some(other) => {
                return Err(ShapeError::InvalidPath(format!(
                    "path must start with MoveTo, found {:?}",
                    other
                )))
            }
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of figures (one per `MoveTo`)
    pub fn figure_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PathSegment::MoveTo(_)))
            .count()
    }
}

impl TryFrom<GraphicPathDef> for GraphicPath {
    type Error = ShapeError;

    fn try_from(def: GraphicPathDef) -> Result<Self, Self::Error> {
        Self::new(def.segments)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontDescriptor {
    pub family: String,
    /// Size in points
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Segoe UI".to_string(),
            size: 12.0,
            bold: false,
            italic: false,
        }
    }
}

/// Text drawn with its top-left corner at `position`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextShape {
    pub text: String,
    #[serde(default)]
    pub font: FontDescriptor,
    pub position: PointF,
    #[serde(default)]
    pub color: Color,
}
