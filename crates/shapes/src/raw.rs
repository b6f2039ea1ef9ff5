//! Untyped shape ingestion
//!
//! Scene files and other loosely typed sources describe a shape as a kind
//! name plus a JSON record. This is the single place where such data is
//! checked and turned into a [`ShapePayload`].

use crate::{ShapeError, ShapeKind, ShapePayload, ShapeResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shape as read from an untyped source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawShape {
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

impl RawShape {
    pub fn new(kind: impl Into<String>, data: Value) -> Self {
        Self {
            kind: kind.into(),
            data,
        }
    }

    /// Resolve the kind name, then decode `data` as that kind's record
    pub fn to_payload(&self) -> ShapeResult<ShapePayload> {
        let kind: ShapeKind = self.kind.parse()?;
        ShapePayload::from_raw(kind, &self.data)
    }
}

fn decode<T: DeserializeOwned>(kind: ShapeKind, data: &Value) -> ShapeResult<T> {
    T::deserialize(data).map_err(|e| ShapeError::Malformed {
        kind,
        reason: e.to_string(),
    })
}

impl ShapePayload {
    /// Decode `data` as the record required by `kind`
    pub fn from_raw(kind: ShapeKind, data: &Value) -> ShapeResult<Self> {
        let payload = match kind {
            ShapeKind::Rectangle => ShapePayload::Rectangle(decode(kind, data)?),
            ShapeKind::Arc => ShapePayload::Arc(decode(kind, data)?),
            ShapeKind::Bezier => ShapePayload::Bezier(decode(kind, data)?),
            ShapeKind::ClosedCurve => ShapePayload::ClosedCurve(decode(kind, data)?),
            ShapeKind::Curve => ShapePayload::Curve(decode(kind, data)?),
            ShapeKind::Ellipse => ShapePayload::Ellipse(decode(kind, data)?),
            ShapeKind::Icon => ShapePayload::Icon(decode(kind, data)?),
            ShapeKind::Image => ShapePayload::Image(decode(kind, data)?),
            ShapeKind::GraphicPath => ShapePayload::GraphicPath(decode(kind, data)?),
            ShapeKind::Pie => ShapePayload::Pie(decode(kind, data)?),
            ShapeKind::Polygon => ShapePayload::Polygon(decode(kind, data)?),
            ShapeKind::String => ShapePayload::String(decode(kind, data)?),
        };
        Ok(payload)
    }
}
