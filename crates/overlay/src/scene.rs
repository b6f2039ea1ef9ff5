//! Scene configuration
//!
//! A scene is a JSON file describing overlay options and the shapes to
//! draw on it.

use crate::{Overlay, OverlayError, OverlayResult};
use serde::{Deserialize, Serialize};
use shapes::RawShape;
use std::path::Path;
use tracing::info;

/// Overlay scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Suppress the overlay window chrome
    pub borderless: bool,
    /// Show the overlay once the shapes are added
    pub visible: bool,
    /// Lock the overlay after the shapes are added
    pub lock_after_load: bool,
    pub shapes: Vec<RawShape>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            borderless: true,
            visible: true,
            lock_after_load: false,
            shapes: Vec::new(),
        }
    }
}

impl SceneConfig {
    /// Load a scene from a JSON file
    pub fn load(path: impl AsRef<Path>) -> OverlayResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> OverlayResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Replay the scene onto `overlay`. Stops at the first shape that is
    /// rejected.
    pub fn apply(&self, overlay: &mut Overlay) -> OverlayResult<()> {
        for (index, shape) in self.shapes.iter().enumerate() {
            overlay
                .add_raw(shape)
                .map_err(|source| OverlayError::Scene {
                    index,
                    source: Box::new(source),
                })?;
        }

        overlay.set_visible(self.visible);
        if self.lock_after_load {
            overlay.lock();
        }

        info!(
            shapes = self.shapes.len(),
            visible = self.visible,
            locked = overlay.is_locked(),
            "scene applied"
        );
        Ok(())
    }
}
