//! Capture adapter: turns a named on-screen region into a raster image.
//!
//! The export pipeline identifies regions by element id. Whatever owns the
//! screen (a browser bridge, a headless renderer, a directory of snapshots)
//! implements [`CaptureSource`].

use image::RgbaImage;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaptureError {
    #[error("Element with id \"{0}\" not found")]
    ElementNotFound(String),

    #[error("Failed to rasterize element \"{element_id}\": {message}")]
    Rasterize { element_id: String, message: String },
}

pub trait CaptureSource: Send + Sync + Debug {
    /// Rasterize the element. Transparent pixels are composited onto white by
    /// the document renderer, so implementations may return them as-is.
    fn capture(&self, element_id: &str) -> Result<RgbaImage, CaptureError>;

    /// Whether `element_id` currently resolves to something capturable.
    fn contains(&self, element_id: &str) -> bool;

    fn name(&self) -> &'static str;
}

/// Captures registered ahead of time, keyed by element id.
#[derive(Debug, Default)]
pub struct InMemoryCaptureSource {
    captures: RwLock<HashMap<String, RgbaImage>>,
}

impl InMemoryCaptureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, element_id: impl Into<String>, image: RgbaImage) {
        if let Ok(mut captures) = self.captures.write() {
            captures.insert(element_id.into(), image);
        }
    }
}

impl CaptureSource for InMemoryCaptureSource {
    fn capture(&self, element_id: &str) -> Result<RgbaImage, CaptureError> {
        let captures = self.captures.read().map_err(|_| CaptureError::Rasterize {
            element_id: element_id.to_string(),
            message: "capture registry lock poisoned".to_string(),
        })?;
        captures
            .get(element_id)
            .cloned()
            .ok_or_else(|| CaptureError::ElementNotFound(element_id.to_string()))
    }

    fn contains(&self, element_id: &str) -> bool {
        self.captures
            .read()
            .map(|c| c.contains_key(element_id))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryCaptureSource"
    }
}
