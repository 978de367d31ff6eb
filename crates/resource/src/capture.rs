use rentdesk_traits::{CaptureError, CaptureSource};
use image::RgbaImage;
use std::path::{Path, PathBuf};

const EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Serves captures from pre-rendered snapshots: `<dir>/<element_id>.png`
/// (or `.jpg`/`.jpeg`).
#[derive(Debug)]
pub struct DirectoryCaptureSource {
    dir: PathBuf,
}

impl DirectoryCaptureSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn locate(&self, element_id: &str) -> Option<PathBuf> {
        let valid = !element_id.is_empty()
            && element_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return None;
        }
        EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{}.{}", element_id, ext)))
            .find(|p| p.is_file())
    }
}

impl CaptureSource for DirectoryCaptureSource {
    fn capture(&self, element_id: &str) -> Result<RgbaImage, CaptureError> {
        let path = self
            .locate(element_id)
            .ok_or_else(|| CaptureError::ElementNotFound(element_id.to_string()))?;

        log::debug!("Rasterizing '{}' from {}", element_id, path.display());
        let image = image::open(&path).map_err(|e| CaptureError::Rasterize {
            element_id: element_id.to_string(),
            message: e.to_string(),
        })?;
        Ok(image.to_rgba8())
    }

    fn contains(&self, element_id: &str) -> bool {
        self.locate(element_id).is_some()
    }

    fn name(&self) -> &'static str {
        "DirectoryCaptureSource"
    }
}
