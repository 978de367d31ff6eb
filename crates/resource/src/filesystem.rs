//! Logos and other branding assets served from a directory.
//!
//! Templates store logo paths the way the storefront serves them, rooted at
//! the site: `/logo-b.svg` maps to `<asset_dir>/logo-b.svg`. Remote URLs and
//! data URIs are never fetched; the document renderer treats the resulting
//! error as "no logo". Paths may not leave the asset directory.

use rentdesk_traits::{AssetBytes, ResourceError, ResourceProvider};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

#[derive(Debug)]
pub struct FilesystemResourceProvider {
    root: PathBuf,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn base(&self) -> &Path {
        &self.root
    }

    fn locate(&self, path: &str) -> Result<PathBuf, ResourceError> {
        let relative = site_relative(path)?;
        let full = self.root.join(relative);

        // Symlinks may still point outside the root.
        if let (Ok(root), Ok(target)) = (self.root.canonicalize(), full.canonicalize())
            && !target.starts_with(&root)
        {
            return Err(ResourceError::Unsupported(path.to_string()));
        }
        Ok(full)
    }
}

/// Strips the site root from `path`, rejecting anything that is not a plain
/// relative file path.
fn site_relative(path: &str) -> Result<&Path, ResourceError> {
    let unsupported = || ResourceError::Unsupported(path.to_string());
    if path.contains("://") || path.starts_with("data:") {
        return Err(unsupported());
    }

    let relative = Path::new(path.trim_start_matches('/'));
    let mut components = relative.components().peekable();
    if components.peek().is_none() {
        return Err(ResourceError::NotFound(path.to_string()));
    }
    if components.all(|c| matches!(c, Component::Normal(_) | Component::CurDir)) {
        Ok(relative)
    } else {
        Err(unsupported())
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<AssetBytes, ResourceError> {
        let full = self.locate(path)?;
        log::debug!("Loading asset '{}' from {}", path, full.display());
        match std::fs::read(&full) {
            Ok(bytes) => Ok(bytes.into()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ResourceError::NotFound(path.to_string())),
            Err(e) => Err(ResourceError::Unreadable {
                path: path.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn exists(&self, path: &str) -> bool {
        self.locate(path).is_ok_and(|p| p.is_file())
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}
