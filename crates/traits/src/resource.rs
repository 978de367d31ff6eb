//! Asset lookup for branding logos.
//!
//! Templates reference logos by site-rooted path (`/logo-b.svg`) or URL. The
//! exporter never fetches them itself; it asks a provider, so tests and
//! embedders decide where the bytes come from.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResourceError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Remote URLs, data URIs and paths escaping the asset root.
    #[error("Asset path not supported: {0}")]
    Unsupported(String),

    #[error("Failed to read asset '{path}': {message}")]
    Unreadable { path: String, message: String },
}

/// Asset bytes, shared between the provider and the renderer.
pub type AssetBytes = Arc<[u8]>;

pub trait ResourceProvider: Send + Sync + Debug {
    fn load(&self, path: &str) -> Result<AssetBytes, ResourceError>;

    fn exists(&self, path: &str) -> bool {
        self.load(path).is_ok()
    }

    /// Provider name for log lines.
    fn name(&self) -> &'static str;
}

/// Assets registered up front, looked up by their exact path.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    assets: RwLock<HashMap<String, AssetBytes>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(self, path: impl Into<String>, bytes: impl Into<AssetBytes>) -> Self {
        self.insert(path, bytes);
        self
    }

    pub fn insert(&self, path: impl Into<String>, bytes: impl Into<AssetBytes>) {
        let mut assets = self
            .assets
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        assets.insert(path.into(), bytes.into());
    }

    pub fn len(&self) -> usize {
        self.assets.read().map(|a| a.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<AssetBytes, ResourceError> {
        let assets = self
            .assets
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        assets
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_asset_loads() {
        let provider = InMemoryResourceProvider::new().with_asset("/logo.png", b"\x89PNG".to_vec());

        assert_eq!(&*provider.load("/logo.png").unwrap(), b"\x89PNG");
        assert!(provider.exists("/logo.png"));
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_lookup_is_exact() {
        let provider = InMemoryResourceProvider::new().with_asset("/logo.png", vec![1]);
        assert_eq!(
            provider.load("logo.png"),
            Err(ResourceError::NotFound("logo.png".to_string()))
        );
        assert!(!provider.exists("logo.png"));
    }

    #[test]
    fn test_insert_replaces() {
        let provider = InMemoryResourceProvider::new();
        assert!(provider.is_empty());
        provider.insert("/logo.png", vec![1]);
        provider.insert("/logo.png", vec![2, 3]);
        assert_eq!(&*provider.load("/logo.png").unwrap(), &[2u8, 3][..]);
        assert_eq!(provider.len(), 1);
    }
}
