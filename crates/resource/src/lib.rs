//! Filesystem-backed implementations of the `rentdesk-traits` seams.
//!
//! ## Available Providers
//!
//! - [`FilesystemResourceProvider`]: logos and other assets from a directory
//! - [`DirectoryCaptureSource`]: pre-rendered region snapshots (`<element_id>.png`)
//! - [`FileKeyValueStore`]: one JSON document per key
//!
//! The in-memory variants are re-exported from `rentdesk-traits` for convenience.

mod capture;
mod filesystem;
mod store;

pub use capture::DirectoryCaptureSource;
pub use filesystem::FilesystemResourceProvider;
pub use store::FileKeyValueStore;

pub use rentdesk_traits::{InMemoryCaptureSource, InMemoryResourceProvider, InMemoryStore};
