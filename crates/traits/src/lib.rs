pub mod capture;
pub mod resource;
pub mod store;

pub use capture::{CaptureError, CaptureSource, InMemoryCaptureSource};
pub use resource::{AssetBytes, InMemoryResourceProvider, ResourceError, ResourceProvider};
pub use store::{InMemoryStore, KeyValueStore, StoreError};
