//! Named branding presets for report exports.
//!
//! Templates are kept as one JSON array under the `branding_templates` key of
//! a [`KeyValueStore`](rentdesk_traits::KeyValueStore). At most one template
//! per [`TemplateType`] is the default; every mutation restores that before
//! persisting.

mod error;
mod seeds;
mod store;
mod template;

pub use error::BrandingError;
pub use seeds::{builtin_templates, fallback_template};
pub use store::{BrandingStore, STORAGE_KEY};
pub use template::{BrandingTemplate, NewTemplate, TemplatePatch, TemplateType, UnknownTemplateType};
