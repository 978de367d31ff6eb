use crate::template::TemplateType;
use rentdesk_traits::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrandingError {
    #[error("Branding template '{0}' not found")]
    NotFound(String),

    #[error("Template '{id}' is the only default {template_type} template and cannot be deleted")]
    SoleDefault {
        id: String,
        template_type: TemplateType,
    },

    #[error("Failed to persist branding templates: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to serialize branding templates: {0}")]
    Serialize(#[from] serde_json::Error),
}
