use chrono::{DateTime, Utc};
use rentdesk_types::BrandingOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The report family a template is meant for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    Financial,
    Equipment,
    Efficiency,
    Forecast,
    #[default]
    General,
}

impl TemplateType {
    pub const ALL: [TemplateType; 5] = [
        TemplateType::Financial,
        TemplateType::Equipment,
        TemplateType::Efficiency,
        TemplateType::Forecast,
        TemplateType::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Financial => "financial",
            TemplateType::Equipment => "equipment",
            TemplateType::Efficiency => "efficiency",
            TemplateType::Forecast => "forecast",
            TemplateType::General => "general",
        }
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown template type: '{0}'")]
pub struct UnknownTemplateType(pub String);

impl FromStr for TemplateType {
    type Err = UnknownTemplateType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        TemplateType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| UnknownTemplateType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    #[serde(default)]
    pub branding: BrandingOptions,
}

/// Input for [`BrandingStore::add_template`](crate::BrandingStore::add_template).
/// The store assigns the id and timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewTemplate {
    pub name: String,
    pub description: String,
    pub is_default: bool,
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    pub branding: BrandingOptions,
}

impl NewTemplate {
    pub fn new(name: impl Into<String>, template_type: TemplateType) -> Self {
        Self {
            name: name.into(),
            template_type,
            ..Default::default()
        }
    }

    pub fn with_branding(mut self, branding: BrandingOptions) -> Self {
        self.branding = branding;
        self
    }

    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// Partial update; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplatePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_default: Option<bool>,
    #[serde(rename = "type")]
    pub template_type: Option<TemplateType>,
    pub branding: Option<BrandingOptions>,
}

impl TemplatePatch {
    pub(crate) fn apply_to(self, template: &mut BrandingTemplate) {
        if let Some(name) = self.name {
            template.name = name;
        }
        if let Some(description) = self.description {
            template.description = description;
        }
        if let Some(is_default) = self.is_default {
            template.is_default = is_default;
        }
        if let Some(template_type) = self.template_type {
            template.template_type = template_type;
        }
        if let Some(branding) = self.branding {
            template.branding = branding;
        }
    }
}
