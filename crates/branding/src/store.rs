use crate::error::BrandingError;
use crate::seeds::{builtin_templates, fallback_template};
use crate::template::{BrandingTemplate, NewTemplate, TemplatePatch, TemplateType};
use chrono::Utc;
use rentdesk_traits::KeyValueStore;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

pub const STORAGE_KEY: &str = "branding_templates";

/// Branding templates backed by a key-value store.
///
/// Mutations build the new list, persist it and only then replace the
/// in-memory copy, so a failed write leaves the store as it was.
#[derive(Debug)]
pub struct BrandingStore {
    storage: Arc<dyn KeyValueStore>,
    templates: Vec<BrandingTemplate>,
}

impl BrandingStore {
    /// Reads the stored templates. Missing, unreadable or malformed data counts
    /// as empty, and an empty store is seeded with the built-in templates.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let mut templates = read_templates(storage.as_ref());
        if templates.is_empty() {
            templates = builtin_templates(Utc::now());
            log::info!("Seeding {} built-in branding templates", templates.len());
            if let Err(e) = write_templates(storage.as_ref(), &templates) {
                log::error!("{}", e);
            }
        }
        Self { storage, templates }
    }

    pub fn all_templates(&self) -> &[BrandingTemplate] {
        &self.templates
    }

    /// Templates of `template_type` plus the general ones; `None` returns all.
    pub fn templates_by_type(&self, template_type: Option<TemplateType>) -> Vec<&BrandingTemplate> {
        match template_type {
            None => self.templates.iter().collect(),
            Some(wanted) => self
                .templates
                .iter()
                .filter(|t| t.template_type == wanted || t.template_type == TemplateType::General)
                .collect(),
        }
    }

    pub fn template_by_id(&self, id: &str) -> Option<&BrandingTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Resolves the template to brand a report of `template_type` with: its
    /// type's default, else the general default, else the first template,
    /// else a built-in fallback.
    pub fn default_template(&self, template_type: TemplateType) -> &BrandingTemplate {
        let default_of = |kind: TemplateType| {
            self.templates
                .iter()
                .find(|t| t.is_default && t.template_type == kind)
        };
        default_of(template_type)
            .or_else(|| default_of(TemplateType::General))
            .or_else(|| self.templates.first())
            .unwrap_or_else(|| fallback_template())
    }

    pub fn add_template(&mut self, new: NewTemplate) -> Result<BrandingTemplate, BrandingError> {
        let now = Utc::now();
        let template = BrandingTemplate {
            id: format!("template-{}", Uuid::new_v4()),
            name: new.name,
            description: new.description,
            created_at: now,
            updated_at: now,
            is_default: new.is_default,
            template_type: new.template_type,
            branding: new.branding,
        };

        let mut next = self.templates.clone();
        if template.is_default {
            demote_defaults(&mut next, template.template_type, &template.id);
        }
        next.push(template.clone());
        self.commit(next)?;
        log::info!("Created branding template '{}'", template.name);
        Ok(template)
    }

    pub fn update_template(
        &mut self,
        id: &str,
        patch: TemplatePatch,
    ) -> Result<BrandingTemplate, BrandingError> {
        let mut next = self.templates.clone();
        let index = next
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| BrandingError::NotFound(id.to_string()))?;

        patch.apply_to(&mut next[index]);
        next[index].updated_at = Utc::now();
        let updated = next[index].clone();
        if updated.is_default {
            demote_defaults(&mut next, updated.template_type, id);
        }
        self.commit(next)?;
        log::info!("Updated branding template '{}'", updated.name);
        Ok(updated)
    }

    /// Removes a template. The default of a type cannot be removed while it is
    /// the only template of that type.
    pub fn delete_template(&mut self, id: &str) -> Result<(), BrandingError> {
        let template = self
            .template_by_id(id)
            .ok_or_else(|| BrandingError::NotFound(id.to_string()))?;

        if template.is_default {
            let same_type = self
                .templates
                .iter()
                .filter(|t| t.template_type == template.template_type)
                .count();
            if same_type <= 1 {
                log::warn!("Refusing to delete sole default template '{}'", id);
                return Err(BrandingError::SoleDefault {
                    id: id.to_string(),
                    template_type: template.template_type,
                });
            }
        }

        let name = template.name.clone();
        let next = self
            .templates
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();
        self.commit(next)?;
        log::info!("Deleted branding template '{}'", name);
        Ok(())
    }

    /// Makes `id` the default of its type and demotes every other template of that type.
    pub fn set_default_template(&mut self, id: &str) -> Result<BrandingTemplate, BrandingError> {
        let template_type = self
            .template_by_id(id)
            .map(|t| t.template_type)
            .ok_or_else(|| BrandingError::NotFound(id.to_string()))?;

        let mut next = self.templates.clone();
        for t in next.iter_mut().filter(|t| t.template_type == template_type) {
            t.is_default = t.id == id;
        }
        self.commit(next)?;

        let template = self
            .template_by_id(id)
            .cloned()
            .ok_or_else(|| BrandingError::NotFound(id.to_string()))?;
        log::info!("Template '{}' is now the {} default", template.name, template_type);
        Ok(template)
    }

    /// Copies a template under a new id. The copy is never the default.
    pub fn duplicate_template(&mut self, id: &str) -> Result<BrandingTemplate, BrandingError> {
        let source = self
            .template_by_id(id)
            .ok_or_else(|| BrandingError::NotFound(id.to_string()))?;

        let now = Utc::now();
        let copy = BrandingTemplate {
            id: format!("template-{}", Uuid::new_v4()),
            name: format!("{} (copy)", source.name),
            is_default: false,
            created_at: now,
            updated_at: now,
            ..source.clone()
        };

        let mut next = self.templates.clone();
        next.push(copy.clone());
        self.commit(next)?;
        log::info!("Duplicated branding template '{}' as '{}'", id, copy.id);
        Ok(copy)
    }

    fn commit(&mut self, next: Vec<BrandingTemplate>) -> Result<(), BrandingError> {
        if let Err(e) = write_templates(self.storage.as_ref(), &next) {
            log::error!("{}", e);
            return Err(e);
        }
        self.templates = next;
        Ok(())
    }
}

fn demote_defaults(templates: &mut [BrandingTemplate], template_type: TemplateType, keep_id: &str) {
    for t in templates
        .iter_mut()
        .filter(|t| t.template_type == template_type && t.id != keep_id)
    {
        t.is_default = false;
    }
}

fn read_templates(storage: &dyn KeyValueStore) -> Vec<BrandingTemplate> {
    let raw = match storage.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("Could not read branding templates: {}", e);
            return Vec::new();
        }
    };
    let mut templates: Vec<BrandingTemplate> = serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::warn!("Discarding malformed branding templates: {}", e);
        Vec::new()
    });
    keep_last_defaults(&mut templates);
    templates
}

/// Leaves at most one default per type, the last one stored.
fn keep_last_defaults(templates: &mut [BrandingTemplate]) {
    let mut seen = HashSet::new();
    for t in templates.iter_mut().rev().filter(|t| t.is_default) {
        if !seen.insert(t.template_type) {
            log::warn!("Template '{}' is not the latest {} default; demoting it", t.id, t.template_type);
            t.is_default = false;
        }
    }
}

fn write_templates(
    storage: &dyn KeyValueStore,
    templates: &[BrandingTemplate],
) -> Result<(), BrandingError> {
    let json = serde_json::to_string(templates)?;
    storage.set(STORAGE_KEY, &json)?;
    Ok(())
}
