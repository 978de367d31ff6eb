//! Branding band, footer template and generation timestamp.

use crate::canvas::{FontWeight, PageCanvas};
use crate::writer::{ImageHandle, PdfDocumentWriter};
use handlebars::Handlebars;
use rentdesk_render_core::{RenderContext, RenderError};
use rentdesk_traits::ResourceProvider;
use rentdesk_types::{BrandingOptions, Color, ExportOptions, ThemeColors};
use serde_json::json;

pub const BAND_HEIGHT: f32 = 20.0;
const LOGO_X: f32 = 10.0;
const LOGO_Y: f32 = 5.0;
const LOGO_BOX: f32 = 10.0;
const NAME_X_WITH_LOGO: f32 = 25.0;
const NAME_X: f32 = 10.0;
const NAME_BASELINE: f32 = 12.0;
const NAME_SIZE: f32 = 14.0;
const CONTACT_INSET: f32 = 60.0;
const CONTACT_BASELINE: f32 = 10.0;
const SMALL_SIZE: f32 = 8.0;
const FOOTER_INSET: f32 = 10.0;
const FOOTER_TEXT: Color = Color::gray(100);

const FOOTER_TEMPLATE_NAME: &str = "footer";

struct Band {
    theme: ThemeColors,
    company_name: String,
    contact_info: String,
    logo: Option<ImageHandle>,
}

/// Everything drawn on top of page content, resolved once per document.
pub struct PageDecorations {
    band: Option<Band>,
    footer: Option<Handlebars<'static>>,
    company: String,
    timestamp: Option<String>,
}

impl PageDecorations {
    /// Resolves theme colors, loads the logo and compiles the footer template.
    ///
    /// A logo that cannot be loaded or decoded is dropped with a warning; an
    /// unusable color scheme or footer template is an error.
    pub fn prepare(
        options: &ExportOptions,
        ctx: &RenderContext,
        writer: &mut PdfDocumentWriter,
        resources: &dyn ResourceProvider,
    ) -> Result<Self, RenderError> {
        let timestamp = options
            .include_timestamp
            .then(|| format!("Generated: {}", ctx.timestamp()));

        let Some(branding) = options.branding.as_ref() else {
            return Ok(Self {
                band: None,
                footer: None,
                company: String::new(),
                timestamp,
            });
        };

        let theme = branding.theme()?;
        let logo = load_logo(branding, writer, resources);
        let footer = branding
            .footer
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(compile_footer)
            .transpose()?;

        Ok(Self {
            band: Some(Band {
                theme,
                company_name: branding.company_name.clone(),
                contact_info: branding.contact_info.clone(),
                logo,
            }),
            footer,
            company: branding.company_name.clone(),
            timestamp,
        })
    }

    /// Theme used for the table header, when branding is present.
    pub fn theme(&self) -> Option<ThemeColors> {
        self.band.as_ref().map(|b| b.theme)
    }

    /// Draws the decorations for page `index` (0-based) of `total`.
    pub fn apply(
        &self,
        canvas: &mut PageCanvas,
        index: usize,
        total: usize,
    ) -> Result<(), RenderError> {
        let geometry = canvas.geometry();

        if index == 0
            && let Some(band) = &self.band
        {
            canvas.fill_rect(0.0, 0.0, geometry.width, BAND_HEIGHT, band.theme.primary);
            let name_x = match &band.logo {
                Some(logo) => {
                    let (w, h) = fit_box(logo, LOGO_BOX);
                    canvas.image(logo, LOGO_X, LOGO_Y, w, h);
                    NAME_X_WITH_LOGO
                }
                None => NAME_X,
            };
            canvas.text(
                &band.company_name,
                name_x,
                NAME_BASELINE,
                NAME_SIZE,
                FontWeight::Regular,
                band.theme.text,
            );
            canvas.text(
                &band.contact_info,
                geometry.width - CONTACT_INSET,
                CONTACT_BASELINE,
                SMALL_SIZE,
                FontWeight::Regular,
                band.theme.contact,
            );
        }

        if let Some(footer) = &self.footer {
            let text = footer
                .render(
                    FOOTER_TEMPLATE_NAME,
                    &json!({ "page": index + 1, "pages": total, "company": self.company }),
                )
                .map_err(|e| RenderError::Template(e.to_string()))?;
            canvas.text(
                &text,
                FOOTER_INSET,
                geometry.height - FOOTER_INSET,
                SMALL_SIZE,
                FontWeight::Regular,
                FOOTER_TEXT,
            );
        }

        if index + 1 == total
            && let Some(stamp) = &self.timestamp
        {
            canvas.text(
                stamp,
                geometry.width - CONTACT_INSET,
                geometry.height - FOOTER_INSET,
                SMALL_SIZE,
                FontWeight::Regular,
                FOOTER_TEXT,
            );
        }
        Ok(())
    }
}

fn compile_footer(template: &str) -> Result<Handlebars<'static>, RenderError> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(false);
    registry
        .register_template_string(FOOTER_TEMPLATE_NAME, template)
        .map_err(|e| RenderError::Template(e.to_string()))?;
    Ok(registry)
}

fn load_logo(
    branding: &BrandingOptions,
    writer: &mut PdfDocumentWriter,
    resources: &dyn ResourceProvider,
) -> Option<ImageHandle> {
    let path = branding.logo.as_deref().filter(|_| branding.has_logo())?;
    let decoded = resources
        .load(path)
        .map_err(|e| e.to_string())
        .and_then(|bytes| image::load_from_memory(&bytes).map_err(|e| e.to_string()))
        .map(|img| img.to_rgba8());

    match decoded.map_err(RenderError::Image).and_then(|img| writer.add_image(&img)) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::warn!("Logo '{}' unavailable, rendering text-only branding: {}", path, e);
            None
        }
    }
}

/// Largest size with the image's aspect ratio that fits a square box.
fn fit_box(handle: &ImageHandle, side: f32) -> (f32, f32) {
    let ratio = handle.aspect_ratio();
    if ratio >= 1.0 {
        (side / ratio, side)
    } else {
        (side, side * ratio)
    }
}
