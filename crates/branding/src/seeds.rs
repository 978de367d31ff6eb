use crate::template::{BrandingTemplate, TemplateType};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use rentdesk_types::{BrandingOptions, ColorScheme};

const LOGO: &str = "/logo-b.svg";
const COMPANY: &str = "ProkatPro";
const PHONE: &str = "tel: +7 (123) 456-78-90";

fn seed(
    id: &str,
    name: &str,
    description: &str,
    template_type: TemplateType,
    is_default: bool,
    branding: BrandingOptions,
    now: DateTime<Utc>,
) -> BrandingTemplate {
    BrandingTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        created_at: now,
        updated_at: now,
        is_default,
        template_type,
        branding,
    }
}

/// Templates written to an empty store: a general default plus financial and
/// forecast presets.
pub fn builtin_templates(now: DateTime<Utc>) -> Vec<BrandingTemplate> {
    vec![
        seed(
            "default-general",
            "Standard",
            "Standard template for every report type",
            TemplateType::General,
            true,
            BrandingOptions {
                logo: Some(LOGO.into()),
                company_name: COMPANY.into(),
                contact_info: format!("{}, email: info@prokatpro.ru", PHONE),
                color_scheme: ColorScheme::Default,
                ..Default::default()
            },
            now,
        ),
        seed(
            "financial-template",
            "Financial",
            "Template for financial reports",
            TemplateType::Financial,
            false,
            BrandingOptions {
                logo: Some(LOGO.into()),
                company_name: format!("{} - Finance", COMPANY),
                contact_info: format!("{}, email: finance@prokatpro.ru", PHONE),
                color_scheme: ColorScheme::Default,
                footer: Some("Confidential financial information".into()),
                ..Default::default()
            },
            now,
        ),
        seed(
            "forecast-template",
            "Forecasting",
            "Template for forecast reports",
            TemplateType::Forecast,
            false,
            BrandingOptions {
                logo: Some(LOGO.into()),
                company_name: format!("{} - Analytics", COMPANY),
                contact_info: format!("{}, email: analytics@prokatpro.ru", PHONE),
                color_scheme: ColorScheme::Light,
                footer: Some("Forecast figures are advisory".into()),
                ..Default::default()
            },
            now,
        ),
    ]
}

static FALLBACK: Lazy<BrandingTemplate> = Lazy::new(|| {
    seed(
        "default-fallback",
        "Standard",
        "Built-in template used when no template is stored",
        TemplateType::General,
        true,
        BrandingOptions {
            logo: Some(LOGO.into()),
            company_name: COMPANY.into(),
            contact_info: PHONE.into(),
            color_scheme: ColorScheme::Default,
            ..Default::default()
        },
        DateTime::<Utc>::UNIX_EPOCH,
    )
});

/// The template returned when a store holds no templates at all.
pub fn fallback_template() -> &'static BrandingTemplate {
    &FALLBACK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_have_one_general_default() {
        let seeds = builtin_templates(Utc::now());
        assert_eq!(seeds.len(), 3);
        let defaults: Vec<_> = seeds.iter().filter(|t| t.is_default).collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].template_type, TemplateType::General);
    }

    #[test]
    fn test_fallback_is_a_general_default() {
        let fallback = fallback_template();
        assert_eq!(fallback.id, "default-fallback");
        assert!(fallback.is_default);
        assert_eq!(fallback.template_type, TemplateType::General);
    }
}
