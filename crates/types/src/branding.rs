use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThemeError {
    #[error("Unknown color scheme: '{0}' (expected default, dark, light or custom)")]
    UnknownScheme(String),

    #[error("Color scheme 'custom' requires custom colors")]
    MissingCustomColors,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Default,
    Dark,
    Light,
    Custom,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 4] = [
        ColorScheme::Default,
        ColorScheme::Dark,
        ColorScheme::Light,
        ColorScheme::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Default => "default",
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
            ColorScheme::Custom => "custom",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(ColorScheme::Default),
            "dark" => Ok(ColorScheme::Dark),
            "light" => Ok(ColorScheme::Light),
            "custom" => Ok(ColorScheme::Custom),
            _ => Err(ThemeError::UnknownScheme(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomColors {
    pub primary_color: Color,
    pub secondary_color: Color,
    pub text_color: Color,
    pub accent_color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fonts {
    pub title_font: String,
    pub body_font: String,
}

/// Branding applied to the header band and footer of generated documents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandingOptions {
    /// Resource path or URL of the logo image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub company_name: String,
    pub contact_info: String,
    pub color_scheme: ColorScheme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_colors: Option<CustomColors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<Fonts>,
    /// Footer template; `{{page}}`, `{{pages}}` and `{{company}}` are available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<String>,
}

impl BrandingOptions {
    pub fn theme(&self) -> Result<ThemeColors, ThemeError> {
        ThemeColors::resolve(self.color_scheme, self.custom_colors.as_ref())
    }

    pub fn has_logo(&self) -> bool {
        self.logo.as_deref().is_some_and(|l| !l.trim().is_empty())
    }
}

/// The fixed color pair (plus derived tones) a scheme maps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    /// Fill of the header band.
    pub primary: Color,
    /// Company name color.
    pub text: Color,
    /// Contact line color.
    pub contact: Color,
    /// Fill of the table header row.
    pub table_header: Color,
}

const BRAND_ORANGE: Color = Color::rgb(0xff, 0x66, 0x00);
const CHARCOAL: Color = Color::gray(0x33);

impl ThemeColors {
    pub fn resolve(
        scheme: ColorScheme,
        custom: Option<&CustomColors>,
    ) -> Result<ThemeColors, ThemeError> {
        let theme = match scheme {
            ColorScheme::Default => ThemeColors {
                primary: BRAND_ORANGE,
                text: CHARCOAL,
                contact: CHARCOAL,
                table_header: BRAND_ORANGE,
            },
            ColorScheme::Dark => ThemeColors {
                primary: CHARCOAL,
                text: Color::WHITE,
                contact: Color::gray(200),
                table_header: BRAND_ORANGE,
            },
            ColorScheme::Light => ThemeColors {
                primary: Color::gray(0xf0),
                text: CHARCOAL,
                contact: CHARCOAL,
                table_header: BRAND_ORANGE,
            },
            ColorScheme::Custom => {
                let custom = custom.ok_or(ThemeError::MissingCustomColors)?;
                ThemeColors {
                    primary: custom.primary_color,
                    text: custom.text_color,
                    contact: custom.text_color,
                    table_header: custom.accent_color,
                }
            }
        };
        Ok(theme)
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        ThemeColors {
            primary: BRAND_ORANGE,
            text: CHARCOAL,
            contact: CHARCOAL,
            table_header: BRAND_ORANGE,
        }
    }
}
