use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color as used by the document renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }

    /// Components scaled to `0.0..=1.0`, the form PDF color operators expect.
    pub fn to_unit_rgb(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses `#rgb` or `#rrggbb`, as produced by the template editor's color picker.
    pub fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| format!("Not a hex color: '{}'", s))?;

        let channel = |pair: &str| u8::from_str_radix(pair, 16).map_err(|e| e.to_string());
        match digits.len() {
            3 => {
                let wide: String = digits.chars().flat_map(|c| [c, c]).collect();
                Self::parse_hex(&format!("#{}", wide))
            }
            6 => Ok(Color::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            n => Err(format!("Hex color '{}' has {} digits, expected 3 or 6", s, n)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

// Stored templates keep colors as the hex strings the editor produced.
impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_and_long_hex() {
        assert_eq!(Color::parse_hex("#f60").unwrap(), Color::rgb(255, 102, 0));
        assert_eq!(Color::parse_hex("#ff6600").unwrap(), Color::rgb(255, 102, 0));
        assert_eq!(Color::parse_hex(" #333333 ").unwrap(), Color::gray(0x33));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Color::parse_hex("ff6600").is_err());
        assert!(Color::parse_hex("#ff66").is_err());
        assert!(Color::parse_hex("#gg0000").is_err());
    }

    #[test]
    fn test_hex_serde_round_trip() {
        let json = serde_json::to_string(&Color::rgb(240, 240, 240)).unwrap();
        assert_eq!(json, "\"#f0f0f0\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::gray(240));
        let from_map: Color = serde_json::from_str(r#"{"r":1,"g":2,"b":3}"#).unwrap();
        assert_eq!(from_map, Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_unit_rgb() {
        assert_eq!(Color::WHITE.to_unit_rgb(), [1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.to_unit_rgb(), [0.0, 0.0, 0.0]);
    }
}
