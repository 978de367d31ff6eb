use lopdf::{Object, StringFormat};

/// Encodes text for the WinAnsi base fonts. Characters outside Latin-1 become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}

/// A PDF text string for the info dictionary.
///
/// ASCII goes out as a literal; anything else as UTF-16BE with a BOM so
/// viewers show the original characters.
pub fn text_string(s: &str) -> Object {
    if s.is_ascii() {
        return Object::string_literal(s);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in s.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Average Helvetica advance as a fraction of the font size.
const AVG_CHAR_WIDTH: f32 = 0.52;

/// Approximate rendered width of `text` in the unit of `font_size`.
pub fn approx_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * AVG_CHAR_WIDTH
}

/// Shortens `text` with a trailing `...` until it fits `max_width`.
pub fn truncate_to_width(text: &str, font_size: f32, max_width: f32) -> String {
    if approx_text_width(text, font_size) <= max_width {
        return text.to_string();
    }
    let ellipsis_width = approx_text_width("...", font_size);
    let char_width = font_size * AVG_CHAR_WIDTH;
    let fit = ((max_width - ellipsis_width) / char_width).floor();
    if fit < 1.0 {
        return "...".to_string();
    }
    let mut out: String = text.chars().take(fit as usize).collect();
    out.push_str("...");
    out
}

/// `D:YYYYMMDDHHmmSS` as used by the info dictionary.
pub fn pdf_date(at: &chrono::NaiveDateTime) -> String {
    at.format("D:%Y%m%d%H%M%S").to_string()
}
