use std::borrow::Cow;

fn needs_quotes(field: &str) -> bool {
    field.contains([',', '"', '\r', '\n'])
}

/// Quotes `field` when it contains a delimiter, quote or line break, doubling
/// any inner quotes.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if !needs_quotes(field) {
        return Cow::Borrowed(field);
    }
    let mut out = String::with_capacity(field.len() + 2);
    out.push('"');
    for c in field.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
    Cow::Owned(out)
}

/// Splits one record (without its terminator) back into unescaped fields.
///
/// Quoted fields may contain commas, doubled quotes and line breaks. Returns
/// `None` when a quoted field is left open.
pub fn split_record(line: &str) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => current.push(c),
            }
        } else {
            match c {
                ',' => fields.push(std::mem::take(&mut current)),
                '"' if current.is_empty() => in_quotes = true,
                _ => current.push(c),
            }
        }
    }

    if in_quotes {
        return None;
    }
    fields.push(current);
    Some(fields)
}
