use lopdf::{Dictionary, Document as LopdfDocument, Object};

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    for page_num in doc.get_pages().keys() {
        text.push_str(&page_text(doc, *page_num));
        text.push('\n');
    }
    text
}

pub fn page_text(doc: &LopdfDocument, page_num: u32) -> String {
    doc.extract_text(&[page_num]).unwrap_or_default()
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let page_id = *doc.get_pages().get(&page_num)?;
    let page = doc.get_dictionary(page_id).ok()?;
    let media_box = page.get(b"MediaBox").ok()?.as_array().ok()?;
    if media_box.len() < 4 {
        return None;
    }
    let coord = |o: &Object| o.as_float().ok();
    let width = coord(&media_box[2])? - coord(&media_box[0])?;
    let height = coord(&media_box[3])? - coord(&media_box[1])?;
    Some((width, height))
}

fn info_dictionary(doc: &LopdfDocument) -> Option<&Dictionary> {
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    doc.get_dictionary(info_id).ok()
}

/// A document information entry (`Title`, `Author`, ...) as raw bytes.
pub fn info_entry(doc: &LopdfDocument, key: &str) -> Option<Vec<u8>> {
    let info = info_dictionary(doc)?;
    info.get(key.as_bytes())
        .ok()?
        .as_str()
        .ok()
        .map(|bytes| bytes.to_vec())
}

/// Number of image XObjects in the document.
pub fn count_images(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|object| object.as_stream().ok())
        .filter(|stream| {
            stream
                .dict
                .get(b"Subtype")
                .and_then(|s| s.as_name())
                .is_ok_and(|name| name == b"Image")
        })
        .count()
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}
