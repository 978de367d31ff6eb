//! Splitting a tall captured image across pages.
//!
//! The same image is drawn on every page, shifted upward by one page of
//! content each time so the next band shows through.

/// Top offset (mm) of the image on the first page.
pub const FIRST_PAGE_TOP: f32 = 40.0;
/// Top offset (mm) of the visible band on continuation pages.
pub const CONTINUATION_TOP: f32 = 10.0;

/// Returns the y position (mm, top-left origin) of the image on each page.
///
/// The first entry is always [`FIRST_PAGE_TOP`]; later entries are zero or
/// negative.
pub fn image_slice_offsets(img_height: f32, page_height: f32) -> Vec<f32> {
    let mut offsets = vec![FIRST_PAGE_TOP];
    let step = page_height - CONTINUATION_TOP;
    if step <= 0.0 {
        return offsets;
    }

    let mut height_left = img_height - (page_height - FIRST_PAGE_TOP);
    while height_left > 0.0 {
        offsets.push(CONTINUATION_TOP - img_height + height_left);
        height_left -= step;
    }
    offsets
}
