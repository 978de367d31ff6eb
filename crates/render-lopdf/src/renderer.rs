use crate::canvas::PageCanvas;
use crate::decorations::PageDecorations;
use crate::helpers::pdf_date;
use crate::slicing::image_slice_offsets;
use crate::table::{TableLayout, draw_title};
use crate::writer::PdfDocumentWriter;
use image::RgbaImage;
use rentdesk_render_core::utils::ensure_rows;
use rentdesk_render_core::{RenderContext, RenderError, TabularRenderer};
use rentdesk_traits::{InMemoryResourceProvider, ResourceProvider};
use rentdesk_types::{ExportFormat, ExportOptions, TabularRow};
use std::sync::Arc;

/// Horizontal margin (mm) around a captured image.
const CAPTURE_MARGIN: f32 = 10.0;

/// PDF renderer built on `lopdf`, for both tabular data and captured elements.
pub struct PdfRenderer {
    resources: Arc<dyn ResourceProvider>,
}

impl PdfRenderer {
    /// `resources` resolves branding logo paths.
    pub fn new(resources: Arc<dyn ResourceProvider>) -> Self {
        Self { resources }
    }

    /// Renders a captured raster, split across as many pages as its height needs.
    pub fn render_capture(
        &self,
        image: &RgbaImage,
        options: &ExportOptions,
        ctx: &RenderContext,
    ) -> Result<Vec<u8>, RenderError> {
        let geometry = options.page_geometry();
        let mut writer = PdfDocumentWriter::new();
        let decorations =
            PageDecorations::prepare(options, ctx, &mut writer, self.resources.as_ref())?;

        let handle = writer.add_image(image)?;
        let img_width = geometry.width - 2.0 * CAPTURE_MARGIN;
        let img_height = img_width * handle.aspect_ratio();
        let offsets = image_slice_offsets(img_height, geometry.height);
        log::debug!(
            "Capture {}x{} px placed at {:.1}x{:.1} mm over {} page(s)",
            handle.width_px,
            handle.height_px,
            img_width,
            img_height,
            offsets.len()
        );

        let total = offsets.len();
        for (index, y) in offsets.into_iter().enumerate() {
            let mut canvas = PageCanvas::new(geometry);
            canvas.image(&handle, CAPTURE_MARGIN, y, img_width, img_height);
            decorations.apply(&mut canvas, index, total)?;
            writer.add_page(canvas.finish(), geometry.width_pt(), geometry.height_pt())?;
        }

        writer.finish(options.metadata.as_ref(), &pdf_date(&ctx.generated_at))
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryResourceProvider::new()))
    }
}

impl TabularRenderer for PdfRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn render_rows(
        &self,
        rows: &[TabularRow],
        options: &ExportOptions,
        ctx: &RenderContext,
    ) -> Result<Vec<u8>, RenderError> {
        ensure_rows(rows)?;
        let geometry = options.page_geometry();
        let mut writer = PdfDocumentWriter::new();
        let decorations =
            PageDecorations::prepare(options, ctx, &mut writer, self.resources.as_ref())?;
        let theme = decorations.theme();
        let title = options
            .metadata
            .as_ref()
            .and_then(|m| m.title.as_deref())
            .filter(|t| !t.is_empty());

        let layout = TableLayout::new(rows, geometry);
        let total = layout.page_count(rows.len());
        log::debug!(
            "Table of {} rows x {} columns over {} page(s)",
            rows.len(),
            layout.headers().len(),
            total
        );

        for (index, chunk) in rows.chunks(layout.rows_per_page()).enumerate() {
            let mut canvas = PageCanvas::new(geometry);
            if index == 0
                && let Some(title) = title
            {
                draw_title(&mut canvas, title);
            }
            layout.draw_page(
                &mut canvas,
                chunk,
                index * layout.rows_per_page(),
                theme.as_ref(),
                &ctx.date_format,
            );
            decorations.apply(&mut canvas, index, total)?;
            writer.add_page(canvas.finish(), geometry.width_pt(), geometry.height_pt())?;
        }

        writer.finish(options.metadata.as_ref(), &pdf_date(&ctx.generated_at))
    }
}
