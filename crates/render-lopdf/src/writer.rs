use crate::helpers::text_string;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::RgbaImage;
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use rentdesk_render_core::RenderError;
use rentdesk_types::DocumentMetadata;
use std::io::Write;

/// Base-14 fonts registered on every document, keyed by resource name.
pub const FONT_REGULAR: &str = "F1";
pub const FONT_BOLD: &str = "F2";

/// An image XObject registered with the document.
#[derive(Debug, Clone)]
pub struct ImageHandle {
    pub name: String,
    pub width_px: u32,
    pub height_px: u32,
}

impl ImageHandle {
    pub fn aspect_ratio(&self) -> f32 {
        self.height_px as f32 / self.width_px.max(1) as f32
    }
}

/// Assembles a complete PDF in memory.
///
/// All pages share one resources dictionary (fonts plus every image added),
/// which is written when the document is finished.
pub struct PdfDocumentWriter {
    doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    xobjects: Dictionary,
}

impl PdfDocumentWriter {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let resources_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            xobjects: Dictionary::new(),
        }
    }

    /// Embeds an RGBA raster as a Flate-compressed RGB image XObject.
    ///
    /// Transparency is composited onto white, matching the white canvas the
    /// captures were taken against.
    pub fn add_image(&mut self, image: &RgbaImage) -> Result<ImageHandle, RenderError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(RenderError::Image("image has zero size".into()));
        }

        let mut rgb = Vec::with_capacity((width * height * 3) as usize);
        for pixel in image.pixels() {
            let [r, g, b, a] = pixel.0;
            let alpha = a as u32;
            for channel in [r, g, b] {
                rgb.push(((channel as u32 * alpha + 255 * (255 - alpha)) / 255) as u8);
            }
        }

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&rgb)?;
        let compressed = encoder.finish()?;

        let dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width as i64,
            "Height" => height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        };
        let image_id = self.doc.add_object(Stream::new(dict, compressed));
        let name = format!("Im{}", self.xobjects.len() + 1);
        self.xobjects.set(name.as_bytes(), Object::Reference(image_id));

        Ok(ImageHandle {
            name,
            width_px: width,
            height_px: height,
        })
    }

    pub fn add_page(
        &mut self,
        content: Content,
        page_width_pt: f32,
        page_height_pt: f32,
    ) -> Result<ObjectId, RenderError> {
        let encoded = content.encode()?;
        let content_id = self.doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), page_width_pt.into(), page_height_pt.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.doc.add_object(page_dict);
        self.page_ids.push(page_id);
        Ok(page_id)
    }

    /// Writes the page tree, shared resources and info dictionary, then serializes.
    pub fn finish(
        mut self,
        metadata: Option<&DocumentMetadata>,
        creation_date: &str,
    ) -> Result<Vec<u8>, RenderError> {
        if self.page_ids.is_empty() {
            return Err(RenderError::Pdf("document has no pages".into()));
        }

        let font_dict = dictionary! {
            FONT_REGULAR => dictionary! {
                "Type" => "Font", "Subtype" => "Type1", "BaseFont" => "Helvetica", "Encoding" => "WinAnsiEncoding",
            },
            FONT_BOLD => dictionary! {
                "Type" => "Font", "Subtype" => "Type1", "BaseFont" => "Helvetica-Bold", "Encoding" => "WinAnsiEncoding",
            },
        };
        let mut resources = dictionary! { "Font" => font_dict };
        if !self.xobjects.is_empty() {
            resources.set("XObject", Object::Dictionary(std::mem::take(&mut self.xobjects)));
        }
        self.doc
            .objects
            .insert(self.resources_id, Object::Dictionary(resources));

        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::Reference(*id)).collect();
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i64,
        };
        self.doc.objects.insert(self.pages_id, Object::Dictionary(pages));

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        let mut info = dictionary! {
            "Producer" => text_string("RentDesk"),
            "CreationDate" => Object::string_literal(creation_date),
        };
        if let Some(meta) = metadata {
            let fields = [
                ("Title", &meta.title),
                ("Subject", &meta.subject),
                ("Author", &meta.author),
                ("Keywords", &meta.keywords),
            ];
            for (key, value) in fields {
                if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                    info.set(key, text_string(value));
                }
            }
        }
        let info_id = self.doc.add_object(info);
        self.doc.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        self.doc.save_to(&mut buffer)?;
        Ok(buffer)
    }
}

impl Default for PdfDocumentWriter {
    fn default() -> Self {
        Self::new()
    }
}
