//! Drawing on one page in millimetres with a top-left origin.
//!
//! Every public coordinate here is in mm measured from the top edge; the
//! conversion to PDF user space (points, bottom-left origin) happens when
//! operators are emitted.

use crate::helpers::to_win_ansi;
use crate::writer::{FONT_BOLD, FONT_REGULAR, ImageHandle};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use rentdesk_render_core::utils::flip_y;
use rentdesk_types::{Color, PageGeometry, mm_to_pt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

impl FontWeight {
    fn resource_name(self) -> &'static str {
        match self {
            FontWeight::Regular => FONT_REGULAR,
            FontWeight::Bold => FONT_BOLD,
        }
    }
}

#[derive(Default, Clone, PartialEq)]
struct CanvasState {
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

pub struct PageCanvas {
    geometry: PageGeometry,
    content: Content,
    state: CanvasState,
}

impl PageCanvas {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            content: Content { operations: vec![] },
            state: CanvasState::default(),
        }
    }

    pub fn geometry(&self) -> PageGeometry {
        self.geometry
    }

    pub fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, op: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(op, operands));
    }

    fn y_pt(&self, y_mm: f32) -> f32 {
        mm_to_pt(flip_y(y_mm, self.geometry.height))
    }

    pub fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        if self.state.stroke_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(color);
        }
    }

    pub fn set_line_width(&mut self, width_mm: f32) {
        if self.state.line_width != Some(width_mm) {
            self.push("w", vec![mm_to_pt(width_mm).into()]);
            self.state.line_width = Some(width_mm);
        }
    }

    fn rect_operands(&self, x: f32, y: f32, width: f32, height: f32) -> Vec<Object> {
        vec![
            mm_to_pt(x).into(),
            self.y_pt(y + height).into(),
            mm_to_pt(width).into(),
            mm_to_pt(height).into(),
        ]
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.set_fill_color(color);
        let operands = self.rect_operands(x, y, width, height);
        self.push("re", operands);
        self.push("f", vec![]);
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.set_stroke_color(color);
        self.set_line_width(0.1);
        let operands = self.rect_operands(x, y, width, height);
        self.push("re", operands);
        self.push("S", vec![]);
    }

    /// Draws one line of text with its baseline at `baseline_y`. Font size is in points.
    pub fn text(
        &mut self,
        text: &str,
        x: f32,
        baseline_y: f32,
        font_size: f32,
        weight: FontWeight,
        color: Color,
    ) {
        if text.is_empty() {
            return;
        }
        self.push("BT", vec![]);
        self.set_fill_color(color);
        self.push(
            "Tf",
            vec![
                Object::Name(weight.resource_name().as_bytes().to_vec()),
                font_size.into(),
            ],
        );
        let y = self.y_pt(baseline_y);
        self.push("Td", vec![mm_to_pt(x).into(), y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    /// Places an image with its top-left corner at (`x`, `y`). The box may extend
    /// past the page edges; the viewer clips it.
    pub fn image(&mut self, handle: &ImageHandle, x: f32, y: f32, width: f32, height: f32) {
        let bottom = self.y_pt(y + height);
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                mm_to_pt(width).into(),
                0.0f32.into(),
                0.0f32.into(),
                mm_to_pt(height).into(),
                mm_to_pt(x).into(),
                bottom.into(),
            ],
        );
        self.push("Do", vec![Object::Name(handle.name.as_bytes().to_vec())]);
        self.push("Q", vec![]);
    }

    #[cfg(test)]
    pub(crate) fn operators(&self) -> Vec<&str> {
        self.content
            .operations
            .iter()
            .map(|op| op.operator.as_str())
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn fill_colors(&self) -> Vec<[f32; 3]> {
        self.content
            .operations
            .iter()
            .filter(|op| op.operator == "rg")
            .map(|op| {
                let channel = |i: usize| op.operands[i].as_float().unwrap_or(-1.0);
                [channel(0), channel(1), channel(2)]
            })
            .collect()
    }
}
