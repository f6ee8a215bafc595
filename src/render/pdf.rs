use pdf_writer::{Content, Name, Pdf, Rect as PdfRect, Ref, Str};

use crate::{
    foundation::core::{Font, Point, Rect, Size},
    foundation::error::{CalError, CalResult},
    render::{metrics, surface::DrawSurface},
};

#[derive(Clone, Debug, Default, PartialEq)]
struct GfxState {
    font: Option<Font>,
    line_width: f64,
}

#[derive(Clone, Debug)]
struct FontEntry {
    base_name: String,
    resource: String,
    id: Ref,
}

/// [`DrawSurface`] that writes a PDF document in memory.
///
/// Text uses the standard Type1 fonts with WinAnsiEncoding, so no font files
/// are embedded. Every page has the same media box. Call
/// [`PdfSurface::finish`] after the last [`DrawSurface::show_page`] to get the
/// file bytes.
pub struct PdfSurface {
    pdf: Pdf,
    next_id: i32,
    catalog_id: Ref,
    pages_id: Ref,
    page_size: Size,
    page_ids: Vec<Ref>,
    fonts: Vec<FontEntry>,
    content: Content,
    page_has_ops: bool,
    state: GfxState,
    stack: Vec<GfxState>,
    unbalanced_restores: usize,
}

impl PdfSurface {
    /// Start an empty document whose pages measure `page_size` points.
    pub fn new(page_size: Size) -> Self {
        let mut surface = Self {
            pdf: Pdf::new(),
            next_id: 1,
            catalog_id: Ref::new(1),
            pages_id: Ref::new(1),
            page_size,
            page_ids: Vec::new(),
            fonts: Vec::new(),
            content: Content::new(),
            page_has_ops: false,
            state: GfxState::default(),
            stack: Vec::new(),
            unbalanced_restores: 0,
        };
        surface.catalog_id = surface.alloc();
        surface.pages_id = surface.alloc();
        surface
    }

    pub fn page_size(&self) -> Size {
        self.page_size
    }

    /// Number of finished pages.
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn alloc(&mut self) -> Ref {
        let r = Ref::new(self.next_id);
        self.next_id += 1;
        r
    }

    fn font_resource(&mut self, base_name: &str) -> String {
        if let Some(entry) = self.fonts.iter().find(|f| f.base_name == base_name) {
            return entry.resource.clone();
        }
        let id = self.alloc();
        let resource = format!("F{}", self.fonts.len() + 1);
        self.fonts.push(FontEntry {
            base_name: base_name.to_string(),
            resource: resource.clone(),
            id,
        });
        resource
    }

    /// Write the document trailer and return the PDF bytes.
    ///
    /// Fails if no page was finished or drawing happened after the last
    /// [`DrawSurface::show_page`].
    pub fn finish(mut self) -> CalResult<Vec<u8>> {
        if self.page_ids.is_empty() {
            return Err(CalError::render("PDF has no finished pages"));
        }
        if self.page_has_ops {
            return Err(CalError::render("PDF has drawing after the last finished page"));
        }

        for f in &self.fonts {
            self.pdf
                .type1_font(f.id)
                .base_font(Name(f.base_name.as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let count = i32::try_from(self.page_ids.len())
            .map_err(|_| CalError::render("too many pages"))?;
        self.pdf
            .pages(self.pages_id)
            .kids(self.page_ids.iter().copied())
            .count(count);

        Ok(self.pdf.finish())
    }
}

impl DrawSurface for PdfSurface {
    fn set_font(&mut self, font: &Font) -> CalResult<()> {
        if metrics::widths_for(&font.name).is_none() {
            return Err(CalError::render(format!(
                "font '{}' is not a supported standard PDF font",
                font.name
            )));
        }
        if !(font.size.is_finite() && font.size > 0.0) {
            return Err(CalError::render(format!(
                "font size must be positive (got {})",
                font.size
            )));
        }
        self.state.font = Some(font.clone());
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) {
        self.content.set_line_width(width as f32);
        self.state.line_width = width;
        self.page_has_ops = true;
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.content
            .rect(
                rect.x0 as f32,
                rect.y0 as f32,
                rect.width() as f32,
                rect.height() as f32,
            )
            .stroke();
        self.page_has_ops = true;
    }

    fn draw_text(&mut self, at: Point, text: &str) -> CalResult<()> {
        let font = self
            .state
            .font
            .clone()
            .ok_or_else(|| CalError::render("text drawn with no active font"))?;
        let bytes = metrics::encode_winansi(text)?;
        let resource = self.font_resource(&font.name);

        self.content
            .begin_text()
            .set_font(Name(resource.as_bytes()), font.size as f32)
            .next_line(at.x as f32, at.y as f32)
            .show(Str(&bytes))
            .end_text();
        self.page_has_ops = true;
        Ok(())
    }

    fn text_width(&self, text: &str, font: &Font) -> CalResult<f64> {
        metrics::text_width(text, font)
    }

    fn save_state(&mut self) {
        self.content.save_state();
        self.stack.push(self.state.clone());
        self.page_has_ops = true;
    }

    fn restore_state(&mut self) {
        match self.stack.pop() {
            Some(s) => {
                self.content.restore_state();
                self.state = s;
            }
            None => self.unbalanced_restores += 1,
        }
    }

    fn show_page(&mut self) -> CalResult<()> {
        if !self.stack.is_empty() || self.unbalanced_restores > 0 {
            return Err(CalError::render("page finished with unbalanced save/restore"));
        }

        let page_id = self.alloc();
        let content_id = self.alloc();
        let content = std::mem::replace(&mut self.content, Content::new());
        self.pdf.stream(content_id, &content.finish());

        {
            let mut page = self.pdf.page(page_id);
            page.media_box(PdfRect::new(
                0.0,
                0.0,
                self.page_size.width as f32,
                self.page_size.height as f32,
            ))
            .parent(self.pages_id)
            .contents(content_id);
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            for f in &self.fonts {
                fonts.pair(Name(f.resource.as_bytes()), f.id);
            }
        }

        self.page_ids.push(page_id);
        self.page_has_ops = false;
        self.state = GfxState::default();
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pdf.rs"]
mod tests;
