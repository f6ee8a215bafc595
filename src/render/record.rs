use crate::{
    foundation::core::{Font, Point, Rect},
    foundation::error::{CalError, CalResult},
    render::{metrics, surface::DrawSurface},
};

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum DrawCall {
    SetFont(Font),
    SetLineWidth(f64),
    StrokeRect(Rect),
    /// Text drawn with the font that was active at the time.
    Text { at: Point, text: String, font: Font },
    Save,
    Restore,
    ShowPage,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct RecState {
    font: Option<Font>,
    line_width: f64,
}

/// A [`DrawSurface`] that records every call instead of producing pixels.
///
/// Text is measured with the built-in base-14 metrics so layout code sees the
/// same widths it would see on a PDF page.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    state: RecState,
    stack: Vec<RecState>,
    unbalanced_restores: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls so far, in order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Number of saves not yet restored.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn active_font(&self) -> Option<&Font> {
        self.state.font.as_ref()
    }

    pub fn line_width(&self) -> f64 {
        self.state.line_width
    }

    /// Outline rectangles stroked so far.
    pub fn stroked_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::StrokeRect(r) => Some(*r),
            _ => None,
        })
    }

    /// Text runs drawn so far as `(position, text)`.
    pub fn texts(&self) -> impl Iterator<Item = (Point, &str)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { at, text, .. } => Some((*at, text.as_str())),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn set_font(&mut self, font: &Font) -> CalResult<()> {
        metrics::widths_for(&font.name)
            .ok_or_else(|| CalError::render(format!("no metrics for font '{}'", font.name)))?;
        self.state.font = Some(font.clone());
        self.calls.push(DrawCall::SetFont(font.clone()));
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
        self.calls.push(DrawCall::SetLineWidth(width));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.calls.push(DrawCall::StrokeRect(rect));
    }

    fn draw_text(&mut self, at: Point, text: &str) -> CalResult<()> {
        let font = self
            .state
            .font
            .clone()
            .ok_or_else(|| CalError::render("draw_text called with no active font"))?;
        self.calls.push(DrawCall::Text {
            at,
            text: text.to_string(),
            font,
        });
        Ok(())
    }

    fn text_width(&self, text: &str, font: &Font) -> CalResult<f64> {
        metrics::text_width(text, font)
    }

    fn save_state(&mut self) {
        self.stack.push(self.state.clone());
        self.calls.push(DrawCall::Save);
    }

    fn restore_state(&mut self) {
        match self.stack.pop() {
            Some(s) => self.state = s,
            None => self.unbalanced_restores += 1,
        }
        self.calls.push(DrawCall::Restore);
    }

    fn show_page(&mut self) -> CalResult<()> {
        if !self.stack.is_empty() || self.unbalanced_restores > 0 {
            return Err(CalError::render("page finished with unbalanced save/restore"));
        }
        self.calls.push(DrawCall::ShowPage);
        Ok(())
    }
}
