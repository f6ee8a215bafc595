use super::*;
use crate::foundation::core::Rect;
use crate::render::record::{DrawCall, RecordingSurface};

fn surface_with(font: &Font) -> RecordingSurface {
    let mut s = RecordingSurface::new();
    s.set_font(font).unwrap();
    s
}

fn approx_pt(p: Point, x: f64, y: f64) -> bool {
    (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9
}

#[test]
fn padding_cells_draw_nothing() {
    let font = Font::new("Helvetica", 10.0);
    let mut s = surface_with(&font);
    let before = s.calls().len();
    StandardCells::default()
        .render_cell(&mut s, 0, Geom::new(0.0, 100.0, 50.0, 40.0), &font, true)
        .unwrap();
    assert_eq!(s.calls().len(), before);
}

#[test]
fn day_cell_draws_border_then_number() {
    let font = Font::new("Helvetica", 10.0);
    let mut s = surface_with(&font);
    let cell = Geom::new(20.0, 100.0, 50.0, 40.0);
    StandardCells::default()
        .render_cell(&mut s, 7, cell, &font, false)
        .unwrap();

    let rects: Vec<_> = s.stroked_rects().collect();
    assert_eq!(rects, vec![Rect::new(20.0, 60.0, 70.0, 100.0)]);

    let texts: Vec<_> = s.texts().collect();
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0].1, "7");
    assert!(approx_pt(texts[0].0, 25.0, 87.0));
}

#[test]
fn ordinal_suffix_follows_number_and_is_lifted() {
    let font = Font::new("Helvetica", 10.0);
    let mut s = surface_with(&font);
    let cell = Geom::new(0.0, 100.0, 50.0, 40.0);
    StandardCells::default()
        .render_cell(&mut s, 22, cell, &font, true)
        .unwrap();

    let texts: Vec<_> = s.texts().collect();
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[1].1, "nd");
    // "22" is two Helvetica digits of 556 units each.
    let number_width = 2.0 * 5.56;
    assert!(approx_pt(texts[1].0, 5.0 + number_width, 87.0 + 1.3));
}

#[test]
fn fallback_suffix_is_used_for_unlisted_days() {
    let font = Font::new("Helvetica", 10.0);
    let mut s = surface_with(&font);
    StandardCells::default()
        .render_cell(&mut s, 11, Geom::new(0.0, 50.0, 10.0, 10.0), &font, true)
        .unwrap();
    let texts: Vec<_> = s.texts().map(|(_, t)| t.to_string()).collect();
    assert_eq!(texts, vec!["11".to_string(), "th".to_string()]);
}

#[test]
fn custom_table_drives_suffixes() {
    let font = Font::new("Helvetica", 10.0);
    let mut s = surface_with(&font);
    let table = OrdinalTable::from_reader(r#"{"exact": {"1": "er"}, "fallback": "e"}"#.as_bytes())
        .unwrap();
    let cells = StandardCells::new(table);
    cells
        .render_cell(&mut s, 1, Geom::new(0.0, 50.0, 10.0, 10.0), &font, true)
        .unwrap();
    assert_eq!(s.texts().nth(1).map(|(_, t)| t), Some("er"));
}

#[test]
fn label_has_no_border() {
    let font = Font::new("Helvetica", 10.0);
    let mut s = surface_with(&font);
    let month = CalendarMonth::new(2024, 1).unwrap();
    StandardCells::default()
        .render_label(&mut s, month, Geom::new(10.0, 200.0, 50.0, 40.0), &font)
        .unwrap();
    assert_eq!(s.stroked_rects().count(), 0);
    let texts: Vec<_> = s.texts().collect();
    assert_eq!(texts[0].1, "Jan 2024");
    assert!(approx_pt(texts[0].0, 15.0, 187.0));
    assert!(matches!(s.calls().last(), Some(DrawCall::Text { .. })));
}

#[test]
fn unmeasurable_font_fails_the_cell() {
    struct NoMetrics(RecordingSurface);

    impl DrawSurface for NoMetrics {
        fn set_font(&mut self, font: &Font) -> CalResult<()> {
            self.0.set_font(font)
        }
        fn set_line_width(&mut self, width: f64) {
            self.0.set_line_width(width)
        }
        fn stroke_rect(&mut self, rect: Rect) {
            self.0.stroke_rect(rect)
        }
        fn draw_text(&mut self, at: Point, text: &str) -> CalResult<()> {
            self.0.draw_text(at, text)
        }
        fn text_width(&self, _text: &str, _font: &Font) -> CalResult<f64> {
            Err(crate::CalError::render("measurement unsupported"))
        }
        fn save_state(&mut self) {
            self.0.save_state()
        }
        fn restore_state(&mut self) {
            self.0.restore_state()
        }
        fn show_page(&mut self) -> CalResult<()> {
            self.0.show_page()
        }
    }

    let font = Font::new("Helvetica", 10.0);
    let mut s = NoMetrics(surface_with(&font));
    let err = StandardCells::default()
        .render_cell(&mut s, 5, Geom::new(0.0, 50.0, 10.0, 10.0), &font, true)
        .unwrap_err();
    assert!(matches!(err, crate::CalError::Render(_)));

    // Without ordinals nothing needs measuring.
    StandardCells::default()
        .render_cell(&mut s, 5, Geom::new(0.0, 50.0, 10.0, 10.0), &font, false)
        .unwrap();
}
