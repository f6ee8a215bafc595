use super::*;
use crate::foundation::error::CalError;
use crate::render::record::{DrawCall, RecordingSurface};

fn helv(size: f64) -> Font {
    Font::new("Helvetica", size)
}

#[test]
fn guard_restores_font_and_line_width() {
    let mut s = RecordingSurface::new();
    s.set_font(&helv(10.0)).unwrap();
    s.set_line_width(1.0);
    {
        let mut g = StateGuard::new(&mut s);
        g.set_font(&helv(20.0)).unwrap();
        g.set_line_width(3.0);
        assert_eq!(g.depth(), 1);
    }
    assert_eq!(s.depth(), 0);
    assert_eq!(s.active_font(), Some(&helv(10.0)));
    assert_eq!(s.line_width(), 1.0);
}

#[test]
fn guard_restores_when_drawing_fails() {
    fn failing_cell(s: &mut RecordingSurface) -> CalResult<()> {
        let mut g = StateGuard::new(s);
        g.set_line_width(9.0);
        g.set_font(&Font::new("NoSuchFont", 12.0))?;
        g.stroke_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        Ok(())
    }

    let mut s = RecordingSurface::new();
    s.set_line_width(1.0);
    let err = failing_cell(&mut s).unwrap_err();
    assert!(matches!(err, CalError::Render(_)));
    assert_eq!(s.depth(), 0);
    assert_eq!(s.line_width(), 1.0);
    assert_eq!(s.calls().last(), Some(&DrawCall::Restore));
    assert_eq!(s.stroked_rects().count(), 0);
}

#[test]
fn with_saved_state_returns_closure_value() {
    let mut s = RecordingSurface::new();
    let out = with_saved_state(&mut s, |s| {
        s.set_line_width(2.0);
        42
    });
    assert_eq!(out, 42);
    assert_eq!(
        s.calls(),
        &[DrawCall::Save, DrawCall::SetLineWidth(2.0), DrawCall::Restore]
    );
    assert_eq!(s.line_width(), 0.0);
}

#[test]
fn guard_works_through_trait_objects() {
    let mut s = RecordingSurface::new();
    {
        let dyn_surface: &mut dyn DrawSurface = &mut s;
        let mut g = StateGuard::new(dyn_surface);
        g.set_line_width(4.0);
    }
    assert_eq!(s.depth(), 0);
    assert_eq!(s.line_width(), 0.0);
}

#[test]
fn text_without_font_is_rejected() {
    let mut s = RecordingSurface::new();
    let err = s.draw_text(Point::new(0.0, 0.0), "1").unwrap_err();
    assert!(matches!(err, CalError::Render(_)));
}

#[test]
fn unbalanced_page_is_rejected() {
    let mut s = RecordingSurface::new();
    s.save_state();
    assert!(s.show_page().is_err());
    s.restore_state();
    assert!(s.show_page().is_ok());
}
