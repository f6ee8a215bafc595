use std::ops::{Deref, DerefMut};

use crate::foundation::core::{Font, Point, Rect};
use crate::foundation::error::CalResult;

/// Drawing operations the calendar engine needs from a page backend.
///
/// Coordinates are in points with y growing upward. The active font and line
/// width are part of the saved/restored drawing state.
pub trait DrawSurface {
    /// Make `font` the active font for subsequent text.
    fn set_font(&mut self, font: &Font) -> CalResult<()>;

    /// Line width used by [`DrawSurface::stroke_rect`].
    fn set_line_width(&mut self, width: f64);

    /// Stroke the outline of `rect`.
    fn stroke_rect(&mut self, rect: Rect);

    /// Draw `text` in the active font with its baseline starting at `at`.
    fn draw_text(&mut self, at: Point, text: &str) -> CalResult<()>;

    /// Advance width of `text` set in `font`.
    fn text_width(&self, text: &str, font: &Font) -> CalResult<f64>;

    /// Push the current drawing state.
    fn save_state(&mut self);

    /// Pop the most recently saved drawing state.
    fn restore_state(&mut self);

    /// Finish the current page and start a fresh one.
    fn show_page(&mut self) -> CalResult<()>;
}

/// Saves the surface state on creation and restores it on drop.
///
/// The restore runs on every exit path, so a cell that bails out with `?`
/// halfway through drawing cannot leak its font or line width into the next
/// cell.
pub struct StateGuard<'a, S: DrawSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: DrawSurface + ?Sized> StateGuard<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save_state();
        Self { surface }
    }
}

impl<S: DrawSurface + ?Sized> Deref for StateGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> DerefMut for StateGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> Drop for StateGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.restore_state();
    }
}

/// Run `f` between a save and a restore of `surface`'s drawing state.
pub fn with_saved_state<S, R>(surface: &mut S, f: impl FnOnce(&mut S) -> R) -> R
where
    S: DrawSurface + ?Sized,
{
    let mut guard = StateGuard::new(surface);
    f(&mut *guard)
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
