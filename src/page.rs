use std::path::Path;

use chrono::Weekday;

use crate::{
    calendar::{month::CalendarMonth, ordinals::OrdinalTable},
    foundation::core::{Geom, Size},
    foundation::error::{CalError, CalResult},
    layout::grid::{MonthLayout, layout_month},
    paper::validate_page_size,
    render::{
        cell::{CellRenderer, StandardCells},
        pdf::PdfSurface,
        surface::{DrawSurface, StateGuard},
    },
};

/// Options for rendering one calendar page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PageOpts {
    /// Draw "st"/"nd"/"rd"/"th" after each day number.
    pub show_ordinals: bool,
    /// Weekday in the leftmost column.
    pub first_weekday: Weekday,
    /// Suffixes used when `show_ordinals` is set.
    pub ordinals: OrdinalTable,
}

impl Default for PageOpts {
    fn default() -> Self {
        Self {
            show_ordinals: false,
            first_weekday: Weekday::Sun,
            ordinals: OrdinalTable::english(),
        }
    }
}

/// Margin kept clear around the grid: 2% of the page on each side.
pub fn page_margin(page: Size) -> Size {
    Size::new(page.width / 50.0, page.height / 50.0)
}

/// Rectangle (y = bottom edge) the calendar grid occupies on `page`.
pub fn calendar_rect(page: Size) -> Geom {
    Geom::from_size(page).inset_by(page_margin(page))
}

fn reset_cell_state<S: DrawSurface + ?Sized>(
    surface: &mut S,
    layout: &MonthLayout,
) -> CalResult<()> {
    surface.set_font(&layout.font)?;
    surface.set_line_width(layout.stroke_width);
    Ok(())
}

/// Draw one month into `rect` on `surface` and finish the page.
///
/// Cells are drawn row-major, each with a freshly reset font and line width
/// inside its own save/restore; the label comes last.
#[tracing::instrument(skip(surface, renderer), fields(month = %month))]
pub fn add_calendar_page<S, R>(
    surface: &mut S,
    rect: Geom,
    month: CalendarMonth,
    renderer: &R,
    show_ordinals: bool,
    first_weekday: Weekday,
) -> CalResult<MonthLayout>
where
    S: DrawSurface,
    R: CellRenderer + ?Sized,
{
    let layout = layout_month(month, first_weekday, rect)?;

    for (_, _, day, cell) in layout.cells() {
        let mut s = StateGuard::new(&mut *surface);
        reset_cell_state(&mut *s, &layout)?;
        renderer.render_cell(&mut *s, day, cell, &layout.font, show_ordinals)?;
    }

    {
        let mut s = StateGuard::new(&mut *surface);
        reset_cell_state(&mut *s, &layout)?;
        renderer.render_label(&mut *s, month, layout.label_geometry(), &layout.font)?;
    }

    surface.show_page()?;
    Ok(layout)
}

/// Render `month` to an in-memory single page PDF of `page_size` points.
pub fn render_page_pdf(
    month: CalendarMonth,
    page_size: Size,
    opts: &PageOpts,
) -> CalResult<Vec<u8>> {
    validate_page_size(page_size)?;
    let renderer = StandardCells::new(opts.ordinals.clone());
    let mut surface = PdfSurface::new(page_size);
    add_calendar_page(
        &mut surface,
        calendar_rect(page_size),
        month,
        &renderer,
        opts.show_ordinals,
        opts.first_weekday,
    )?;
    surface.finish()
}

/// Render `month` and write it as a one-page PDF to `out_path`.
///
/// Nothing is written unless the whole page rendered successfully. Missing
/// parent directories are created.
#[tracing::instrument(skip(out_path, opts), fields(month = %month))]
pub fn generate_page(
    month: CalendarMonth,
    out_path: impl AsRef<Path>,
    page_size: Size,
    opts: &PageOpts,
) -> CalResult<()> {
    let out_path = out_path.as_ref();
    let bytes = render_page_pdf(month, page_size, opts)?;

    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CalError::io(parent, e))?;
    }
    std::fs::write(out_path, &bytes).map_err(|e| CalError::io(out_path, e))?;

    tracing::info!(path = %out_path.display(), bytes = bytes.len(), "wrote calendar page");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/page.rs"]
mod tests;
