//! printcal lays out and renders a single calendar month onto a fixed-size page.
//!
//! # Pipeline overview
//!
//! 1. **Grid**: `CalendarMonth + Weekday -> WeekGrid` (day numbers per week row)
//! 2. **Layout**: `WeekGrid + target Geom -> MonthLayout` (cell rectangles, font, stroke, label slot)
//! 3. **Render**: each cell goes through a [`CellRenderer`] onto a [`DrawSurface`]
//! 4. **Write**: [`PdfSurface`] assembles the page in memory; [`generate_page`] writes it out
//!
//! Every size on the page derives from the shorter side of the target
//! rectangle, so the same month renders identically (up to scale) on a
//! shipping label or a legal sheet, portrait or landscape.
#![forbid(unsafe_code)]

mod calendar;
mod foundation;
mod layout;
mod page;
mod paper;
mod render;

pub use calendar::grid::WeekGrid;
pub use calendar::month::{CalendarMonth, parse_weekday};
pub use calendar::ordinals::OrdinalTable;
pub use chrono::Weekday;
pub use foundation::core::{Font, Geom, Point, Rect, Size};
pub use foundation::error::{CalError, CalResult};
pub use layout::grid::{DEFAULT_FONT_NAME, FONT_RATIO, MonthLayout, STROKE_RATIO, layout_month};
pub use page::{
    PageOpts, add_calendar_page, calendar_rect, generate_page, page_margin, render_page_pdf,
};
pub use paper::{INCH, MM, Orientation, PageSpec, PaperSize, validate_page_size};
pub use render::cell::{CellRenderer, StandardCells, draw_day_cell, render_month_label};
pub use render::metrics::text_width;
pub use render::pdf::PdfSurface;
pub use render::record::{DrawCall, RecordingSurface};
pub use render::surface::{DrawSurface, StateGuard, with_saved_state};
