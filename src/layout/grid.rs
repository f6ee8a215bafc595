use chrono::Weekday;

use crate::{
    calendar::{grid::WeekGrid, month::CalendarMonth},
    foundation::core::{Font, Geom, Size},
    foundation::error::CalResult,
};

/// Typeface used for all calendar text.
pub const DEFAULT_FONT_NAME: &str = "Helvetica";

/// Border stroke width as a fraction of the target's shorter side.
pub const STROKE_RATIO: f64 = 0.0025;

/// Font size as a fraction of the target's shorter side.
pub const FONT_RATIO: f64 = 0.028;

/// Resolved geometry of one month page.
///
/// Every size is derived from `min(width, height)` of the target rectangle,
/// so the same month laid out into a rectangle twice as large scales
/// uniformly.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MonthLayout {
    /// Month this layout was computed for.
    #[serde(skip)]
    pub month: CalendarMonth,
    /// Day numbers per week row.
    pub grid: WeekGrid,
    /// Target rectangle shrunk by the stroke width; the cells tile it exactly.
    pub inset: Geom,
    /// Size of every cell.
    pub cell_size: Size,
    /// Font shared by day numbers and the label.
    pub font: Font,
    /// Border stroke width.
    pub stroke_width: f64,
    /// Grid slot `(row, col)` the month label is drawn in.
    pub label_slot: (usize, usize),
}

impl MonthLayout {
    /// Number of week rows in the grid.
    pub fn num_rows(&self) -> usize {
        self.grid.num_rows()
    }

    /// Cell rectangle for `(row, col)` with `y` at the cell's top edge.
    ///
    /// Row 0 is the top row of the page. Rows and columns outside the grid
    /// extrapolate the same lattice.
    pub fn cell_geometry(&self, row: usize, col: usize) -> Geom {
        let rows = self.num_rows() as f64;
        Geom::new(
            self.inset.x + self.cell_size.width * col as f64,
            self.inset.y + (rows - row as f64) * self.cell_size.height,
            self.cell_size.width,
            self.cell_size.height,
        )
    }

    /// Cell rectangle the month label is anchored in.
    pub fn label_geometry(&self) -> Geom {
        let (row, col) = self.label_slot;
        self.cell_geometry(row, col)
    }

    /// Every grid cell in row-major order as `(row, col, day, geometry)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u32, Geom)> + '_ {
        self.grid
            .cells()
            .map(|(row, col, day)| (row, col, day, self.cell_geometry(row, col)))
    }
}

/// Lay out `month` inside `target` (y = bottom edge) with rows starting on
/// `first_weekday`.
#[tracing::instrument(skip(target), fields(month = %month))]
pub fn layout_month(
    month: CalendarMonth,
    first_weekday: Weekday,
    target: Geom,
) -> CalResult<MonthLayout> {
    target.validate_positive("calendar target rectangle")?;

    let grid = WeekGrid::new(month, first_weekday);
    let rows = grid.num_rows();

    let scale = target.min_side();
    let stroke_width = scale * STROKE_RATIO;
    let font = Font::new(DEFAULT_FONT_NAME, scale * FONT_RATIO);

    // Leave room for the stroke around the outermost cells.
    let inset = target.inset(stroke_width);
    let cell_size = Size::new(inset.width / 7.0, inset.height / rows as f64);

    // Upper-left unless the month starts on the first weekday; then the
    // upper-left cell is taken and the lower-right is spare instead.
    let label_slot = if grid.starts_on_first_column() {
        (rows - 1, 6)
    } else {
        (0, 0)
    };

    tracing::debug!(rows, ?label_slot, font_size = font.size, "laid out month");

    Ok(MonthLayout {
        month,
        grid,
        inset,
        cell_size,
        font,
        stroke_width,
        label_slot,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
