use crate::{
    calendar::{month::CalendarMonth, ordinals::OrdinalTable},
    foundation::core::{Font, Geom, Point},
    foundation::error::CalResult,
    render::surface::DrawSurface,
};

/// How one calendar cell is drawn. The layout engine decides where.
///
/// Cell rectangles arrive with `y` at their top edge. The surface already has
/// `font` active and the border line width set; implementations may change
/// either freely since every call is wrapped in a save/restore.
pub trait CellRenderer {
    /// Draw the cell for `day` (`0` for padding cells).
    fn render_cell(
        &self,
        surface: &mut dyn DrawSurface,
        day: u32,
        cell: Geom,
        font: &Font,
        show_ordinals: bool,
    ) -> CalResult<()>;

    /// Draw the month/year label inside `cell`.
    fn render_label(
        &self,
        surface: &mut dyn DrawSurface,
        month: CalendarMonth,
        cell: Geom,
        font: &Font,
    ) -> CalResult<()> {
        render_month_label(surface, month, cell, font)
    }
}

/// Bordered cells with the day number in the top-left corner.
#[derive(Clone, Debug, Default)]
pub struct StandardCells {
    ordinals: OrdinalTable,
}

impl StandardCells {
    pub fn new(ordinals: OrdinalTable) -> Self {
        Self { ordinals }
    }

    pub fn ordinals(&self) -> &OrdinalTable {
        &self.ordinals
    }
}

impl CellRenderer for StandardCells {
    fn render_cell(
        &self,
        surface: &mut dyn DrawSurface,
        day: u32,
        cell: Geom,
        font: &Font,
        show_ordinals: bool,
    ) -> CalResult<()> {
        let ordinals = show_ordinals.then_some(&self.ordinals);
        draw_day_cell(surface, day, cell, font, ordinals)
    }
}

/// Draw a bordered day cell. Padding cells (`day == 0`) draw nothing.
///
/// With `ordinals` set the suffix is drawn right after the number, lifted by a
/// tenth of the vertical margin.
pub fn draw_day_cell(
    surface: &mut dyn DrawSurface,
    day: u32,
    cell: Geom,
    font: &Font,
    ordinals: Option<&OrdinalTable>,
) -> CalResult<()> {
    if day == 0 {
        return Ok(());
    }

    let margin = font.cell_margin();
    surface.stroke_rect(cell.to_rect_from_top());

    let number = day.to_string();
    let text_x = cell.x + margin.width;
    let text_y = cell.y - margin.height;
    surface.draw_text(Point::new(text_x, text_y), &number)?;

    if let Some(table) = ordinals {
        let number_width = surface.text_width(&number, font)?;
        surface.draw_text(
            Point::new(text_x + number_width, text_y + margin.height * 0.1),
            table.suffix(day),
        )?;
    }
    Ok(())
}

/// Draw `"<Mon> <Year>"` left-anchored in `cell`, without a border.
pub fn render_month_label(
    surface: &mut dyn DrawSurface,
    month: CalendarMonth,
    cell: Geom,
    font: &Font,
) -> CalResult<()> {
    let margin = font.cell_margin();
    surface.draw_text(
        Point::new(cell.x + margin.width, cell.y - margin.height),
        &month.label(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/cell.rs"]
mod tests;
