use crate::foundation::error::{CalError, CalResult};

pub use kurbo::{Point, Rect, Size};

/// Axis-aligned rectangle in points, y growing upward.
///
/// Page-level rectangles use `y` as the bottom edge. Cell rectangles handed to a
/// [`crate::CellRenderer`] use `y` as the *top* edge, which is where text
/// baselines are measured down from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Geom {
    /// Left edge.
    pub x: f64,
    /// Bottom edge (page rectangles) or top edge (cell anchors).
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Geom {
    /// Build a rectangle from its four components.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin covering `size`.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Width and height as a [`Size`].
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Smaller of the two dimensions. All typography scales off this value.
    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }

    /// Covered area in square points.
    pub fn area(self) -> f64 {
        self.width * self.height
    }

    /// Shrink by `d` on every side. `y` is treated as the bottom edge.
    pub fn inset(self, d: f64) -> Self {
        Self::new(
            self.x + d,
            self.y + d,
            self.width - 2.0 * d,
            self.height - 2.0 * d,
        )
    }

    /// Shrink by `margin.width` left and right and `margin.height` top and bottom.
    pub fn inset_by(self, margin: Size) -> Self {
        Self::new(
            self.x + margin.width,
            self.y + margin.height,
            self.width - 2.0 * margin.width,
            self.height - 2.0 * margin.height,
        )
    }

    /// The area covered when `y` is the bottom edge.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// The area covered when `y` is the top edge (cell anchors).
    pub fn to_rect_from_top(self) -> Rect {
        Rect::new(self.x, self.y - self.height, self.x + self.width, self.y)
    }

    /// Reject non-finite components and non-positive dimensions.
    pub fn validate_positive(self, what: &str) -> CalResult<()> {
        let finite = [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(CalError::validation(format!("{what} must be finite")));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(CalError::validation(format!(
                "{what} must have positive width and height (got {}x{})",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// A named typeface at a size in points.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Font {
    /// Typeface name as understood by the drawing surface.
    pub name: String,
    /// Size in points.
    pub size: f64,
}

impl Font {
    /// Build a font from a name and size.
    pub fn new(name: impl Into<String>, size: f64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Offset of text from a cell's top-left corner: half an em across, 1.3 em down.
    pub fn cell_margin(&self) -> Size {
        Size::new(self.size * 0.5, self.size * 1.3)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
