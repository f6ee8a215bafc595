use std::str::FromStr;

use crate::foundation::core::{Geom, Size};
use crate::foundation::error::{CalError, CalResult};

/// Points per inch.
pub const INCH: f64 = 72.0;

/// Points per millimetre.
pub const MM: f64 = INCH / 25.4;

/// Named paper sizes, stored portrait (width <= height).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperSize {
    Letter,
    Legal,
    A4,
    /// 4x6 inch shipping label.
    #[serde(rename = "label_4x6")]
    Label4x6,
    /// 4x8 inch shipping label.
    #[serde(rename = "label_4x8")]
    Label4x8,
}

impl PaperSize {
    /// Every preset.
    pub const ALL: [PaperSize; 5] = [
        PaperSize::Letter,
        PaperSize::Legal,
        PaperSize::A4,
        PaperSize::Label4x6,
        PaperSize::Label4x8,
    ];

    /// Portrait dimensions in points.
    pub fn size(self) -> Size {
        match self {
            Self::Letter => Size::new(8.5 * INCH, 11.0 * INCH),
            Self::Legal => Size::new(8.5 * INCH, 14.0 * INCH),
            Self::A4 => Size::new(210.0 * MM, 297.0 * MM),
            Self::Label4x6 => Size::new(4.0 * INCH, 6.0 * INCH),
            Self::Label4x8 => Size::new(4.0 * INCH, 8.0 * INCH),
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Letter => "letter",
            Self::Legal => "legal",
            Self::A4 => "a4",
            Self::Label4x6 => "label_4x6",
            Self::Label4x8 => "label_4x8",
        }
    }
}

/// Which side of the page is longer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

impl Orientation {
    /// Rotate `size` so its longer side runs the way this orientation asks.
    pub fn apply(self, size: Size) -> Size {
        let (short, long) = if size.width <= size.height {
            (size.width, size.height)
        } else {
            (size.height, size.width)
        };
        match self {
            Self::Portrait => Size::new(short, long),
            Self::Landscape => Size::new(long, short),
        }
    }
}

impl FromStr for Orientation {
    type Err = CalError;

    fn from_str(s: &str) -> CalResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            other => Err(CalError::validation(format!(
                "unknown orientation '{other}' (expected portrait or landscape)"
            ))),
        }
    }
}

/// A page size as given on the command line: a preset or explicit points.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum PageSpec {
    Preset(PaperSize),
    Points { width: f64, height: f64 },
}

impl PageSpec {
    /// Final page size in points after applying `orientation`.
    ///
    /// Explicit sizes are taken as given when `orientation` is `None`.
    pub fn resolve(self, orientation: Option<Orientation>) -> CalResult<Size> {
        let base = match self {
            Self::Preset(p) => p.size(),
            Self::Points { width, height } => {
                validate_page_size(Size::new(width, height))?;
                Size::new(width, height)
            }
        };
        Ok(match orientation {
            Some(o) => o.apply(base),
            None => base,
        })
    }
}

impl FromStr for PageSpec {
    type Err = CalError;

    /// Accepts a preset token (`letter`, `a4`, ...) or `WIDTHxHEIGHT` in points.
    fn from_str(s: &str) -> CalResult<Self> {
        let token = s.trim().to_ascii_lowercase();
        if let Some(p) = PaperSize::ALL.into_iter().find(|p| p.token() == token) {
            return Ok(Self::Preset(p));
        }
        let (w, h) = token.split_once('x').ok_or_else(|| {
            CalError::validation(format!(
                "unknown paper size '{s}' (expected a preset or WIDTHxHEIGHT in points)"
            ))
        })?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| CalError::validation(format!("bad page dimension '{v}': {e}")))
        };
        let (width, height) = (parse(w)?, parse(h)?);
        validate_page_size(Size::new(width, height))?;
        Ok(Self::Points { width, height })
    }
}

/// Reject page sizes that are not finite and positive, including sizes that
/// overflow or underflow once narrowed to the `f32` coordinates PDF content
/// is written in.
pub fn validate_page_size(size: Size) -> CalResult<()> {
    Geom::from_size(size).validate_positive("page size")?;
    let (width, height) = (size.width as f32, size.height as f32);
    if !(width.is_normal() && height.is_normal()) {
        return Err(CalError::validation(format!(
            "page size {}x{} is outside the range PDF coordinates can represent",
            size.width, size.height
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/paper.rs"]
mod tests;
