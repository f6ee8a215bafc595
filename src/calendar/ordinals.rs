use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use crate::foundation::error::{CalError, CalResult};

/// Day-of-month suffix lookup ("1st", "2nd", ...).
///
/// Days listed in `exact` use their own suffix; every other day gets
/// `fallback`. Swap the table to localize, e.g. French only needs
/// `{"exact": {"1": "er"}, "fallback": "e"}`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OrdinalTable {
    /// Suffixes for specific days.
    #[serde(default)]
    pub exact: BTreeMap<u32, String>,
    /// Suffix for any day not in `exact`.
    pub fallback: String,
}

impl OrdinalTable {
    /// English suffixes: 1st, 2nd, 3rd, 21st, 22nd, 23rd, 31st, otherwise "th".
    pub fn english() -> Self {
        let exact = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (31, "st"),
        ]
        .into_iter()
        .map(|(d, s)| (d, s.to_string()))
        .collect();
        Self {
            exact,
            fallback: "th".to_string(),
        }
    }

    /// Suffix for `day`.
    pub fn suffix(&self, day: u32) -> &str {
        self.exact
            .get(&day)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    /// Parse a table from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CalResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CalError::serde(format!("parse ordinal table JSON: {e}")))
    }

    /// Parse a table from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CalResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| CalError::io(path, e))?;
        Self::from_reader(BufReader::new(f))
    }
}

impl Default for OrdinalTable {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/ordinals.rs"]
mod tests;
