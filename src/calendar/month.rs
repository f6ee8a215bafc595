use chrono::{Datelike, NaiveDate, Weekday};

use crate::foundation::error::{CalError, CalResult};

/// A validated proleptic Gregorian (year, month) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CalendarMonth {
    first: NaiveDate,
    days: u32,
}

impl CalendarMonth {
    /// Validate `month` (1..=12) within `year`.
    pub fn new(year: i32, month: u32) -> CalResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalError::validation(format!(
                "month must be in 1..=12 (got {month})"
            )));
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| CalError::validation(format!("year {year} is out of range")))?;
        let (next_y, next_m) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let next = NaiveDate::from_ymd_opt(next_y, next_m, 1)
            .ok_or_else(|| CalError::validation(format!("year {year} is out of range")))?;
        let days = u32::try_from(next.signed_duration_since(first).num_days())
            .map_err(|_| CalError::validation("month length overflow"))?;
        Ok(Self { first, days })
    }

    /// The month containing today's local date.
    pub fn current() -> CalResult<Self> {
        let today = chrono::Local::now().date_naive();
        Self::new(today.year(), today.month())
    }

    /// Build a month from optional parts, filling gaps from the local clock.
    pub fn resolve(year: Option<i32>, month: Option<u32>) -> CalResult<Self> {
        Self::resolve_with(year, month, Self::current)
    }

    /// Like [`CalendarMonth::resolve`], with `current` consulted only when a
    /// part is missing.
    pub fn resolve_with(
        year: Option<i32>,
        month: Option<u32>,
        current: impl FnOnce() -> CalResult<Self>,
    ) -> CalResult<Self> {
        match (year, month) {
            (Some(y), Some(m)) => Self::new(y, m),
            (y, m) => {
                let now = current()?;
                Self::new(y.unwrap_or(now.year()), m.unwrap_or(now.month()))
            }
        }
    }

    /// Calendar year, e.g. `2024`.
    pub fn year(self) -> i32 {
        self.first.year()
    }

    /// Month number, 1 = January.
    pub fn month(self) -> u32 {
        self.first.month()
    }

    /// Date of the 1st.
    pub fn first_day(self) -> NaiveDate {
        self.first
    }

    /// Number of days in the month (28..=31).
    pub fn days(self) -> u32 {
        self.days
    }

    /// Weekday the 1st falls on.
    pub fn first_weekday(self) -> Weekday {
        self.first.weekday()
    }

    /// English abbreviated month name, e.g. `Jan`.
    pub fn abbrev_name(self) -> String {
        self.first.format("%b").to_string()
    }

    /// Page label such as `Jan 2024`.
    pub fn label(self) -> String {
        format!("{} {}", self.abbrev_name(), self.year())
    }
}

impl std::fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Parse a weekday token such as `sun`, `Sunday` or `MON`.
pub fn parse_weekday(token: &str) -> CalResult<Weekday> {
    token
        .trim()
        .parse::<Weekday>()
        .map_err(|_| CalError::validation(format!("unknown weekday '{token}'")))
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/month.rs"]
mod tests;
