use chrono::Weekday;

use crate::calendar::month::CalendarMonth;

/// Day numbers of one month laid out week by week.
///
/// Each row holds exactly seven cells starting at the configured first
/// weekday. `0` marks a padding cell before the 1st or after the last day.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct WeekGrid {
    weeks: Vec<[u32; 7]>,
}

impl WeekGrid {
    /// Build the grid for `month` with rows starting on `first_weekday`.
    pub fn new(month: CalendarMonth, first_weekday: Weekday) -> Self {
        let lead = (month.first_weekday().num_days_from_monday() + 7
            - first_weekday.num_days_from_monday())
            % 7;
        let cells = lead + month.days();
        let rows = cells.div_ceil(7);

        let mut weeks = vec![[0u32; 7]; rows as usize];
        for day in 1..=month.days() {
            let slot = (lead + day - 1) as usize;
            weeks[slot / 7][slot % 7] = day;
        }
        Self { weeks }
    }

    /// Week rows from the top of the page down.
    pub fn weeks(&self) -> &[[u32; 7]] {
        &self.weeks
    }

    /// Number of week rows (4..=6).
    pub fn num_rows(&self) -> usize {
        self.weeks.len()
    }

    /// Day value at `(row, col)`, `None` outside the grid.
    pub fn day_at(&self, row: usize, col: usize) -> Option<u32> {
        self.weeks.get(row).and_then(|w| w.get(col)).copied()
    }

    /// True when the 1st sits in the top-left cell.
    pub fn starts_on_first_column(&self) -> bool {
        self.day_at(0, 0) == Some(1)
    }

    /// Every cell in row-major order as `(row, col, day)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.weeks.iter().enumerate().flat_map(|(row, week)| {
            week.iter()
                .enumerate()
                .map(move |(col, &day)| (row, col, day))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/grid.rs"]
mod tests;
