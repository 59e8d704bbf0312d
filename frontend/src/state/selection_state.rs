//! # Selection State Module
//!
//! The single live selection that drives the session query: a date taken
//! from a clicked calendar cell plus the activity-type filter.

use chrono::{Datelike, Weekday};
use shared::{ActivityType, SessionQueryKey};
use tracing::debug;

use crate::calendar::DateCell;
use crate::services::date_utils::{day_name, month_name_wrapping, Clock};

/// Currently selected date and activity type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub day_name: Weekday,
    pub date: u32,
    /// 1-based, copied verbatim from the clicked cell (0 or 13 for padding)
    pub month: u32,
    pub year: i32,
    pub activity_type: ActivityType,
}

impl Selection {
    /// Today with the general filter
    pub fn today(clock: &dyn Clock) -> Self {
        let today = clock.today();
        Self {
            day_name: today.weekday(),
            date: today.day(),
            month: today.month(),
            year: today.year(),
            activity_type: ActivityType::General,
        }
    }

    pub fn query_key(&self) -> SessionQueryKey {
        SessionQueryKey {
            year: self.year,
            month: self.month,
            date: self.date,
            activity_type: self.activity_type,
        }
    }

    /// Header text for the selected date, e.g. "Sunday 18 October"
    pub fn header_text(&self) -> String {
        format!(
            "{} {} {}",
            day_name(self.day_name),
            self.date,
            month_name_wrapping(self.month)
        )
    }
}

#[derive(Debug, Clone)]
pub struct SelectionState {
    selection: Selection,
}

impl SelectionState {
    pub fn new(selection: Selection) -> Self {
        Self { selection }
    }

    pub fn current(&self) -> &Selection {
        &self.selection
    }

    /// Select the date of `cell`, keeping the activity type
    pub fn select_date(&mut self, cell: &DateCell) -> &Selection {
        self.selection.day_name = cell.day_name;
        self.selection.date = cell.day_of_month;
        self.selection.month = cell.month_number;
        self.selection.year = cell.year;
        debug!(cell = %cell.id(), "date selected");
        &self.selection
    }

    /// Select the activity type, keeping the date
    pub fn select_type(&mut self, activity_type: ActivityType) -> &Selection {
        self.selection.activity_type = activity_type;
        debug!(activity_type = %activity_type, "activity type selected");
        &self.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{compute_grid, CalendarCursor};
    use crate::services::date_utils::FixedClock;
    use chrono::NaiveDate;

    fn today_state() -> SelectionState {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        SelectionState::new(Selection::today(&clock))
    }

    #[test]
    fn test_defaults_to_today_and_general() {
        let state = today_state();
        let selection = state.current();

        assert_eq!(selection.day_name, Weekday::Sun);
        assert_eq!((selection.date, selection.month, selection.year), (18, 10, 2026));
        assert_eq!(selection.activity_type, ActivityType::General);
        assert_eq!(selection.header_text(), "Sunday 18 October");
        assert_eq!(selection.query_key().to_string(), "2026-10-18-general");
    }

    #[test]
    fn test_select_date_builds_key_from_cell() {
        let mut state = today_state();
        state.select_type(ActivityType::Class);

        let cells = compute_grid(CalendarCursor::new(2026, 10), state.current());
        let cell = cells.iter().find(|c| c.is_active && c.day_of_month == 3).unwrap();
        let key = state.select_date(cell).query_key();

        assert_eq!(
            key.to_string(),
            format!("{}-{}-{}-{}", cell.year, cell.month_number, cell.day_of_month, "class")
        );
        assert_eq!(key.to_string(), "2026-11-3-class");
        assert_eq!(state.current().day_name, Weekday::Tue);
    }

    #[test]
    fn test_select_padding_cell_keeps_overflow_month() {
        let mut state = today_state();
        let cells = compute_grid(CalendarCursor::new(2026, 0), state.current());
        let padding = cells[0];

        let selection = *state.select_date(&padding);
        assert_eq!(selection.month, 0);
        assert_eq!(selection.query_key().to_string(), "2026-0-28-general");
        assert_eq!(selection.header_text(), "Sunday 28 December");
    }

    #[test]
    fn test_select_type_leaves_date_untouched() {
        let mut state = today_state();
        let cells = compute_grid(CalendarCursor::new(2026, 9), state.current());
        state.select_date(&cells[10]);
        let before = *state.current();

        let after = *state.select_type(ActivityType::Team);

        assert_eq!(after.activity_type, ActivityType::Team);
        assert_eq!(
            (after.day_name, after.date, after.month, after.year),
            (before.day_name, before.date, before.month, before.year)
        );
    }
}
