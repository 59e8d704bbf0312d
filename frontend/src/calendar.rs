//! Calendar date model.
//!
//! Pure date arithmetic that turns a (year, month) cursor into the grid of
//! date cells shown by the dashboard: trailing days of the previous month,
//! every day of the displayed month, then leading days of the next month up
//! to the closing Saturday. Cells are recreated on every computation and are
//! addressed by their [`CellId`], so a single delegated click handler can
//! resolve any click against the current grid.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

use crate::services::date_utils::{
    day_name, days_in_month, days_in_previous_month, first_weekday_of_month, month_name,
    normalized_date, weekday_from_name, weekday_from_sunday_index,
};
use crate::state::selection_state::Selection;

/// The (year, month) pair currently displayed, with a 0-based month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    pub year: i32,
    /// Month index, 0 = January. Only in [0, 11] between navigation steps.
    pub month: i32,
}

impl CalendarCursor {
    pub fn new(year: i32, month: i32) -> Self {
        Self { year, month }
    }

    /// Cursor pointing at the month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0() as i32,
        }
    }

    /// 1-based month number
    pub fn month_number(&self) -> u32 {
        (self.month + 1) as u32
    }

    pub fn is_in_range(&self) -> bool {
        (0..=11).contains(&self.month)
    }

    /// Month/year label, e.g. "October 2026"
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month_number()), self.year)
    }
}

/// Identity of a date cell: (day name, day of month, month number, year)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId {
    pub day_name: Weekday,
    pub day_of_month: u32,
    /// 1-based; 0 or 13 for padding borrowed from an adjacent month
    pub month_number: u32,
    pub year: i32,
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            day_name(self.day_name),
            self.day_of_month,
            self.month_number,
            self.year
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date cell id: {0:?}")]
pub struct InvalidCellId(pub String);

impl FromStr for CellId {
    type Err = InvalidCellId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidCellId(s.to_string());
        let parts: Vec<&str> = s.split('-').collect();
        let [day, date, month, year]: [&str; 4] =
            parts.as_slice().try_into().map_err(|_| invalid())?;

        Ok(CellId {
            day_name: weekday_from_name(day).ok_or_else(invalid)?,
            day_of_month: date.parse().map_err(|_| invalid())?,
            month_number: month.parse().map_err(|_| invalid())?,
            year: year.parse().map_err(|_| invalid())?,
        })
    }
}

/// One cell of the rendered month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCell {
    pub day_name: Weekday,
    pub day_of_month: u32,
    pub month_number: u32,
    pub year: i32,
    /// Belongs to the displayed month (false for padding)
    pub is_active: bool,
    /// Highlighted as the selected day of the displayed month
    pub is_today: bool,
}

impl DateCell {
    pub fn id(&self) -> CellId {
        CellId {
            day_name: self.day_name,
            day_of_month: self.day_of_month,
            month_number: self.month_number,
            year: self.year,
        }
    }

    /// Real calendar date of the cell, resolving month overflow
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        normalized_date(self.year, self.month_number, self.day_of_month)
    }
}

/// A computed month grid together with the cursor it was computed for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub cursor: CalendarCursor,
    pub cells: Vec<DateCell>,
}

impl CalendarGrid {
    pub fn compute(cursor: CalendarCursor, selection: &Selection) -> Self {
        Self {
            cursor,
            cells: compute_grid(cursor, selection),
        }
    }

    pub fn label(&self) -> String {
        self.cursor.label()
    }

    pub fn find(&self, id: &CellId) -> Option<&DateCell> {
        self.cells.iter().find(|cell| cell.id() == *id)
    }

    /// Cell for `day` of the displayed month
    pub fn active_cell(&self, day: u32) -> Option<&DateCell> {
        self.cells
            .iter()
            .find(|cell| cell.is_active && cell.day_of_month == day)
    }

    pub fn weeks(&self) -> std::slice::Chunks<'_, DateCell> {
        self.cells.chunks(7)
    }
}

/// Compute the date cells for the month under `cursor`.
///
/// The highlighted cell follows the selection, and only while the selection's
/// month and year are the ones on display.
pub fn compute_grid(cursor: CalendarCursor, selection: &Selection) -> Vec<DateCell> {
    let year = cursor.year;
    let month_number = cursor.month_number();

    let first_weekday = first_weekday_of_month(year, month_number);
    let last_date = days_in_month(year, month_number);
    let last_date_prev_month = days_in_previous_month(year, month_number);
    let last_weekday = (first_weekday + last_date - 1) % 7;
    let showing_selected_month = selection.month == month_number && selection.year == year;

    let mut cells = Vec::with_capacity(42);
    let mut column = 0u32;
    let mut push = |day_of_month: u32, month_number: u32, is_active: bool, is_today: bool| {
        cells.push(DateCell {
            day_name: weekday_from_sunday_index(column),
            day_of_month,
            month_number,
            year,
            is_active,
            is_today,
        });
        column += 1;
    };

    // Trailing days of the previous month
    for offset in (1..=first_weekday).rev() {
        push(last_date_prev_month - offset + 1, month_number - 1, false, false);
    }

    for day in 1..=last_date {
        let is_today = showing_selected_month && day == selection.date;
        push(day, month_number, true, is_today);
    }

    // Leading days of the next month, through Saturday
    for weekday in last_weekday..6 {
        push(weekday - last_weekday + 1, month_number + 1, false, false);
    }

    cells
}
