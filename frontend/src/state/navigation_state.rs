//! # Navigation State Module
//!
//! Owns the calendar cursor and moves it one month at a time.
//!
//! Stepping past December or before January does not roll the year over:
//! the cursor is reset to the month containing today instead. This mirrors
//! the booking site's behaviour and is kept until product decides otherwise.

use std::sync::Arc;

use tracing::{info, warn};

use crate::calendar::CalendarCursor;
use crate::services::date_utils::Clock;

/// Direction the month chevron currently points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChevronDirection {
    #[default]
    Right,
    Left,
}

pub struct NavigationController {
    cursor: CalendarCursor,
    chevron: ChevronDirection,
    clock: Arc<dyn Clock>,
}

impl NavigationController {
    /// Create a controller whose cursor points at today's month
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let cursor = CalendarCursor::containing(clock.today());
        Self::with_cursor(clock, cursor)
    }

    pub fn with_cursor(clock: Arc<dyn Clock>, cursor: CalendarCursor) -> Self {
        Self {
            cursor,
            chevron: ChevronDirection::default(),
            clock,
        }
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub fn chevron(&self) -> ChevronDirection {
        self.chevron
    }

    /// Navigate to the next month
    pub fn next(&mut self) -> CalendarCursor {
        self.cursor.month += 1;
        self.settle()
    }

    /// Navigate to the previous month
    pub fn previous(&mut self) -> CalendarCursor {
        self.cursor.month -= 1;
        self.settle()
    }

    /// Handle a click on the chevron: a right-pointing chevron advances and
    /// flips left, a left-pointing one goes back and flips right.
    pub fn chevron_click(&mut self) -> CalendarCursor {
        match self.chevron {
            ChevronDirection::Right => {
                self.chevron = ChevronDirection::Left;
                self.next()
            }
            ChevronDirection::Left => {
                self.chevron = ChevronDirection::Right;
                self.previous()
            }
        }
    }

    fn settle(&mut self) -> CalendarCursor {
        if !self.cursor.is_in_range() {
            let overflowed = self.cursor;
            self.cursor = CalendarCursor::containing(self.clock.today());
            warn!(
                month = overflowed.month,
                year = overflowed.year,
                "month left the displayed year, resetting cursor to today"
            );
        }

        info!("📅 Navigated to {}", self.cursor.label());
        self.cursor
    }
}
