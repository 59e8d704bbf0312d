//! Plain-text renditions of the calendar and session list for terminals.

use std::fmt::Write;

use crate::calendar::CalendarGrid;
use crate::services::date_utils::{day_name, WEEKDAYS};

use super::session_list::SessionListView;

/// Month grid as text: padding days in parentheses, the highlighted day in brackets
pub fn calendar_text(grid: &CalendarGrid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:^35}", grid.label());

    for weekday in WEEKDAYS {
        let _ = write!(out, " {:>3} ", &day_name(weekday)[..2]);
    }
    out.push('\n');

    for week in grid.weeks() {
        for cell in week {
            let _ = match (cell.is_active, cell.is_today) {
                (false, _) => write!(out, " ({:>2})", cell.day_of_month),
                (true, true) => write!(out, " [{:>2}]", cell.day_of_month),
                (true, false) => write!(out, "  {:>2} ", cell.day_of_month),
            };
        }
        out.push('\n');
    }
    out
}

/// Session rows as text, one slot per line
pub fn session_list_text(view: &SessionListView) -> String {
    if view.is_empty() {
        return "  no sessions available\n".to_string();
    }

    let mut out = String::new();
    for row in &view.rows {
        let _ = writeln!(
            out,
            "  {:<15} {:<18} {} ({})",
            row.facility, row.activity, row.time_range, row.badge.count
        );
    }
    out
}
