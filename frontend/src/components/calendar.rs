use maud::{html, Markup};

use crate::calendar::{CalendarGrid, DateCell};
use crate::services::date_utils::{day_name, WEEKDAYS};

fn cell_class(cell: &DateCell) -> &'static str {
    match (cell.is_active, cell.is_today) {
        (false, _) => "inactive dateToParse",
        (true, true) => "active dateToParse",
        (true, false) => "dateToParse",
    }
}

/// Weekday header plus one `li` per date cell; the cell id is its identity key
pub fn calendar_markup(grid: &CalendarGrid) -> Markup {
    html! {
        ul class="weeks" {
            @for weekday in WEEKDAYS {
                li { (&day_name(weekday)[..3]) }
            }
        }
        ul class="date-number" {
            @for cell in &grid.cells {
                li class=(cell_class(cell)) id=(cell.id()) { (cell.day_of_month) }
            }
        }
    }
}
