use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Weekdays in grid column order (Sunday first)
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Source of "today" for cursor resets and the initial selection
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Get the human-readable name for a month number (1-12)
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

/// Month name for a cell month number, where 0 wraps to December and 13 to January
pub fn month_name_wrapping(month: u32) -> &'static str {
    month_name((month + 11) % 12 + 1)
}

/// Full English weekday name
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Inverse of [`day_name`]
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    WEEKDAYS.into_iter().find(|weekday| day_name(*weekday) == name)
}

/// Weekday for a Sunday-based column index, wrapping modulo 7
pub fn weekday_from_sunday_index(index: u32) -> Weekday {
    WEEKDAYS[(index % 7) as usize]
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Get days in a month (1-12): the day before the first of the following month.
/// Out-of-range months fall back to 31.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Days in the month before `month` (1-12), crossing into the previous year for January
pub fn days_in_previous_month(year: i32, month: u32) -> u32 {
    if month == 1 {
        days_in_month(year - 1, 12)
    } else {
        days_in_month(year, month - 1)
    }
}

/// Weekday index (0 = Sunday) of the first day of `month` (1-12)
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Resolve a (day, month, year) triple whose month may overflow to 0 or 13
pub fn normalized_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    match month {
        0 => NaiveDate::from_ymd_opt(year - 1, 12, day),
        13 => NaiveDate::from_ymd_opt(year + 1, 1, day),
        _ => NaiveDate::from_ymd_opt(year, month, day),
    }
}
