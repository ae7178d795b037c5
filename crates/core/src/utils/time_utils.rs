use chrono::{Datelike, NaiveDate};

/// Returns the calendar month preceding `(year, month)`, rolling over January.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Canonical "YYYY-MM" key for a calendar month.
pub fn month_key(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

/// Whether `date` falls inside the given calendar month.
pub fn in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}
