//! "Month Year" travel dates.
//!
//! Trip dates are stored as display strings such as `"May 2023"`. Sorting and
//! grouping parse them into a [`MonthYear`], mapping month names to indices via
//! `chrono::Month` (full or three-letter names, any case).

use chrono::Month;
use std::fmt;

/// A calendar month of a given year, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthYear {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
}

impl MonthYear {
    /// Creates a month-year, returning `None` if `month` is not in `1..=12`.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or("Unknown", |m| m.name());
        write!(f, "{name} {}", self.year)
    }
}

/// Parses a `"Month Year"` display date.
///
/// Surrounding whitespace and repeated inner spaces are tolerated. Anything
/// else (missing year, unknown month, extra words) yields `None`.
///
/// # Examples
///
/// ```
/// use wanderlog::domain::date::{parse_month_year, MonthYear};
///
/// assert_eq!(parse_month_year("May 2023"), MonthYear::new(2023, 5));
/// assert_eq!(parse_month_year("  sep 1999 "), MonthYear::new(1999, 9));
/// assert_eq!(parse_month_year("Someday"), None);
/// ```
#[must_use]
pub fn parse_month_year(input: &str) -> Option<MonthYear> {
    let mut parts = input.split_whitespace();
    let month_part = parts.next()?;
    let year_part = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let month = month_part.parse::<Month>().ok()?;
    let year = year_part.parse::<i32>().ok()?;

    MonthYear::new(year, month.number_from_month())
}

/// Formats a month-year back into display form, e.g. `"May 2023"`.
#[must_use]
pub fn format_month_year(value: MonthYear) -> String {
    value.to_string()
}
