use chrono::{DateTime, Months, NaiveDate, TimeZone};
use serde::Serialize;

use crate::{CoreError, CoreResult};

const ISO_DATE: &str = "%Y-%m-%d";

/// Length of the trailing window used when no range is selected
pub const DEFAULT_WINDOW_MONTHS: u32 = 24;

/// Anything that names a calendar day as seen by its own clock.
pub trait CalendarDate {
    fn calendar_date(&self) -> NaiveDate;
}

impl CalendarDate for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl<Tz: TimeZone> CalendarDate for DateTime<Tz> {
    // Read the day in the value's own offset, never after converting to UTC.
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Format as `YYYY-MM-DD` in the date's local calendar.
pub fn format_date_to_iso<D: CalendarDate>(date: &D) -> String {
    date.calendar_date().format(ISO_DATE).to_string()
}

pub fn parse_iso_date(value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE)
        .map_err(|e| CoreError::ValidationError(format!("Invalid date '{}': {}", value, e)))
}

/// Same month and day two years back. Feb 29 falls back to Feb 28.
pub fn two_years_before(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(DEFAULT_WINDOW_MONTHS))
        .unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Builds a range, swapping the ends if given in reverse.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    /// `[today - 2 years, today]`
    pub fn trailing_window(today: NaiveDate) -> Self {
        Self::new(two_years_before(today), today)
    }
}

/// A calendar range picker capped at `today`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRangeSelector {
    max_date: NaiveDate,
    selection: Option<DateRange>,
}

impl DateRangeSelector {
    /// Starts with the trailing two-year window selected.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            max_date: today,
            selection: Some(DateRange::trailing_window(today)),
        }
    }

    pub fn max_date(&self) -> NaiveDate {
        self.max_date
    }

    pub fn selection(&self) -> Option<DateRange> {
        self.selection
    }

    /// Record a picked range. Days after the cap are pulled back to it.
    pub fn select<D: CalendarDate>(&mut self, start: &D, end: &D) {
        let start = start.calendar_date().min(self.max_date);
        let end = end.calendar_date().min(self.max_date);
        self.selection = Some(DateRange::new(start, end));
    }

    pub fn clear(&mut self) {
        self.selection = None;
    }

    /// The selected range, or the two-year default when cleared.
    pub fn effective(&self) -> DateRange {
        self.selection
            .unwrap_or_else(|| DateRange::trailing_window(self.max_date))
    }
}
