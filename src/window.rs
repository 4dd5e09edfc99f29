use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU16;
use time::{Date, Month, Month::*};

const MONTHS_IN_YEAR: i32 = 12;

/// A calendar month of a specific year
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    pub(crate) fn new(year: i32, month: Month) -> YearMonth {
        YearMonth { year, month }
    }

    pub(crate) fn of(date: Date) -> YearMonth {
        YearMonth::new(date.year(), date.month())
    }

    pub(crate) fn year(self) -> i32 {
        self.year
    }

    pub(crate) fn month(self) -> Month {
        self.month
    }

    /// Zero-based month index (January = 0)
    pub(crate) fn index0(self) -> i32 {
        i32::from(u8::from(self.month)) - 1
    }

    /// Returns `None` if the month lies outside the range of representable
    /// dates
    pub(crate) fn first_day(self) -> Option<Date> {
        Date::from_calendar_date(self.year, self.month, 1).ok()
    }

    pub(crate) fn next(self) -> YearMonth {
        match self.month {
            December => YearMonth::new(self.year + 1, January),
            m => YearMonth::new(self.year, m.next()),
        }
    }

    /// The month `n` months after this one (before it, if `n` is negative).
    /// Returns `None` on arithmetic overflow.
    pub(crate) fn add_months(self, n: i32) -> Option<YearMonth> {
        let serial = self
            .year
            .checked_mul(MONTHS_IN_YEAR)?
            .checked_add(self.index0())?
            .checked_add(n)?;
        Some(YearMonth::new(
            serial.div_euclid(MONTHS_IN_YEAR),
            month_from_index0(serial),
        ))
    }

    /// Number of days in the month, found as "day zero" of the following
    /// month, i.e., the day before the next month's first day
    pub(crate) fn days_in_month(self) -> Option<u8> {
        match self.next().first_day() {
            Some(next) => next.previous_day().map(Date::day),
            // Only the last month of time, which is always a December, has
            // no following month.
            None => self.first_day().map(|_| 31),
        }
    }

    /// Weekday of the month's first day as a number of days from Sunday
    /// (0-6)
    pub(crate) fn first_weekday(self) -> Option<u8> {
        self.first_day()
            .map(|d| d.weekday().number_days_from_sunday())
    }
}

impl Ord for YearMonth {
    fn cmp(&self, other: &YearMonth) -> Ordering {
        (self.year, self.index0()).cmp(&(other.year, other.index0()))
    }
}

impl PartialOrd for YearMonth {
    fn partial_cmp(&self, other: &YearMonth) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, u8::from(self.month))
    }
}

/// Computes the `size` consecutive months centered on `center`, with the
/// center falling at index `size / 2`
pub(crate) fn compute_window(center: YearMonth, size: NonZeroU16) -> Vec<YearMonth> {
    let half = i32::from(size.get() / 2);
    let start_raw = center.index0() - half;
    let start_year = center.year + start_raw.div_euclid(MONTHS_IN_YEAR);
    let start_month = start_raw.rem_euclid(MONTHS_IN_YEAR);
    (0..size.get())
        .map(|i| {
            let m = start_month + i32::from(i);
            YearMonth::new(
                start_year + m.div_euclid(MONTHS_IN_YEAR),
                month_from_index0(m),
            )
        })
        .collect()
}

fn month_from_index0(i: i32) -> Month {
    match i.rem_euclid(MONTHS_IN_YEAR) {
        0 => January,
        1 => February,
        2 => March,
        3 => April,
        4 => May,
        5 => June,
        6 => July,
        7 => August,
        8 => September,
        9 => October,
        10 => November,
        _ => December,
    }
}
