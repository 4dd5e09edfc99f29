use crate::schedule::{DayStatus, Roster};
use crate::window::YearMonth;
use std::iter::successors;
use time::{Date, Weekday};

const DAYS_IN_WEEK: usize = 7;

pub(crate) trait WeekdayExt {
    fn index0(&self) -> u16;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u16 {
        self.number_days_from_sunday().into()
    }
}

/// One day of a month grid together with its roster status
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DayCell {
    pub(crate) date: Date,
    pub(crate) status: DayStatus,
    pub(crate) is_today: bool,
}

impl DayCell {
    pub(crate) fn day(&self) -> u8 {
        self.date.day()
    }

    /// Column of the cell in a Sunday-first week
    pub(crate) fn column(&self) -> u16 {
        self.date.weekday().index0()
    }

    /// The cell's date in `YYYY-MM-DD` form
    pub(crate) fn iso_date(&self) -> String {
        self.date.to_string()
    }

    pub(crate) fn show(&self) -> String {
        if self.is_today {
            format!("[{:2}]", self.day())
        } else {
            format!(" {:2} ", self.day())
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Week([Option<DayCell>; DAYS_IN_WEEK]);

impl Week {
    fn set(&mut self, cell: DayCell) {
        let i = usize::from(cell.column());
        if let Some(slot) = self.0.get_mut(i) {
            *slot = Some(cell);
        }
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = DayCell> + '_ {
        self.0.iter().flatten().copied()
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        self.cells().any(|c| c.date == date)
    }
}

/// A single month laid out for display: the number of empty cells before the
/// first day (so that day 1 lands under its weekday) followed by one cell per
/// day of the month
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid {
    month: YearMonth,
    leading_blanks: u8,
    days: Vec<DayCell>,
}

impl MonthGrid {
    /// Returns `None` if any part of the month cannot be represented as a
    /// date
    pub(crate) fn new(month: YearMonth, roster: &Roster, today: Date) -> Option<MonthGrid> {
        let first = month.first_day()?;
        let leading_blanks = month.first_weekday()?;
        let length = month.days_in_month()?;
        let days = successors(Some(first), |d| d.next_day())
            .take(usize::from(length))
            .map(|date| DayCell {
                date,
                status: roster.status(date),
                is_today: date == today,
            })
            .collect();
        Some(MonthGrid {
            month,
            leading_blanks,
            days,
        })
    }

    pub(crate) fn month(&self) -> YearMonth {
        self.month
    }

    pub(crate) fn days(&self) -> &[DayCell] {
        &self.days
    }

    pub(crate) fn week_count(&self) -> usize {
        (usize::from(self.leading_blanks) + self.days.len()).div_ceil(DAYS_IN_WEEK)
    }

    pub(crate) fn weeks(&self) -> Vec<Week> {
        let mut weeks = Vec::with_capacity(self.week_count());
        let mut current = Week::default();
        for &cell in &self.days {
            if cell.date.weekday() == Weekday::Sunday && current != Week::default() {
                weeks.push(std::mem::take(&mut current));
            }
            current.set(cell);
        }
        if current != Week::default() {
            weeks.push(current);
        }
        weeks
    }

    /// Index of the week row containing `date`, if the date is in this month
    pub(crate) fn week_of(&self, date: Date) -> Option<usize> {
        self.weeks().iter().position(|w| w.contains(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Month::*;

    const ROSTER: Roster = Roster::new(date!(2025 - 05 - 17));

    #[test]
    fn test_may_2025() {
        let grid =
            MonthGrid::new(YearMonth::new(2025, May), &ROSTER, date!(2025 - 05 - 20)).unwrap();
        assert_eq!(grid.leading_blanks, 4);
        assert_eq!(grid.days().len(), 31);
        assert_eq!(grid.week_count(), 5);
        let cell = grid.days()[16];
        assert_eq!(cell.date, date!(2025 - 05 - 17));
        assert_eq!(cell.status, DayStatus::Work);
        assert!(!cell.is_today);
        assert_eq!(grid.days()[17].status, DayStatus::Off);
        let today = grid.days()[19];
        assert!(today.is_today);
        assert_eq!(today.show(), "[20]");
        assert_eq!(grid.days()[0].show(), "  1 ");
        assert_eq!(grid.days().iter().filter(|c| c.is_today).count(), 1);
    }

    #[test]
    fn test_february_lengths() {
        let today = date!(2025 - 05 - 20);
        let feb25 = MonthGrid::new(YearMonth::new(2025, February), &ROSTER, today).unwrap();
        assert_eq!(feb25.days().len(), 28);
        let feb24 = MonthGrid::new(YearMonth::new(2024, February), &ROSTER, today).unwrap();
        assert_eq!(feb24.days().len(), 29);
        assert_eq!(feb24.days().last().unwrap().date, date!(2024 - 02 - 29));
        assert!(feb24.days().iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_leading_blanks_match_first_weekday() {
        let today = date!(2025 - 05 - 20);
        for year in [2023, 2024, 2025] {
            for m in 1..=12u8 {
                let ym = YearMonth::new(year, time::Month::try_from(m).unwrap());
                let grid = MonthGrid::new(ym, &ROSTER, today).unwrap();
                let first = grid.days()[0].date;
                assert_eq!(
                    grid.leading_blanks,
                    first.weekday().number_days_from_sunday()
                );
                assert_eq!(grid.weeks().len(), grid.week_count(), "{ym}");
            }
        }
    }

    #[test]
    fn test_weeks() {
        // June 2025 starts on a Sunday and ends on a Monday
        let grid =
            MonthGrid::new(YearMonth::new(2025, June), &ROSTER, date!(2025 - 05 - 20)).unwrap();
        assert_eq!(grid.leading_blanks, 0);
        let weeks = grid.weeks();
        assert_eq!(weeks.len(), 5);
        let first = weeks[0].cells().map(|c| c.day()).collect::<Vec<_>>();
        assert_eq!(first, [1, 2, 3, 4, 5, 6, 7]);
        let last = weeks[4].cells().map(|c| c.column()).collect::<Vec<_>>();
        assert_eq!(last, [0, 1]);
        assert_eq!(grid.week_of(date!(2025 - 06 - 15)), Some(2));
        assert_eq!(grid.week_of(date!(2025 - 07 - 01)), None);
    }

    #[test]
    fn test_iso_date() {
        let grid =
            MonthGrid::new(YearMonth::new(2025, March), &ROSTER, date!(2025 - 05 - 20)).unwrap();
        assert_eq!(grid.days()[16].iso_date(), "2025-03-17");
        assert_eq!(grid.days()[16].status, DayStatus::Off);
    }
}
