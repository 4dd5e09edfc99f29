use time::{Date, OffsetDateTime};

/// Whether a given day is a day on duty or a day off
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum DayStatus {
    Work,
    Off,
}

impl DayStatus {
    pub(crate) fn is_work(self) -> bool {
        self == DayStatus::Work
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            DayStatus::Work => "trabalho",
            DayStatus::Off => "folga",
        }
    }
}

/// An alternating-day duty roster: every other calendar day, counted from the
/// anchor date, is a workday.  Weekends play no part.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Roster {
    anchor: Date,
}

impl Roster {
    pub(crate) const fn new(anchor: Date) -> Roster {
        Roster { anchor }
    }

    pub(crate) fn anchor(&self) -> Date {
        self.anchor
    }

    pub(crate) fn is_working(&self, date: Date) -> bool {
        // `whole_days()` is an i64, so every pair of representable dates fits.
        // `rem_euclid` keeps the parity right for dates before the anchor.
        (date - self.anchor).whole_days().rem_euclid(2) == 0
    }

    pub(crate) fn status(&self, date: Date) -> DayStatus {
        if self.is_working(date) {
            DayStatus::Work
        } else {
            DayStatus::Off
        }
    }

    /// Status of the calendar day containing `instant`, as seen in the
    /// instant's own UTC offset (i.e., after truncating to local midnight)
    pub(crate) fn status_at(&self, instant: OffsetDateTime) -> DayStatus {
        self.status(instant.date())
    }
}
