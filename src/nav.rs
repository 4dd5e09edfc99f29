use crate::window::YearMonth;
use thiserror::Error;
use time::{Date, Duration};

const MONTHS_IN_YEAR: i32 = 12;

/// The date the month window is centered on.  Navigation never modifies a
/// `NavState` in place; each action produces a new one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NavState {
    center: Date,
}

impl NavState {
    pub(crate) fn new(center: Date) -> NavState {
        NavState { center }
    }

    pub(crate) fn center(self) -> Date {
        self.center
    }

    pub(crate) fn center_month(self) -> YearMonth {
        YearMonth::of(self.center)
    }

    pub(crate) fn shift_years(self, years: i32) -> Result<NavState, OutOfTimeError> {
        let months = years.checked_mul(MONTHS_IN_YEAR).ok_or(OutOfTimeError)?;
        self.shift_months(months)
    }

    /// Moves the center `months` months forwards (or backwards, if
    /// negative), keeping the day of the month.  A day that does not exist
    /// in the target month spills over into the following month, so that
    /// shifting 2024-02-29 by a year gives 2025-03-01.
    pub(crate) fn shift_months(self, months: i32) -> Result<NavState, OutOfTimeError> {
        let target = self
            .center_month()
            .add_months(months)
            .ok_or(OutOfTimeError)?;
        let first = target.first_day().ok_or(OutOfTimeError)?;
        let center = first
            .checked_add(Duration::days(i64::from(self.center.day()) - 1))
            .ok_or(OutOfTimeError)?;
        Ok(NavState { center })
    }
}

/// Guard around generation of the month window.  Generation is synchronous,
/// so the guard is only ever observed in the `Idle` state from outside a
/// pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum LoadPhase {
    #[default]
    Idle,
    Loading,
}

impl LoadPhase {
    pub(crate) fn begin(&mut self) -> Result<(), AlreadyLoadingError> {
        match self {
            LoadPhase::Idle => {
                *self = LoadPhase::Loading;
                Ok(())
            }
            LoadPhase::Loading => Err(AlreadyLoadingError),
        }
    }

    pub(crate) fn finish(&mut self) {
        *self = LoadPhase::Idle;
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("month window is already being generated")]
pub(crate) struct AlreadyLoadingError;
