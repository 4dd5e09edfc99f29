use super::grid::MonthGrid;
use super::widget::{block_height, week_line};
use crate::nav::{AlreadyLoadingError, LoadPhase, NavState, OutOfTimeError};
use crate::schedule::Roster;
use crate::window::{compute_window, YearMonth};
use std::num::NonZeroU16;
use thiserror::Error;
use time::Date;

/// Scrolling down to within this many lines of the bottom of the loaded
/// months loads more months
pub(crate) const EXTEND_THRESHOLD: usize = 4;

/// Scroll state of the multi-month view: the window of months currently
/// loaded, the line offset of the top of the viewport, and the navigation
/// center the window was generated around.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthPager {
    today: Date,
    roster: Roster,
    window_size: NonZeroU16,
    nav: NavState,
    phase: LoadPhase,
    months: Vec<MonthGrid>,
    offset: usize,
    // Height of the viewport as of the last render
    viewport: usize,
    // Date to scroll to the middle of the viewport at the next render, once
    // the viewport's height is known
    focus: Option<Date>,
}

impl MonthPager {
    pub(crate) fn new(today: Date, roster: Roster, window_size: NonZeroU16) -> MonthPager {
        let mut pager = MonthPager {
            today,
            roster,
            window_size,
            nav: NavState::new(today),
            phase: LoadPhase::Idle,
            months: Vec::new(),
            offset: 0,
            viewport: 0,
            focus: None,
        };
        pager.recenter(NavState::new(today));
        pager
    }

    pub(crate) fn start_date(mut self, date: Date) -> Self {
        self.recenter(NavState::new(date));
        self
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    pub(crate) fn roster(&self) -> Roster {
        self.roster
    }

    pub(crate) fn nav(&self) -> NavState {
        self.nav
    }

    pub(crate) fn months(&self) -> &[MonthGrid] {
        &self.months
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.recenter(NavState::new(self.today));
    }

    pub(crate) fn jump_to_date(&mut self, date: Date) {
        self.recenter(NavState::new(date));
    }

    pub(crate) fn prev_year(&mut self) -> Result<(), PagerError> {
        let nav = self.nav.shift_years(-1)?;
        self.recenter(nav);
        Ok(())
    }

    pub(crate) fn next_year(&mut self) -> Result<(), PagerError> {
        let nav = self.nav.shift_years(1)?;
        self.recenter(nav);
        Ok(())
    }

    pub(crate) fn scroll_down(&mut self, lines: usize) -> Result<(), PagerError> {
        let target = self.offset.saturating_add(lines);
        if target.saturating_add(self.viewport).saturating_add(EXTEND_THRESHOLD)
            >= self.total_lines()
        {
            if let Err(e) = self.extend_forward() {
                log::debug!("Not extending month window: {e}");
            }
        }
        let offset = target.min(self.max_offset());
        if offset == self.offset {
            return Err(PagerError::Bottom);
        }
        self.offset = offset;
        Ok(())
    }

    pub(crate) fn scroll_up(&mut self, lines: usize) -> Result<(), PagerError> {
        if self.offset == 0 {
            return Err(PagerError::Top);
        }
        self.offset = self.offset.saturating_sub(lines);
        Ok(())
    }

    pub(crate) fn page_down(&mut self) -> Result<(), PagerError> {
        self.scroll_down(self.viewport.max(1))
    }

    pub(crate) fn page_up(&mut self) -> Result<(), PagerError> {
        self.scroll_up(self.viewport.max(1))
    }

    /// Advances the navigation center by half a window and appends every
    /// month after the last loaded one up to the end of the resulting
    /// window.  Months already loaded and the scroll offset are left as they
    /// are.
    pub(crate) fn extend_forward(&mut self) -> Result<(), PagerError> {
        let step = i32::from((self.window_size.get() / 2).max(1));
        let nav = self.nav.shift_months(step)?;
        self.phase.begin()?;
        let before = self.months.len();
        let window = compute_window(nav.center_month(), self.window_size);
        match (self.months.last().map(MonthGrid::month), window.last()) {
            (Some(last), Some(&end)) => {
                // The center may spill over into a later month than `step`
                // suggests, so fill from the last loaded month rather than
                // from the start of the new window.
                let mut ym = last.next();
                while ym <= end {
                    let Some(grid) = MonthGrid::new(ym, &self.roster, self.today) else {
                        break;
                    };
                    self.months.push(grid);
                    ym = ym.next();
                }
            }
            _ => self.months = self.build_window(nav),
        }
        self.nav = nav;
        self.phase.finish();
        log::debug!(
            "Extended month window by {} months; center is now {}",
            self.months.len() - before,
            nav.center()
        );
        Ok(())
    }

    /// Replaces the loaded months with the window around `nav` and arranges
    /// for the center date to be scrolled into view
    fn recenter(&mut self, nav: NavState) {
        if let Err(e) = self.phase.begin() {
            log::warn!("Skipping month window generation: {e}");
            return;
        }
        self.months = self.build_window(nav);
        self.nav = nav;
        self.offset = 0;
        self.focus = Some(nav.center());
        self.phase.finish();
        log::debug!(
            "Loaded {} months around {}",
            self.months.len(),
            nav.center()
        );
    }

    fn build_window(&self, nav: NavState) -> Vec<MonthGrid> {
        compute_window(nav.center_month(), self.window_size)
            .into_iter()
            .filter_map(|ym| MonthGrid::new(ym, &self.roster, self.today))
            .collect()
    }

    /// Records the viewport height for the upcoming render and applies any
    /// pending focus
    pub(super) fn set_viewport(&mut self, height: usize) {
        self.viewport = height;
        if let Some(date) = self.focus.take() {
            if let Some(line) = self.line_of(date) {
                self.offset = line.saturating_sub(height / 2);
            }
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Line (relative to the top of the first loaded month) of the week row
    /// containing `date`
    pub(crate) fn line_of(&self, date: Date) -> Option<usize> {
        let target = YearMonth::of(date);
        let mut top = 0;
        for grid in &self.months {
            if grid.month() == target {
                return grid.week_of(date).map(|w| top + week_line(w));
            }
            top += block_height(grid);
        }
        None
    }

    pub(crate) fn total_lines(&self) -> usize {
        self.months.iter().map(block_height).sum()
    }

    fn max_offset(&self) -> usize {
        self.total_lines().saturating_sub(self.viewport)
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum PagerError {
    #[error(transparent)]
    OutOfTime(#[from] OutOfTimeError),
    #[error(transparent)]
    Busy(#[from] AlreadyLoadingError),
    #[error("already at the top of the loaded months")]
    Top,
    #[error("already at the bottom of the loaded months")]
    Bottom,
}
