//! Non-interactive output: today's status and the current month as plain
//! text

use crate::calendar::{buffer_lines, DayCell, MonthGrid, MonthView, GRID_WIDTH};
use crate::locale::CalendarLocale;
use crate::schedule::Roster;
use crate::window::YearMonth;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use std::io::{self, Write};
use time::OffsetDateTime;

/// Lines taken by a month's title and weekday header
const MONTH_HEADER_LINES: usize = 2;

/// Writes the status message, the anchor and today lines, the grid of the
/// month containing `now`, and one line per day of that month
pub(crate) fn write_report<W: Write, L: CalendarLocale + Copy>(
    out: &mut W,
    roster: Roster,
    now: OffsetDateTime,
    name: Option<&str>,
    locale: L,
) -> io::Result<()> {
    let today = now.date();
    writeln!(
        out,
        "{}",
        locale.status_message(roster.status_at(now), name)
    )?;
    writeln!(out, "{}", locale.anchor_line(roster.anchor()))?;
    writeln!(out, "{}", locale.today_line(today))?;
    let Some(grid) = MonthGrid::new(YearMonth::of(today), &roster, today) else {
        log::warn!("Cannot lay out the month of {today}");
        return Ok(());
    };
    writeln!(out)?;
    let height = u16::try_from(MONTH_HEADER_LINES + grid.week_count()).unwrap_or(u16::MAX);
    let mut buffer = Buffer::empty(Rect::new(0, 0, GRID_WIDTH, height));
    MonthView::new(&grid, locale).render(buffer.area, &mut buffer);
    for line in buffer_lines(&buffer) {
        writeln!(out, "{}", line.trim_end())?;
    }
    writeln!(out)?;
    for cell in grid.days() {
        writeln!(out, "{}", day_line(cell, &locale))?;
    }
    Ok(())
}

fn day_line<L: CalendarLocale>(cell: &DayCell, locale: &L) -> String {
    let weekday = locale
        .weekday_abbrevs()
        .get(usize::from(cell.column()))
        .copied()
        .unwrap_or_default();
    let mut line = format!("{}  {weekday}  {}", cell.iso_date(), cell.status.label());
    if cell.is_today {
        line.push_str(" (");
        line.push_str(locale.today_marker());
        line.push(')');
    }
    line
}
