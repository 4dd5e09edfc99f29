use super::grid::MonthGrid;
use super::pager::MonthPager;
use crate::locale::CalendarLocale;
use crate::theme::{day_style, MONTH_STYLE, WEEKDAY_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Paragraph, StatefulWidget, Widget},
};

/// Width of a month grid in columns
pub(crate) const GRID_WIDTH: u16 = DAY_WIDTH * 7;

/// Number of columns per day of week
const DAY_WIDTH: u16 = 5;

/// Number of lines taken up by a month's title
const TITLE_LINES: usize = 1;

/// Number of lines taken up by the weekday header
const HEADER_LINES: usize = 1;

/// Blank lines after each month in the multi-month view
const SPACING_LINES: usize = 1;

/// Number of lines a month takes up in the multi-month view
pub(super) fn block_height(grid: &MonthGrid) -> usize {
    TITLE_LINES + HEADER_LINES + grid.week_count() + SPACING_LINES
}

/// Line, relative to the top of a month's block, of the month's `week`-th
/// week
pub(super) fn week_line(week: usize) -> usize {
    TITLE_LINES + HEADER_LINES + week
}

/// The scrollable stack of months
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Calendar<L> {
    locale: L,
}

impl<L> Calendar<L> {
    pub(crate) fn new(locale: L) -> Calendar<L> {
        Calendar { locale }
    }
}

impl<L: CalendarLocale> StatefulWidget for Calendar<L> {
    type State = MonthPager;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [area] = Layout::horizontal([GRID_WIDTH.min(area.width)])
            .flex(Flex::Center)
            .areas(area);
        state.set_viewport(area.height.into());
        let scroll = state.offset();
        let bottom = scroll + usize::from(area.height);
        let mut canvas = BufferCanvas::new(area, buf, scroll);
        let mut top = 0;
        for grid in state.months() {
            let height = block_height(grid);
            if top + height > scroll {
                canvas.draw_month(top, grid, &self.locale);
            }
            top += height;
            if top >= bottom {
                break;
            }
        }
    }
}

/// A single month, drawn from the top of its area
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthView<'a, L> {
    grid: &'a MonthGrid,
    locale: L,
}

impl<'a, L> MonthView<'a, L> {
    pub(crate) fn new(grid: &'a MonthGrid, locale: L) -> Self {
        MonthView { grid, locale }
    }
}

impl<L: CalendarLocale> Widget for MonthView<'_, L> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [area] = Layout::horizontal([GRID_WIDTH.min(area.width)])
            .flex(Flex::Center)
            .areas(area);
        BufferCanvas::new(area, buf, 0).draw_month(0, self.grid, &self.locale);
    }
}

/// The text of each line of `buf`
pub(crate) fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
    // Number of lines scrolled past; content lines above this are not drawn
    scroll: usize,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer, scroll: usize) -> Self {
        Self { area, buf, scroll }
    }

    // `top` is the line at which the month's title goes
    fn draw_month<L: CalendarLocale>(&mut self, top: usize, grid: &MonthGrid, locale: &L) {
        let title = locale.month_title(grid.month());
        let title_width = u16::try_from(Line::raw(title.as_str()).width()).unwrap_or(u16::MAX);
        self.mvprint(
            top,
            GRID_WIDTH.saturating_sub(title_width) / 2,
            title,
            Some(MONTH_STYLE),
        );
        let mut header = String::new();
        for wd in locale.weekday_abbrevs() {
            header.push(' ');
            header.push_str(wd);
            header.push(' ');
        }
        self.mvprint(top + TITLE_LINES, 0, header, Some(WEEKDAY_STYLE));
        for (i, week) in grid.weeks().iter().enumerate() {
            for cell in week.cells() {
                self.mvprint(
                    top + week_line(i),
                    DAY_WIDTH * cell.column(),
                    cell.show(),
                    Some(day_style(cell.status, cell.is_today)),
                );
            }
        }
    }

    fn mvprint<S: AsRef<str>>(&mut self, line: usize, x: u16, s: S, style: Option<Style>) {
        let Some(y) = line
            .checked_sub(self.scroll)
            .and_then(|y| u16::try_from(y).ok())
        else {
            return;
        };
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // area, though we need to be sure that the Rect passed to the
            // Paragraph is entirely within the frame lest a panic result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }
}
