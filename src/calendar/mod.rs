mod grid;
mod pager;
mod widget;
pub(crate) use self::grid::{DayCell, MonthGrid};
pub(crate) use self::pager::{MonthPager, PagerError};
pub(crate) use self::widget::{buffer_lines, Calendar, MonthView, GRID_WIDTH};
