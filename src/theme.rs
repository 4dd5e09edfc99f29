use crate::schedule::DayStatus;
use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const WORKDAY_STYLE: Style = Style::new()
    .fg(Color::LightGreen)
    .bg(Color::Black)
    .add_modifier(Modifier::BOLD);

pub(crate) const OFFDAY_STYLE: Style = Style::new().fg(Color::LightRed).bg(Color::Black);

pub(crate) const TODAY_MODIFIER: Modifier = Modifier::REVERSED;

pub(crate) const MONTH_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const HINT_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) fn day_style(status: DayStatus, is_today: bool) -> Style {
    let style = match status {
        DayStatus::Work => WORKDAY_STYLE,
        DayStatus::Off => OFFDAY_STYLE,
    };
    if is_today {
        style.add_modifier(TODAY_MODIFIER)
    } else {
        style
    }
}

pub(crate) mod status {
    use super::*;

    pub(crate) const WORKING_STYLE: Style = Style::new()
        .fg(Color::Black)
        .bg(Color::LightGreen)
        .add_modifier(Modifier::BOLD);

    pub(crate) const OFF_STYLE: Style = Style::new()
        .fg(Color::Black)
        .bg(Color::LightRed)
        .add_modifier(Modifier::BOLD);
}

pub(crate) mod jumpto {
    use super::*;

    pub(crate) const UNFILLED_CELL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}
