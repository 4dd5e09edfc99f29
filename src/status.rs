use crate::locale::CalendarLocale;
use crate::schedule::{DayStatus, Roster};
use crate::theme::{
    status::{OFF_STYLE, WORKING_STYLE},
    BASE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};
use time::Date;

/// Number of lines taken up by the status bar
pub(crate) const STATUS_LINES: u16 = 3;

/// Today's roster status, followed by the anchor date and today's date
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct StatusBar<'a, L> {
    roster: Roster,
    today: Date,
    name: Option<&'a str>,
    locale: L,
}

impl<'a, L: CalendarLocale> StatusBar<'a, L> {
    pub(crate) fn new(roster: Roster, today: Date, name: Option<&'a str>, locale: L) -> Self {
        StatusBar {
            roster,
            today,
            name,
            locale,
        }
    }

    fn status(&self) -> DayStatus {
        self.roster.status(self.today)
    }
}

impl<L: CalendarLocale> Widget for StatusBar<'_, L> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status = self.status();
        let style = if status.is_work() {
            WORKING_STYLE
        } else {
            OFF_STYLE
        };
        let message = format!(" {} ", self.locale.status_message(status, self.name));
        Paragraph::new(Text::from_iter([
            Line::from(Span::styled(message, style)),
            Line::styled(self.locale.anchor_line(self.roster.anchor()), BASE_STYLE),
            Line::styled(self.locale.today_line(self.today), BASE_STYLE),
        ]))
        .centered()
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::buffer_lines;
    use crate::locale::PtBr;
    use time::macros::date;

    fn render(today: Date, name: Option<&str>) -> (Buffer, Vec<String>) {
        let roster = Roster::new(date!(2025 - 05 - 17));
        let area = Rect::new(0, 0, 60, STATUS_LINES);
        let mut buffer = Buffer::empty(area);
        StatusBar::new(roster, today, name, PtBr).render(area, &mut buffer);
        let lines = buffer_lines(&buffer);
        (buffer, lines)
    }

    #[test]
    fn test_working_today() {
        let (buffer, lines) = render(date!(2025 - 05 - 19), Some("Frank"));
        assert!(lines[0].contains("Sim, Frank está trabalhando hoje!"));
        assert_eq!(
            lines[1].trim(),
            "Último dia trabalhado: 17 de maio de 2025"
        );
        assert_eq!(lines[2].trim(), "Hoje: 19 de maio de 2025");
        let x = (0..60).find(|&x| buffer[(x, 0)].symbol() == "S").unwrap();
        assert_eq!(buffer[(x, 0)].bg, WORKING_STYLE.bg.unwrap());
    }

    #[test]
    fn test_off_today() {
        let (buffer, lines) = render(date!(2025 - 05 - 18), None);
        assert!(lines[0].contains("Não, hoje é dia de folga."));
        let x = (0..60).find(|&x| buffer[(x, 0)].symbol() == "N").unwrap();
        assert_eq!(buffer[(x, 0)].bg, OFF_STYLE.bg.unwrap());
    }
}
