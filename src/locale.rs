//! Display strings for calendar values.  The rest of the program works with
//! `Date`s and `YearMonth`s and hands them to a `CalendarLocale` only when
//! something has to be shown.

use crate::schedule::DayStatus;
use crate::window::YearMonth;
use time::{Date, Month};

pub(crate) trait CalendarLocale {
    /// Abbreviated weekday names, starting with Sunday
    fn weekday_abbrevs(&self) -> [&'static str; 7];

    fn month_name(&self, month: Month) -> &'static str;

    /// Title for a month block, e.g. "maio de 2025"
    fn month_title(&self, ym: YearMonth) -> String;

    /// Full date, e.g. "17 de maio de 2025"
    fn long_date(&self, date: Date) -> String;

    /// Line presenting the roster's anchor date
    fn anchor_line(&self, anchor: Date) -> String;

    /// Line presenting the current date
    fn today_line(&self, today: Date) -> String;

    /// Word marking the current date in a list of days
    fn today_marker(&self) -> &'static str;

    /// Message announcing whether today is a workday.  `name` is the person
    /// whose roster is shown, if configured.
    fn status_message(&self, status: DayStatus, name: Option<&str>) -> String;
}

/// Brazilian Portuguese
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct PtBr;

impl CalendarLocale for PtBr {
    fn weekday_abbrevs(&self) -> [&'static str; 7] {
        ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"]
    }

    fn month_name(&self, month: Month) -> &'static str {
        match month {
            Month::January => "janeiro",
            Month::February => "fevereiro",
            Month::March => "março",
            Month::April => "abril",
            Month::May => "maio",
            Month::June => "junho",
            Month::July => "julho",
            Month::August => "agosto",
            Month::September => "setembro",
            Month::October => "outubro",
            Month::November => "novembro",
            Month::December => "dezembro",
        }
    }

    fn month_title(&self, ym: YearMonth) -> String {
        format!("{} de {}", self.month_name(ym.month()), ym.year())
    }

    fn long_date(&self, date: Date) -> String {
        format!(
            "{} de {} de {}",
            date.day(),
            self.month_name(date.month()),
            date.year()
        )
    }

    fn anchor_line(&self, anchor: Date) -> String {
        format!("Último dia trabalhado: {}", self.long_date(anchor))
    }

    fn today_line(&self, today: Date) -> String {
        format!("Hoje: {}", self.long_date(today))
    }

    fn today_marker(&self) -> &'static str {
        "hoje"
    }

    fn status_message(&self, status: DayStatus, name: Option<&str>) -> String {
        match (status, name) {
            (DayStatus::Work, Some(name)) => format!("✅ Sim, {name} está trabalhando hoje!"),
            (DayStatus::Off, Some(name)) => format!("❌ Não, {name} está folgando hoje."),
            (DayStatus::Work, None) => String::from("✅ Sim, hoje é dia de trabalho!"),
            (DayStatus::Off, None) => String::from("❌ Não, hoje é dia de folga."),
        }
    }
}
