use crate::calendar::{Calendar, MonthGrid, MonthPager, MonthView, PagerError, GRID_WIDTH};
use crate::help::{Help, KeyHints};
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::locale::PtBr;
use crate::status::{StatusBar, STATUS_LINES};
use crate::theme::BASE_STYLE;
use crate::window::YearMonth;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

/// Minimum terminal width at which the current month is shown beside the
/// scrolling calendar
const SPLIT_MIN_WIDTH: u16 = 2 * PANEL_WIDTH + 2;

/// Width of a bordered month panel
const PANEL_WIDTH: u16 = GRID_WIDTH + 2;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    pager: MonthPager,
    name: Option<String>,
    state: AppState,
}

impl App {
    pub(crate) fn new(pager: MonthPager, name: Option<String>) -> App {
        App {
            pager,
            name,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key or the requested
    // movement was not possible
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Calendar => match key {
                KeyCode::Char('j') | KeyCode::Down => report(self.pager.scroll_down(1)),
                KeyCode::Char('k') | KeyCode::Up => report(self.pager.scroll_up(1)),
                KeyCode::Char('z') | KeyCode::PageDown => report(self.pager.page_down()),
                KeyCode::Char('w') | KeyCode::PageUp => report(self.pager.page_up()),
                KeyCode::Char('t' | '0') | KeyCode::Home => {
                    log::debug!("Jumping to today");
                    self.pager.jump_to_today();
                    true
                }
                KeyCode::Char('p' | '[') => report(self.pager.prev_year()),
                KeyCode::Char('n' | ']') => report(self.pager.next_year()),
                KeyCode::Char('g') => {
                    self.state = AppState::Jumping(JumpToState::new());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Jumping(state) => {
                if matches!(key, KeyCode::Char('q' | 'g') | KeyCode::Esc) {
                    self.state = AppState::Calendar;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char(c) => match c.to_digit(10).map(u8::try_from) {
                            Some(Ok(d)) => state.handle_input(JumpToInput::Digit(d)),
                            _ => JumpToOutput::Invalid,
                        },
                        KeyCode::Backspace | KeyCode::Delete => {
                            state.handle_input(JumpToInput::Backspace)
                        }
                        KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                        _ => JumpToOutput::Invalid,
                    };
                    match output {
                        JumpToOutput::Ok => true,
                        JumpToOutput::Invalid => false,
                        JumpToOutput::Jump(date) => {
                            log::debug!("Jumping to {date}");
                            self.state = AppState::Calendar;
                            self.pager.jump_to_date(date);
                            true
                        }
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

fn report(r: Result<(), PagerError>) -> bool {
    match r {
        Ok(()) => true,
        Err(e) => {
            log::trace!("Navigation refused: {e}");
            false
        }
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [status_area, body_area, hints_area] = Layout::vertical([
            Constraint::Length(STATUS_LINES),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        let today = self.pager.today();
        StatusBar::new(self.pager.roster(), today, self.name.as_deref(), PtBr)
            .render(status_area, buf);
        let calendar_area = if body_area.width >= SPLIT_MIN_WIDTH {
            let [current_area, calendar_area] =
                Layout::horizontal([Constraint::Length(PANEL_WIDTH), Constraint::Min(0)])
                    .areas(body_area);
            let block = Block::bordered().title(" Mês atual ");
            let inner = block.inner(current_area);
            block.render(current_area, buf);
            if let Some(grid) = MonthGrid::new(YearMonth::of(today), &self.pager.roster(), today)
            {
                MonthView::new(&grid, PtBr).render(inner, buf);
            }
            calendar_area
        } else {
            body_area
        };
        let block =
            Block::bordered().title(format!(" Calendário {} ", self.pager.nav().center().year()));
        let inner = block.inner(calendar_area);
        block.render(calendar_area, buf);
        Calendar::new(PtBr).render(inner, buf, &mut self.pager);
        KeyHints.render(hints_area, buf);
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        } else if let AppState::Jumping(ref mut state) = self.state {
            JumpTo.render(area, buf, state);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Jumping(JumpToState),
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::buffer_lines;
    use crate::schedule::Roster;
    use std::num::NonZeroU16;
    use time::macros::date;

    fn app(today: time::Date) -> App {
        let pager = MonthPager::new(
            today,
            Roster::new(date!(2025 - 05 - 17)),
            NonZeroU16::new(24).unwrap(),
        );
        App::new(pager, Some(String::from("Frank")))
    }

    fn render(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        buffer_lines(&buffer)
    }

    #[test]
    fn test_layout_wide() {
        let mut app = app(date!(2025 - 05 - 20));
        let lines = render(&mut app, 100, 24);
        assert!(lines[0].contains("Não, Frank está folgando hoje."));
        assert!(lines[1].contains("Último dia trabalhado: 17 de maio de 2025"));
        assert!(lines[2].contains("Hoje: 20 de maio de 2025"));
        assert!(lines[3].starts_with("┌ Mês atual "));
        assert!(lines[3].contains("┌ Calendário "));
        assert!(lines[4].contains("maio de 2025"));
        assert!(lines[23].contains("q sair"));
        // The week containing today is centered in the scrolling calendar
        assert!(lines[13].contains("[20]"));
        assert_eq!(lines.iter().filter(|l| l.contains("[20]")).count(), 2);
    }

    #[test]
    fn test_layout_narrow() {
        let mut app = app(date!(2025 - 05 - 20));
        let lines = render(&mut app, 60, 24);
        assert!(!lines[3].contains("Mês atual"));
        assert!(lines[3].starts_with("┌ Calendário "));
        assert_eq!(lines.iter().filter(|l| l.contains("[20]")).count(), 1);
    }

    #[test]
    fn test_year_keys() {
        let mut app = app(date!(2025 - 05 - 20));
        assert!(app.handle_key(KeyCode::Char('n')));
        assert_eq!(app.pager.nav().center(), date!(2026 - 05 - 20));
        assert!(app.handle_key(KeyCode::Char('[')));
        assert!(app.handle_key(KeyCode::Char('p')));
        assert_eq!(app.pager.nav().center(), date!(2024 - 05 - 20));
        assert!(app.handle_key(KeyCode::Home));
        assert_eq!(app.pager.nav().center(), date!(2025 - 05 - 20));
    }

    #[test]
    fn test_invalid_key() {
        let mut app = app(date!(2025 - 05 - 20));
        assert!(!app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.state, AppState::Calendar);
    }

    #[test]
    fn test_scroll_keys() {
        let mut app = app(date!(2025 - 05 - 20));
        render(&mut app, 100, 24);
        let offset = app.pager.offset();
        assert!(app.handle_key(KeyCode::Char('j')));
        assert_eq!(app.pager.offset(), offset + 1);
        assert!(app.handle_key(KeyCode::Up));
        assert_eq!(app.pager.offset(), offset);
        assert!(app.handle_key(KeyCode::PageDown));
        assert!(app.pager.offset() > offset + 1);
    }

    #[test]
    fn test_jump_to() {
        let mut app = app(date!(2025 - 05 - 20));
        assert!(app.handle_key(KeyCode::Char('g')));
        for c in "2512203".chars() {
            assert!(app.handle_key(KeyCode::Char(c)));
        }
        assert!(!app.handle_key(KeyCode::Char('x')));
        assert!(!app.handle_key(KeyCode::Enter));
        assert!(app.handle_key(KeyCode::Char('0')));
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Calendar);
        assert_eq!(app.pager.nav().center(), date!(2030 - 12 - 25));
    }

    #[test]
    fn test_help_and_quit() {
        let mut app = app(date!(2025 - 05 - 20));
        assert!(app.handle_key(KeyCode::Char('?')));
        assert_eq!(app.state, AppState::Helping);
        let lines = render(&mut app, 100, 24);
        assert!(lines.iter().any(|l| l.contains(" Comandos ")));
        assert!(app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.state, AppState::Calendar);
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.quitting());
    }
}
