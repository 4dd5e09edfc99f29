use crate::theme::{
    jumpto::{READY_ENTER_STYLE, UNFILLED_CELL_STYLE},
    BASE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Margin, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, StatefulWidget, Widget},
};
use time::{Date, Month};

const OUTER_WIDTH: u16 = 18;
const OUTER_HEIGHT: u16 = 8;

const DAY_DIGITS: usize = 2;
const MONTH_DIGITS: usize = 2;
const YEAR_DIGITS: usize = 4;
const ENTER_POS: usize = DAY_DIGITS + MONTH_DIGITS + YEAR_DIGITS;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct JumpTo;

impl StatefulWidget for JumpTo {
    type State = JumpToState;

    /*
     * ..................
     * .┌─ Ir para… ───┐.
     * .│              │.
     * .│  DD/MM/AAAA  │.
     * .│              │.
     * .│   [ENTER]    │.
     * .└──────────────┘.
     * ..................
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [outer_area] = Layout::horizontal([OUTER_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [outer_area] = Layout::vertical([OUTER_HEIGHT])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        let block_area = outer_area.inner(Margin::new(1, 1));
        Block::bordered()
            .title(" Ir para… ")
            .title_alignment(Alignment::Center)
            .render(block_area, buf);
        let text_area = block_area.inner(Margin::new(1, 1));
        state.to_text().render(text_area, buf);
    }
}

/// Digits typed so far into the jump-to dialog, in day, month, year order
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct JumpToState {
    digits: [Option<u8>; ENTER_POS],
    pos: usize,
}

impl JumpToState {
    pub(crate) fn new() -> JumpToState {
        JumpToState::default()
    }

    fn to_text(self) -> Text<'static> {
        Text::from_iter([
            Line::styled("", BASE_STYLE),
            self.to_line(),
            Line::styled("", BASE_STYLE),
            // Style a span and convert it to a line rather than creating a
            // styled line directly so that only the "[ENTER]" text and not any
            // of its centering padding will be underlined:
            Line::from(Span::styled(
                "[ENTER]",
                if self.pos == ENTER_POS {
                    READY_ENTER_STYLE
                } else {
                    BASE_STYLE
                },
            )),
        ])
        .centered()
    }

    fn to_line(self) -> Line<'static> {
        let mut spans = Vec::new();
        let fields = [
            ("D", &self.digits[..DAY_DIGITS]),
            ("M", &self.digits[DAY_DIGITS..DAY_DIGITS + MONTH_DIGITS]),
            ("A", &self.digits[DAY_DIGITS + MONTH_DIGITS..]),
        ];
        for (i, (fallback, digits)) in fields.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("/", BASE_STYLE));
            }
            for dg in digits {
                spans.push(match dg {
                    Some(d) => Span::styled(format!("{d}"), BASE_STYLE),
                    None => Span::styled(fallback, UNFILLED_CELL_STYLE),
                });
            }
        }
        Line::from_iter(spans)
    }

    pub(crate) fn handle_input(&mut self, input: JumpToInput) -> JumpToOutput {
        match (input, self.pos) {
            (JumpToInput::Digit(d), 0..ENTER_POS) if d < 10 => {
                self.digits[self.pos] = Some(d);
                self.pos += 1;
                JumpToOutput::Ok
            }
            (JumpToInput::Backspace, 1..) => {
                self.pos -= 1;
                self.digits[self.pos] = None;
                JumpToOutput::Ok
            }
            (JumpToInput::Enter, ENTER_POS) => match self.date() {
                Some(date) => JumpToOutput::Jump(date),
                None => JumpToOutput::Invalid,
            },
            _ => JumpToOutput::Invalid,
        }
    }

    // Returns `None` if a digit is missing or the digits do not form a real
    // date
    fn date(&self) -> Option<Date> {
        let day = number(&self.digits[..DAY_DIGITS])?;
        let month = number(&self.digits[DAY_DIGITS..DAY_DIGITS + MONTH_DIGITS])?;
        let year = number(&self.digits[DAY_DIGITS + MONTH_DIGITS..])?;
        let month = Month::try_from(u8::try_from(month).ok()?).ok()?;
        Date::from_calendar_date(i32::from(year), month, u8::try_from(day).ok()?).ok()
    }
}

fn number(digits: &[Option<u8>]) -> Option<u16> {
    digits
        .iter()
        .try_fold(0u16, |acc, &d| Some(acc * 10 + u16::from(d?)))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToInput {
    Digit(u8),
    Backspace,
    Enter,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToOutput {
    Ok,
    Invalid,
    Jump(Date),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::buffer_lines;
    use time::macros::date;

    fn type_digits(state: &mut JumpToState, digits: &str) {
        for c in digits.chars() {
            let d = c.to_digit(10).unwrap();
            let output = state.handle_input(JumpToInput::Digit(u8::try_from(d).unwrap()));
            assert_eq!(output, JumpToOutput::Ok);
        }
    }

    #[test]
    fn test_jump() {
        let mut state = JumpToState::new();
        type_digits(&mut state, "31121999");
        assert_eq!(
            state.handle_input(JumpToInput::Digit(1)),
            JumpToOutput::Invalid
        );
        assert_eq!(
            state.handle_input(JumpToInput::Enter),
            JumpToOutput::Jump(date!(1999 - 12 - 31))
        );
    }

    #[test]
    fn test_enter_too_early() {
        let mut state = JumpToState::new();
        type_digits(&mut state, "1705202");
        assert_eq!(state.handle_input(JumpToInput::Enter), JumpToOutput::Invalid);
        type_digits(&mut state, "5");
        assert_eq!(
            state.handle_input(JumpToInput::Enter),
            JumpToOutput::Jump(date!(2025 - 05 - 17))
        );
    }

    #[test]
    fn test_nonexistent_date() {
        let mut state = JumpToState::new();
        type_digits(&mut state, "29022025");
        assert_eq!(state.handle_input(JumpToInput::Enter), JumpToOutput::Invalid);
        let mut state = JumpToState::new();
        type_digits(&mut state, "01132025");
        assert_eq!(state.handle_input(JumpToInput::Enter), JumpToOutput::Invalid);
    }

    #[test]
    fn test_backspace() {
        let mut state = JumpToState::new();
        assert_eq!(
            state.handle_input(JumpToInput::Backspace),
            JumpToOutput::Invalid
        );
        type_digits(&mut state, "2902");
        assert_eq!(state.handle_input(JumpToInput::Backspace), JumpToOutput::Ok);
        assert_eq!(state.handle_input(JumpToInput::Backspace), JumpToOutput::Ok);
        type_digits(&mut state, "032024");
        assert_eq!(
            state.handle_input(JumpToInput::Enter),
            JumpToOutput::Jump(date!(2024 - 03 - 29))
        );
    }

    #[test]
    fn test_render() {
        let mut state = JumpToState::new();
        type_digits(&mut state, "170");
        let area = Rect::new(0, 0, 20, 8);
        let mut buffer = Buffer::empty(area);
        JumpTo.render(area, &mut buffer, &mut state);
        let lines = buffer_lines(&buffer);
        assert!(lines[1].contains("Ir para…"), "{:?}", lines[1]);
        assert!(lines[3].contains("17/0M/AAAA"), "{:?}", lines[3]);
        assert!(lines[5].contains("[ENTER]"));
    }
}
