use crate::theme::HINT_STYLE;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Binding {
    keys: &'static str,
    description: &'static str,
    // Short form shown in the hint line at the bottom of the screen
    hint: Option<&'static str>,
}

static BINDINGS: &[Binding] = &[
    Binding {
        keys: "j, DOWN",
        description: "Descer uma linha",
        hint: None,
    },
    Binding {
        keys: "k, UP",
        description: "Subir uma linha",
        hint: None,
    },
    Binding {
        keys: "z, PAGE DOWN",
        description: "Descer uma página",
        hint: None,
    },
    Binding {
        keys: "w, PAGE UP",
        description: "Subir uma página",
        hint: None,
    },
    Binding {
        keys: "t, 0, HOME",
        description: "Ir para hoje",
        hint: Some("t hoje"),
    },
    Binding {
        keys: "p, [",
        description: "Ano anterior",
        hint: Some("p ano anterior"),
    },
    Binding {
        keys: "n, ]",
        description: "Próximo ano",
        hint: Some("n próximo ano"),
    },
    Binding {
        keys: "g",
        description: "Ir para uma data",
        hint: Some("g ir para"),
    },
    Binding {
        keys: "?",
        description: "Mostrar esta ajuda",
        hint: Some("? ajuda"),
    },
    Binding {
        keys: "q, ESC",
        description: "Sair",
        hint: Some("q sair"),
    },
];

const KEYS_COLUMN_WIDTH: usize = 16;

static DISMISS: &str = "Pressione qualquer tecla para fechar.";

/// Pop-up listing all key bindings
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = BINDINGS
            .iter()
            .map(|b| Line::raw(format!("{:KEYS_COLUMN_WIDTH$}{}", b.keys, b.description)))
            .collect::<Vec<_>>();
        lines.push(Line::raw(""));
        lines.push(Line::raw(DISMISS));
        let text = Text::from(lines);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .min(area.height)
            .saturating_add(2);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .min(area.width)
            .saturating_add(2);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(help_area);
        // Leave a column of padding on either side of the box
        let outer_area = Rect {
            x: help_area.x.saturating_sub(1),
            y: help_area.y,
            width: help_area.width.saturating_add(2),
            height: help_area.height,
        };
        Clear.render(outer_area, buf);
        Block::new().style(self.0).render(outer_area, buf);
        Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Comandos ")
                    .title_alignment(Alignment::Center),
            )
            .style(self.0)
            .render(help_area, buf);
    }
}

/// One-line summary of the main key bindings
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct KeyHints;

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for hint in BINDINGS.iter().filter_map(|b| b.hint) {
            if !spans.is_empty() {
                spans.push(Span::styled(" · ", HINT_STYLE));
            }
            spans.push(Span::styled(hint, HINT_STYLE));
        }
        Paragraph::new(Line::from(spans))
            .centered()
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::buffer_lines;
    use crate::theme::BASE_STYLE;

    #[test]
    fn test_help_box() {
        let area = Rect::new(0, 0, 60, 16);
        let mut buffer = Buffer::empty(area);
        Help(BASE_STYLE).render(area, &mut buffer);
        let lines = buffer_lines(&buffer);
        assert!(lines[1].contains("─ Comandos ─"), "{:?}", lines[1]);
        assert!(lines[2].contains("│j, DOWN         Descer uma linha"));
        assert!(lines[11].contains("│q, ESC          Sair"));
        assert!(lines[13].contains("│Pressione qualquer tecla para fechar.│"));
    }

    #[test]
    fn test_key_hints() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buffer = Buffer::empty(area);
        KeyHints.render(area, &mut buffer);
        assert_eq!(
            buffer_lines(&buffer)[0].trim(),
            "t hoje · p ano anterior · n próximo ano · g ir para · ? ajuda · q sair"
        );
    }
}
