use crate::generator::PasswordSpec;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, spec: &PasswordSpec) -> Paragraph<'static> {
        let mut classes = String::from("letters");
        if spec.numbers {
            classes.push_str(" + digits");
        }
        if spec.symbols {
            classes.push_str(" + symbols");
        }

        let line = Line::from(vec![
            Span::styled(
                " passforge ",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("│ ", Style::default().fg(GLOBAL_BORDER)),
            Span::styled(
                format!("length {} │ {}", spec.length, classes),
                Style::default().fg(HEADER_TEXT),
            ),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
