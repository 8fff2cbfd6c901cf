use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, widget_rows};
use crate::ui::password::{Feedback, PasswordWidgetState};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, SECRET_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.spec()), header);

    for (idx, row) in widget_rows(body, app.widgets().len()).into_iter().enumerate() {
        let state = &app.widgets()[idx];
        frame.render_widget(widget_row(state, idx, idx == app.focused()), row);
    }

    frame.render_widget(Footer::new().widget(footer), footer);
}

/// One password widget: the secret as text plus the regenerate and copy
/// cells, whose glyphs follow the feedback fields.
fn widget_row(state: &PasswordWidgetState, idx: usize, focused: bool) -> Paragraph<'static> {
    let secret_style = Style::default().fg(SECRET_TEXT);
    let line = Line::from(vec![
        Span::styled(format!(" {}", state.password), secret_style),
        Span::raw("  "),
        regen_cell(state.regen),
        Span::raw(" "),
        copy_cell(state.copy),
    ]);

    let border_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    };
    let title = format!(" password {} ", idx + 1);

    Paragraph::new(line).block(
        Block::default()
            .title(Span::styled(title, Style::default().fg(HEADER_TEXT)))
            .borders(Borders::ALL)
            .border_style(border_style),
    )
}

/// Regenerate feedback: neutral glyph except on success. `Trying` never
/// shows up on screen (regeneration completes within one reduction) and
/// `Failure` is unreachable for this field.
fn regen_cell(feedback: Feedback) -> Span<'static> {
    match feedback {
        Feedback::Success => Span::styled("[✓]", Style::default().fg(STATUS_OK)),
        _ => Span::styled("[↻]", Style::default().fg(HEADER_TEXT)),
    }
}

/// Copy feedback: neutral while idle or in flight, then the outcome.
fn copy_cell(feedback: Feedback) -> Span<'static> {
    match feedback {
        Feedback::Success => Span::styled("[✓]", Style::default().fg(STATUS_OK)),
        Feedback::Failure => Span::styled(
            "[✗]",
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        ),
        Feedback::Idle | Feedback::Trying => Span::styled("[⧉]", Style::default().fg(HEADER_TEXT)),
    }
}
