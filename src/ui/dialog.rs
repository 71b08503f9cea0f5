use super::centered_rect_fixed;
use crate::model::Dialog;
use edtui::{EditorTheme, EditorView};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::Widget,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the add/edit prompt as a modal over the board
pub fn render_dialog(frame: &mut Frame, dialog: &mut Dialog) {
    let area = centered_rect_fixed(60, 7, frame.area());
    let color = Color::Yellow;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            dialog.kind.title(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Prompt
            Constraint::Min(1),    // Editor
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(dialog.kind.prompt(), Style::default().fg(Color::Gray))),
        chunks[0],
    );

    let theme = EditorTheme::default()
        .base(Style::default().fg(Color::White))
        .cursor_style(Style::default().bg(color).fg(Color::Black));
    EditorView::new(&mut dialog.editor_state)
        .wrap(true)
        .theme(theme)
        .render(chunks[1], frame.buffer_mut());

    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::DarkGray);
    let hints = Line::from(vec![
        Span::styled("⏎", key_style),
        Span::styled(" OK  ", desc_style),
        Span::styled("Esc", key_style),
        Span::styled(" Cancel", desc_style),
    ]);
    frame.render_widget(Paragraph::new(hints).alignment(ratatui::layout::Alignment::Right), chunks[2]);
}
