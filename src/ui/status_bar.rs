use crate::app::App;
use crate::model::{DropTarget, TaskColumn};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar: a status message, the drag in progress, or key hints
pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let ui = &app.model.ui_state;

    if let Some(ref msg) = ui.status_message {
        let status = Paragraph::new(Span::styled(
            format!(" {} ", msg),
            Style::default().fg(Color::White).bg(Color::Blue),
        ));
        frame.render_widget(status, area);
        return;
    }

    if let Some(ref drag) = ui.drag {
        let target = match drag.hover {
            Some(DropTarget::Trash) => "trash".to_string(),
            Some(DropTarget::Column { column, .. }) => column.label().to_string(),
            None => "nothing".to_string(),
        };
        let line = Line::from(vec![
            Span::styled(" Moving ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::styled(format!(" \"{}\" ", drag.payload), Style::default().fg(Color::White)),
            Span::styled("→ ", Style::default().fg(Color::DarkGray)),
            Span::styled(target, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled("   h/l target  ⏎ drop  Esc cancel", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(24)])
        .split(area);

    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::DarkGray);
    let hints = Line::from(vec![
        Span::styled(" a", key_style),
        Span::styled(" add  ", desc_style),
        Span::styled("e", key_style),
        Span::styled(" edit  ", desc_style),
        Span::styled("m", key_style),
        Span::styled(" move  ", desc_style),
        Span::styled("d", key_style),
        Span::styled(" trash  ", desc_style),
        Span::styled("?", key_style),
        Span::styled(" help  ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit", desc_style),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[0]);

    let board = app.board();
    let summary = Line::from(
        TaskColumn::all()
            .iter()
            .map(|&c| Span::styled(format!("{} ", board.len(c)), desc_style))
            .chain(std::iter::once(Span::styled(
                format!("/ {} tasks ", board.total()),
                desc_style,
            )))
            .collect::<Vec<_>>(),
    );
    frame.render_widget(
        Paragraph::new(summary).alignment(ratatui::layout::Alignment::Right),
        chunks[1],
    );
}
