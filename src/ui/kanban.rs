use super::layout::{scroll_offset, BoardLayout};
use crate::app::App;
use crate::model::{DropTarget, TaskColumn};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the three columns and the trash zone
pub fn render_kanban(frame: &mut Frame, layout: &BoardLayout, app: &App) {
    for column in TaskColumn::all() {
        render_column(frame, layout, app, column);
    }
    render_trash(frame, layout.trash, app);
}

/// (accent color, contrasting foreground for the selected item)
fn column_colors(column: TaskColumn) -> (Color, Color) {
    match column {
        TaskColumn::Planned => (Color::Blue, Color::White),
        TaskColumn::InProgress => (Color::Yellow, Color::Black),
        TaskColumn::Done => (Color::Green, Color::Black),
    }
}

fn render_column(frame: &mut Frame, layout: &BoardLayout, app: &App, column: TaskColumn) {
    let ui = &app.model.ui_state;
    let area = layout.column(column);
    let (color, contrast_fg) = column_colors(column);

    let is_selected = ui.selected_column == column && !ui.is_dialog_open();
    let drag = ui.drag.as_ref();
    let is_drop_target = drag.is_some_and(|d| d.is_hovering(DropTarget::column(column)));
    let is_drag_source = drag.is_some_and(|d| d.source == column);

    let border_style = if is_drop_target {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if is_selected {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let tasks = app.model.board.tasks(column);
    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", column.label()),
                if is_selected {
                    Style::default().fg(color).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                },
            ),
            Span::styled(format!("({}) ", tasks.len()), Style::default().fg(Color::DarkGray)),
        ]))
        .borders(Borders::ALL)
        .border_style(border_style);

    let rows = area.rows();
    let selected_row = app.model.selected_row(column);
    let offset = scroll_offset(selected_row, rows.height as usize);
    let max_width = rows.width as usize;

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .skip(offset)
        .take(rows.height as usize)
        .map(|(idx, task)| {
            let is_task_selected = selected_row == Some(idx) && (is_selected || is_drag_source);
            let style = if is_task_selected && is_drag_source {
                // The task being carried
                Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM | Modifier::ITALIC)
            } else if is_task_selected {
                Style::default().bg(color).fg(contrast_fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(truncate(task, max_width), style)))
        })
        .collect();

    let list = if items.is_empty() {
        List::new(vec![ListItem::new(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))])
    } else {
        List::new(items)
    };

    frame.render_widget(list.block(block), area.list);

    let button = Paragraph::new(Line::from(vec![
        Span::styled("[+] ", Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(format!("{} 할 일 추가", column.label()), Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(button, area.add_button);
}

fn render_trash(frame: &mut Frame, area: Rect, app: &App) {
    let drag = app.model.ui_state.drag.as_ref();
    let is_hovered = drag.is_some_and(|d| d.is_hovering(DropTarget::Trash));

    let (border_style, text_style) = if is_hovered {
        (
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else if drag.is_some() {
        (Style::default().fg(Color::Red), Style::default().fg(Color::Red))
    } else {
        (Style::default().fg(Color::DarkGray), Style::default().fg(Color::DarkGray))
    };

    let trash = Paragraph::new(Span::styled(" 🗑 Trash ", text_style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(trash, area);
}

/// Cut a task title to fit a row, marking the cut with an ellipsis
fn truncate(text: &str, max_width: usize) -> String {
    let first_line = text.lines().next().unwrap_or("");
    let multiline = text.contains('\n');
    let char_count = first_line.chars().count();

    if char_count <= max_width && !multiline {
        first_line.to_string()
    } else if max_width == 0 {
        String::new()
    } else {
        let kept: String = first_line.chars().take(max_width.saturating_sub(1).min(char_count)).collect();
        format!("{kept}…")
    }
}
