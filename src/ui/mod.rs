mod dialog;
mod kanban;
pub mod layout;
mod status_bar;

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub use dialog::render_dialog;
pub use kanban::render_kanban;
pub use layout::BoardLayout;
pub use status_bar::render_status_bar;

/// Main view function - renders the entire UI
pub fn view(frame: &mut Frame, app: &mut App) {
    // Guard against extremely small terminals to prevent panics
    if frame.area().width < 30 || frame.area().height < 12 {
        let msg = Paragraph::new("Terminal too small").style(Style::default().fg(Color::Red));
        frame.render_widget(msg, frame.area());
        return;
    }

    let layout = BoardLayout::new(frame.area());

    render_header(frame, layout.header);
    render_kanban(frame, &layout, app);
    render_status_bar(frame, layout.status, app);

    if app.model.ui_state.show_help {
        render_help(frame);
    }

    if let Some(dialog) = app.model.ui_state.dialog.as_mut() {
        render_dialog(frame, dialog);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" To Do Board ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled(crate::store::DEFAULT_FILE_NAME, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_help(frame: &mut Frame) {
    let help_text = vec![
        Line::from(Span::styled(
            "To Do Board Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![Span::styled("Navigation", Style::default().add_modifier(Modifier::UNDERLINED))]),
        Line::from("  h/l        Move left/right between columns"),
        Line::from("  j/k        Move down/up within column"),
        Line::from("  g/G        Jump to first/last task"),
        Line::from(""),
        Line::from(vec![Span::styled("Task Actions", Style::default().add_modifier(Modifier::UNDERLINED))]),
        Line::from("  a          Add task to column"),
        Line::from("  e/Enter    Edit task"),
        Line::from("  +/-        Reorder task up/down"),
        Line::from("  H/L        Send task to the column on the left/right"),
        Line::from("  d/Del      Drop task in the trash"),
        Line::from(""),
        Line::from(vec![Span::styled("Drag & Drop", Style::default().add_modifier(Modifier::UNDERLINED))]),
        Line::from("  m/Space    Pick up task"),
        Line::from("  h/l        Choose target column or trash"),
        Line::from("  t          Target the trash"),
        Line::from("  Enter      Drop"),
        Line::from("  Esc        Cancel"),
        Line::from("  Mouse      Drag a task onto a column or the trash"),
        Line::from("             Double-click a task to edit it"),
        Line::from(""),
        Line::from("  ^S         Save now"),
        Line::from("  q          Quit"),
        Line::from("  ?          Toggle this help"),
    ];
    // The close hint sits on the border so it shows even when the body is cut off
    let area = centered_rect_fixed(64, help_text.len() as u16 + 2, frame.area());

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .title_bottom(Line::from(" Press any key to close ").centered())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

/// Centered popup with a fixed size, shrunk to fit small terminals
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
