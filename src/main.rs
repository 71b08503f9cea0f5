mod app;
mod logging;
mod message;
mod model;
mod store;
mod ui;

use app::App;
use edtui::EditorEventHandler;
use message::Message;
use model::{DropTarget, TaskColumn};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
            MouseButton, MouseEventKind,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::Rect,
    Terminal,
};
use std::io;
use std::time::Duration;
use store::TaskStore;
use ui::{layout::Hit, BoardLayout};

/// How long to wait for input before redrawing
const TICK_RATE: Duration = Duration::from_millis(250);

fn main() -> anyhow::Result<()> {
    // Logging is optional; the board works without it
    let log_path = logging::init().ok();

    let mut app = App::load(TaskStore::in_working_dir());
    tracing::info!(log = ?log_path, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    // Save state on exit. Refused if the task file could not be read at startup.
    if let Err(e) = app.save() {
        tracing::error!(error = %e, "failed to save board on exit");
        eprintln!("Failed to save tasks: {}", e);
    }
    tracing::info!("exiting");

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut editor_events = EditorEventHandler::default();

    loop {
        terminal.draw(|frame| ui::view(frame, app))?;

        if event::poll(TICK_RATE)? {
            let messages = match event::read()? {
                Event::Key(key) => {
                    // Only handle Press events, ignore Release and Repeat
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if app.model.ui_state.is_dialog_open() {
                        handle_dialog_key(key, app, &mut editor_events)
                    } else {
                        handle_key_event(key, app)
                    }
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let layout = BoardLayout::new(Rect::new(0, 0, size.width, size.height));
                    handle_mouse_event(mouse, app, &layout)
                }
                _ => vec![],
            };

            for msg in messages {
                app.dispatch(msg);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Keys while the add/edit prompt is open; everything but submit/cancel goes to edtui
fn handle_dialog_key(key: event::KeyEvent, app: &mut App, editor_events: &mut EditorEventHandler) -> Vec<Message> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Enter if !ctrl && !alt => vec![Message::DialogSubmit],
        KeyCode::Esc => vec![Message::DialogCancel],
        KeyCode::Char('c') if ctrl => vec![Message::DialogCancel],
        _ => {
            if let Some(dialog) = app.model.ui_state.dialog.as_mut() {
                editor_events.on_key_event(key, &mut dialog.editor_state);
            }
            vec![]
        }
    }
}

fn handle_key_event(key: event::KeyEvent, app: &App) -> Vec<Message> {
    let ui = &app.model.ui_state;

    // Handle help overlay
    if ui.show_help {
        return vec![Message::ToggleHelp];
    }

    let mut messages = Vec::new();
    // Clear status message on any key press
    if ui.status_message.is_some() {
        messages.push(Message::SetStatusMessage(None));
    }

    if let Some(ref drag) = ui.drag {
        messages.extend(handle_drag_key(key, drag.source));
        return messages;
    }

    let column = ui.selected_column;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let action = match key.code {
        KeyCode::Char('q') => vec![Message::Quit],
        KeyCode::Char('c') if ctrl => vec![Message::Quit],
        KeyCode::Char('s') if ctrl => vec![Message::Save],

        KeyCode::Char('?') => vec![Message::ToggleHelp],

        // Navigation
        KeyCode::Char('h') | KeyCode::Left => vec![Message::NavigateLeft],
        KeyCode::Char('l') | KeyCode::Right => vec![Message::NavigateRight],
        KeyCode::Char('j') | KeyCode::Down => vec![Message::NavigateDown],
        KeyCode::Char('k') | KeyCode::Up => vec![Message::NavigateUp],
        KeyCode::Char('g') | KeyCode::Home => vec![Message::NavigateToStart],
        KeyCode::Char('G') | KeyCode::End => vec![Message::NavigateToEnd],
        KeyCode::Char('1') => vec![Message::SelectColumn(TaskColumn::Planned)],
        KeyCode::Char('2') => vec![Message::SelectColumn(TaskColumn::InProgress)],
        KeyCode::Char('3') => vec![Message::SelectColumn(TaskColumn::Done)],

        // Task actions
        KeyCode::Char('a') | KeyCode::Char('i') => vec![Message::OpenAddDialog(column)],
        KeyCode::Char('e') | KeyCode::Enter => match app.model.selected_row(column) {
            Some(row) => vec![Message::OpenEditDialog { column, row }],
            None => vec![],
        },
        KeyCode::Char('+') | KeyCode::Char('=') => vec![Message::MoveTaskUp],
        KeyCode::Char('-') => vec![Message::MoveTaskDown],
        KeyCode::Char('H') => vec![Message::MoveTask { from: column, to: column.left() }],
        KeyCode::Char('L') => vec![Message::MoveTask { from: column, to: column.right() }],

        // Drag and drop
        KeyCode::Char('m') | KeyCode::Char(' ') => vec![Message::BeginDrag(column)],
        KeyCode::Char('d') | KeyCode::Delete => vec![
            Message::BeginDrag(column),
            Message::DragOver(Some(DropTarget::Trash)),
            Message::DropOnHovered,
        ],

        _ => vec![],
    };

    messages.extend(action);
    messages
}

/// Keys while a task is being carried
fn handle_drag_key(key: event::KeyEvent, source: TaskColumn) -> Vec<Message> {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => vec![Message::NavigateLeft],
        KeyCode::Char('l') | KeyCode::Right => vec![Message::NavigateRight],
        KeyCode::Char('1') => vec![Message::DragOver(Some(DropTarget::column(TaskColumn::Planned)))],
        KeyCode::Char('2') => vec![Message::DragOver(Some(DropTarget::column(TaskColumn::InProgress)))],
        KeyCode::Char('3') => vec![Message::DragOver(Some(DropTarget::column(TaskColumn::Done)))],
        KeyCode::Char('t') => vec![Message::DragOver(Some(DropTarget::Trash))],
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('m') => vec![Message::DropOnHovered],
        KeyCode::Esc | KeyCode::Char('q') => vec![Message::CancelDrag],
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => vec![Message::CancelDrag],
        // Returning to the source column keeps the task where it is
        KeyCode::Backspace => vec![Message::DragOver(Some(DropTarget::column(source)))],
        _ => vec![],
    }
}

/// Handle mouse events - clicks select, press-move-release drags, double-click edits
fn handle_mouse_event(mouse: event::MouseEvent, app: &App, layout: &BoardLayout) -> Vec<Message> {
    let ui = &app.model.ui_state;

    // The prompt is modal
    if ui.is_dialog_open() {
        return vec![];
    }

    let hit = layout.hit_test(mouse.column, mouse.row, &app.model);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if ui.show_help {
                return vec![Message::ToggleHelp];
            }
            match hit {
                Some(Hit::Task { column, row }) => vec![Message::ClickedTask { column, row }],
                Some(Hit::Column(column)) => vec![Message::SelectColumn(column)],
                Some(Hit::AddButton(column)) => vec![Message::OpenAddDialog(column)],
                Some(Hit::Trash) | None => vec![],
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let target = hit.map(|h| h.drop_target());
            if ui.is_dragging() {
                vec![Message::DragOver(target)]
            } else if let Some(press) = ui.press {
                // Moving off the pressed row starts the drag
                if hit == Some(Hit::Task { column: press.column, row: press.row }) {
                    vec![]
                } else {
                    vec![Message::BeginDrag(press.column), Message::DragOver(target)]
                }
            } else {
                vec![]
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if ui.is_dragging() {
                vec![Message::Drop(hit.map(|h| h.drop_target()))]
            } else if ui.press.is_some() {
                // Plain click: nothing carried, just release the press
                vec![Message::Drop(None)]
            } else {
                vec![]
            }
        }
        MouseEventKind::ScrollDown => vec![Message::NavigateDown],
        MouseEventKind::ScrollUp => vec![Message::NavigateUp],
        _ => vec![],
    }
}
