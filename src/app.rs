use crate::message::Message;
use crate::model::{AppModel, Board, Click, Dialog, DialogKind, DragState, DropTarget, Press, TaskColumn};
use crate::store::{LoadOutcome, StoreError, TaskStore};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Two clicks on the same task within this window count as a double-click
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(500);

pub struct App {
    pub model: AppModel,
    pub store: TaskStore,
    pub should_quit: bool,
    /// Set when the task file exists but could not be read. Nothing is
    /// written back for the rest of the session so its contents survive.
    pub load_failed: bool,
}

impl App {
    pub fn new(store: TaskStore) -> Self {
        Self::with_model(AppModel::default(), store)
    }

    pub fn with_model(model: AppModel, store: TaskStore) -> Self {
        Self {
            model,
            store,
            should_quit: false,
            load_failed: false,
        }
    }

    /// Build the app from whatever the store holds.
    ///
    /// Unusable files have already been reset by the store. A read error
    /// leaves the app running on an empty board with the error in the status
    /// bar, and the file is left alone.
    pub fn load(store: TaskStore) -> Self {
        let mut app = Self::new(store);
        match app.store.load() {
            Ok(loaded) => {
                match &loaded.outcome {
                    LoadOutcome::Loaded => {
                        tracing::info!(path = %app.store.path().display(), tasks = loaded.board.total(), "loaded board")
                    }
                    LoadOutcome::Missing => {
                        tracing::info!(path = %app.store.path().display(), "no task file, started empty board")
                    }
                    LoadOutcome::Reset(reason) => {
                        tracing::warn!(path = %app.store.path().display(), %reason, "task file was reset")
                    }
                }
                app.model = AppModel::with_board(loaded.board);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load board");
                app.model.ui_state.status_message = Some(e.to_string());
                app.load_failed = matches!(e, StoreError::Read { .. });
            }
        }
        app
    }

    /// Apply a message and every follow-up message it produces
    pub fn dispatch(&mut self, msg: Message) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            queue.extend(self.update(msg));
        }
    }

    /// Save the whole board.
    ///
    /// Refused after a failed load, since the board in memory does not hold
    /// what the file does.
    pub fn save(&self) -> Result<(), StoreError> {
        if self.load_failed {
            return Err(StoreError::Unread {
                path: self.store.path().to_path_buf(),
            });
        }
        self.store.save(&self.model.board)
    }

    fn persist(&self) -> Vec<Message> {
        match self.save() {
            Ok(()) => Vec::new(),
            Err(e) => {
                tracing::error!(error = %e, "failed to save board");
                vec![Message::SetStatusMessage(Some(format!("Save failed: {e}")))]
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.model.board
    }

    pub fn update(&mut self, msg: Message) -> Vec<Message> {
        let mut commands = Vec::new();

        match msg {
            Message::AddTask { column, text } => {
                if text.is_empty() {
                    return commands;
                }
                tracing::info!(?column, %text, "add task");
                self.model.board.push(column, text);
                let row = self.model.board.len(column) - 1;
                self.model.select(column, row);
                commands.extend(self.persist());
            }

            Message::EditTask { column, row, text } => {
                if text.is_empty() {
                    return commands;
                }
                if self.model.board.replace(column, row, text) {
                    tracing::info!(?column, row, "edit task");
                    commands.extend(self.persist());
                }
            }

            Message::MoveTask { from, to } => {
                if from == to {
                    return commands;
                }
                let Some(row) = self.model.selected_row(from) else {
                    return commands;
                };
                if let Some(text) = self.model.board.take(from, row) {
                    tracing::info!(?from, ?to, %text, "move task");
                    self.model.board.push(to, text);
                    self.model.clamp_selection();
                    let new_row = self.model.board.len(to) - 1;
                    self.model.select(to, new_row);
                    commands.extend(self.persist());
                }
            }

            Message::DeleteTask(column) => {
                let Some(row) = self.model.selected_row(column) else {
                    return commands;
                };
                if let Some(text) = self.model.board.take(column, row) {
                    tracing::info!(?column, %text, "delete task");
                    self.model.clamp_selection();
                    commands.extend(self.persist());
                }
            }

            Message::ReorderTask { column, from, to } => {
                if from == to {
                    return commands;
                }
                if let Some(row) = self.model.board.reorder(column, from, to) {
                    tracing::debug!(?column, from, to = row, "reorder task");
                    self.model.select(column, row);
                    commands.extend(self.persist());
                }
            }

            Message::MoveTaskUp => {
                let column = self.model.ui_state.selected_column;
                if let Some(row) = self.model.selected_row(column).filter(|&r| r > 0) {
                    commands.push(Message::ReorderTask { column, from: row, to: row - 1 });
                }
            }

            Message::MoveTaskDown => {
                let column = self.model.ui_state.selected_column;
                if let Some(row) = self.model.selected_row(column) {
                    if row + 1 < self.model.board.len(column) {
                        commands.push(Message::ReorderTask { column, from: row, to: row + 1 });
                    }
                }
            }

            Message::OpenAddDialog(column) => {
                self.model.ui_state.drag = None;
                self.model.ui_state.selected_column = column;
                self.model.ui_state.dialog = Some(Dialog::add(column));
            }

            Message::OpenEditDialog { column, row } => {
                let Some(text) = self.model.board.task(column, row) else {
                    return commands;
                };
                let dialog = Dialog::edit(column, row, text);
                self.model.ui_state.drag = None;
                self.model.select(column, row);
                self.model.ui_state.dialog = Some(dialog);
            }

            Message::DialogSubmit => {
                if let Some(dialog) = self.model.ui_state.dialog.take() {
                    let text = dialog.text();
                    match dialog.kind {
                        DialogKind::Add(column) => commands.push(Message::AddTask { column, text }),
                        DialogKind::Edit { column, row } => {
                            commands.push(Message::EditTask { column, row, text })
                        }
                    }
                }
            }

            Message::DialogCancel => {
                self.model.ui_state.dialog = None;
            }

            Message::BeginDrag(column) => {
                if self.model.ui_state.is_dragging() {
                    return commands;
                }
                let Some(row) = self.model.selected_row(column) else {
                    return commands;
                };
                if let Some(text) = self.model.board.task(column, row) {
                    tracing::debug!(?column, row, "drag started");
                    let drag = DragState::new(column, text.to_string());
                    self.model.ui_state.selected_column = column;
                    self.model.ui_state.drag = Some(drag);
                }
            }

            Message::DragOver(target) => {
                if let Some(drag) = self.model.ui_state.drag.as_mut() {
                    drag.hover = target;
                }
            }

            Message::DropOnHovered => {
                let hover = self.model.ui_state.drag.as_ref().and_then(|d| d.hover);
                commands.push(Message::Drop(hover));
            }

            Message::Drop(target) => {
                self.model.ui_state.press = None;
                if let Some(drag) = self.model.ui_state.drag.take() {
                    commands.extend(self.drop_task(drag, target));
                }
            }

            Message::CancelDrag => {
                self.model.ui_state.press = None;
                if self.model.ui_state.drag.take().is_some() {
                    tracing::debug!("drag cancelled");
                }
            }

            Message::SelectColumn(column) => {
                self.model.ui_state.selected_column = column;
                self.model.ui_state.last_click = None;
            }

            Message::ClickedTask { column, row } => {
                if row >= self.model.board.len(column) {
                    return commands;
                }
                let now = Instant::now();
                let is_double = self.model.ui_state.last_click.is_some_and(|click| {
                    click.column == column
                        && click.row == row
                        && now.duration_since(click.at) <= DOUBLE_CLICK_WINDOW
                });

                self.model.select(column, row);
                if is_double {
                    self.model.ui_state.last_click = None;
                    self.model.ui_state.press = None;
                    commands.push(Message::OpenEditDialog { column, row });
                } else {
                    self.model.ui_state.last_click = Some(Click { column, row, at: now });
                    self.model.ui_state.press = Some(Press { column, row });
                }
            }

            Message::NavigateUp => {
                let column = self.model.ui_state.selected_column;
                if let Some(row) = self.model.selected_row(column) {
                    self.model.select(column, row.saturating_sub(1));
                }
            }

            Message::NavigateDown => {
                let column = self.model.ui_state.selected_column;
                if let Some(row) = self.model.selected_row(column) {
                    let last = self.model.board.len(column) - 1;
                    self.model.select(column, (row + 1).min(last));
                }
            }

            Message::NavigateLeft => {
                if let Some(drag) = self.model.ui_state.drag.as_mut() {
                    let current = drag.hover.unwrap_or(DropTarget::column(drag.source));
                    drag.hover = Some(current.left());
                } else {
                    let column = self.model.ui_state.selected_column.left();
                    self.model.ui_state.selected_column = column;
                }
            }

            Message::NavigateRight => {
                if let Some(drag) = self.model.ui_state.drag.as_mut() {
                    let current = drag.hover.unwrap_or(DropTarget::column(drag.source));
                    drag.hover = Some(current.right());
                } else {
                    let column = self.model.ui_state.selected_column.right();
                    self.model.ui_state.selected_column = column;
                }
            }

            Message::NavigateToStart => {
                let column = self.model.ui_state.selected_column;
                self.model.select(column, 0);
            }

            Message::NavigateToEnd => {
                let column = self.model.ui_state.selected_column;
                let len = self.model.board.len(column);
                self.model.select(column, len.saturating_sub(1));
            }

            Message::ToggleHelp => {
                self.model.ui_state.show_help = !self.model.ui_state.show_help;
            }

            Message::SetStatusMessage(msg) => {
                self.model.ui_state.status_message = msg;
            }

            Message::Save => {
                commands.extend(self.persist());
                if commands.is_empty() {
                    commands.push(Message::SetStatusMessage(Some(format!(
                        "Saved {}",
                        self.store.path().display()
                    ))));
                }
            }

            Message::Quit => {
                self.should_quit = true;
            }
        }

        commands
    }

    /// Finish a drag.
    ///
    /// The source column gives up its currently selected row, which is the
    /// row the drag started from unless the selection moved in between.
    fn drop_task(&mut self, drag: DragState, target: Option<DropTarget>) -> Vec<Message> {
        let source = drag.source;
        match target {
            None => {
                tracing::debug!(?source, "dropped outside any target");
                Vec::new()
            }
            Some(DropTarget::Trash) => vec![Message::DeleteTask(source)],
            Some(DropTarget::Column { column, row }) if column == source => {
                match (self.model.selected_row(source), row) {
                    (Some(from), Some(to)) => vec![Message::ReorderTask { column, from, to }],
                    _ => Vec::new(),
                }
            }
            Some(DropTarget::Column { column, .. }) => {
                let Some(row) = self.model.selected_row(source) else {
                    return Vec::new();
                };
                self.model.board.take(source, row);
                tracing::info!(from = ?source, to = ?column, text = %drag.payload, "move task");
                self.model.board.push(column, drag.payload);
                self.model.clamp_selection();
                let new_row = self.model.board.len(column) - 1;
                self.model.select(column, new_row);
                self.persist()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn app_with(dir: &TempDir, board: Board) -> App {
        let store = TaskStore::new(dir.path().join("tasks.json"));
        App::with_model(AppModel::with_board(board), store)
    }

    fn sample() -> Board {
        Board::from_columns(
            vec!["Buy milk".into(), "Call mom".into()],
            vec!["Refactor".into()],
            vec!["Setup repo".into()],
        )
    }

    fn saved(app: &App) -> Board {
        app.store.load().unwrap().board
    }

    #[test]
    fn load_from_missing_file_starts_empty_and_writes_document() {
        let dir = TempDir::new().unwrap();
        let app = App::load(TaskStore::new(dir.path().join("tasks.json")));
        assert!(app.board().total() == 0);
        assert!(dir.path().join("tasks.json").exists());
        assert!(app.model.ui_state.status_message.is_none());
    }

    #[test]
    fn load_from_malformed_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, "\"not an object\"").unwrap();
        let app = App::load(TaskStore::new(path));
        assert!(app.board().total() == 0);
    }

    #[test]
    fn add_appends_and_saves() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, sample());

        app.dispatch(Message::AddTask { column: TaskColumn::Planned, text: "Write spec".into() });

        let planned = app.board().tasks(TaskColumn::Planned);
        assert_eq!(planned.last().map(String::as_str), Some("Write spec"));
        assert_eq!(saved(&app).tasks(TaskColumn::Planned).last().map(String::as_str), Some("Write spec"));
        assert_eq!(app.model.selected_task(), Some((TaskColumn::Planned, 2, "Write spec")));
    }

    #[test]
    fn add_dialog_submit_adds_task() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, sample());

        app.dispatch(Message::OpenAddDialog(TaskColumn::Done));
        app.model.ui_state.dialog = Some(Dialog::new(DialogKind::Add(TaskColumn::Done), "Ship it"));
        app.dispatch(Message::DialogSubmit);

        assert!(!app.model.ui_state.is_dialog_open());
        assert_eq!(app.board().tasks(TaskColumn::Done), ["Setup repo", "Ship it"]);
    }

    #[test]
    fn empty_or_cancelled_dialog_does_not_mutate() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, sample());

        app.dispatch(Message::OpenAddDialog(TaskColumn::Planned));
        app.dispatch(Message::DialogSubmit);
        assert_eq!(app.board(), &sample());
        assert!(!dir.path().join("tasks.json").exists());

        app.dispatch(Message::OpenEditDialog { column: TaskColumn::Planned, row: 0 });
        app.dispatch(Message::DialogCancel);
        assert_eq!(app.board(), &sample());
        assert!(!app.model.ui_state.is_dialog_open());
    }

    #[test]
    fn whitespace_only_text_is_accepted() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, Board::new());
        app.dispatch(Message::AddTask { column: TaskColumn::Done, text: " ".into() });
        assert_eq!(app.board().tasks(TaskColumn::Done), [" "]);
    }

    #[test]
    fn edit_replaces_text_in_place() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, sample());

        app.dispatch(Message::OpenEditDialog { column: TaskColumn::Planned, row: 0 });
        let prefilled = app.model.ui_state.dialog.as_ref().map(Dialog::text);
        assert_eq!(prefilled.as_deref(), Some("Buy milk"));

        app.dispatch(Message::EditTask { column: TaskColumn::Planned, row: 0, text: "Buy oat milk".into() });

        assert_eq!(app.board().tasks(TaskColumn::Planned), ["Buy oat milk", "Call mom"]);
        assert_eq!(saved(&app), *app.board());
    }

    #[test]
    fn drag_first_planned_task_to_done() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, sample());
        let total = app.board().total();

        app.model.select(TaskColumn::Planned, 0);
        app.dispatch(Message::BeginDrag(TaskColumn::Planned));
        app.dispatch(Message::Drop(Some(DropTarget::column(TaskColumn::Done))));

        assert_eq!(app.board().tasks(TaskColumn::Planned), ["Call mom"]);
        assert_eq!(app.board().tasks(TaskColumn::Done), ["Setup repo", "Buy milk"]);
        assert_eq!(app.board().total(), total);
        assert_eq!(saved(&app), *app.board());
        assert!(!app.model.ui_state.is_dragging());
    }

    #[test]
    fn drop_removes_selected_row_not_dragged_row() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, sample());

        app.model.select(TaskColumn::Planned, 0);
        app.dispatch(Message::BeginDrag(TaskColumn::Planned));
        // Selection moves while the drag is in flight
        app.model.select(TaskColumn::Planned, 1);
        app.dispatch(Message::Drop(Some(DropTarget::column(TaskColumn::InProgress))));

        assert_eq!(app.board().tasks(TaskColumn::Planned), ["Buy milk"]);
        assert_eq!(app.board().tasks(TaskColumn::InProgress), ["Refactor", "Buy milk"]);
    }

    #[test]
    fn drop_on_trash_deletes() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, sample());
        let total = app.board().total();

        app.model.select(TaskColumn::InProgress, 0);
        app.dispatch(Message::BeginDrag(TaskColumn::InProgress));
        app.dispatch(Message::DragOver(Some(DropTarget::Trash)));
        app.dispatch(Message::DropOnHovered);

        assert!(app.board().tasks(TaskColumn::InProgress).is_empty());
        assert_eq!(app.board().total(), total - 1);
        assert_eq!(saved(&app).total(), total - 1);
    }

    #[test]
    fn keyboard_drag_steers_to_trash() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, sample());

        app.model.select(TaskColumn::Planned, 1);
        app.dispatch(Message::BeginDrag(TaskColumn::Planned));
        for _ in 0..3 {
            app.dispatch(Message::NavigateRight);
        }
        assert_eq!(app.model.ui_state.drag.as_ref().and_then(|d| d.hover), Some(DropTarget::Trash));
        app.dispatch(Message::DropOnHovered);

        assert_eq!(app.board().tasks(TaskColumn::Planned), ["Buy milk"]);
        assert_eq!(app.board().total(), 3);
    }

    #[test]
    fn cancelled_or_untargeted_drag_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, sample());

        app.dispatch(Message::BeginDrag(TaskColumn::Planned));
        app.dispatch(Message::CancelDrag);
        app.dispatch(Message::BeginDrag(TaskColumn::Planned));
        app.dispatch(Message::Drop(None));

        assert_eq!(app.board(), &sample());
        assert!(!dir.path().join("tasks.json").exists());
    }

    #[test]
    fn drag_from_empty_column_does_not_start() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, Board::new());
        app.dispatch(Message::BeginDrag(TaskColumn::Done));
        assert!(!app.model.ui_state.is_dragging());
    }

    #[test]
    fn drop_on_own_column_row_reorders() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, sample());

        app.model.select(TaskColumn::Planned, 0);
        app.dispatch(Message::BeginDrag(TaskColumn::Planned));
        app.dispatch(Message::Drop(Some(DropTarget::Column { column: TaskColumn::Planned, row: Some(1) })));

        assert_eq!(app.board().tasks(TaskColumn::Planned), ["Call mom", "Buy milk"]);
        assert_eq!(app.board().total(), 4);
        assert_eq!(app.model.selected_row(TaskColumn::Planned), Some(1));
    }

    #[test]
    fn move_up_and_down_reorders_selected_task() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, sample());

        app.model.select(TaskColumn::Planned, 0);
        app.dispatch(Message::MoveTaskDown);
        assert_eq!(app.board().tasks(TaskColumn::Planned), ["Call mom", "Buy milk"]);
        app.dispatch(Message::MoveTaskDown);
        assert_eq!(app.board().tasks(TaskColumn::Planned), ["Call mom", "Buy milk"]);
        app.dispatch(Message::MoveTaskUp);
        assert_eq!(app.board().tasks(TaskColumn::Planned), ["Buy milk", "Call mom"]);
        assert_eq!(saved(&app), *app.board());
    }

    #[test]
    fn move_task_shortcut_appends_to_target() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, sample());

        app.model.select(TaskColumn::Planned, 1);
        app.dispatch(Message::MoveTask { from: TaskColumn::Planned, to: TaskColumn::InProgress });

        assert_eq!(app.board().tasks(TaskColumn::InProgress), ["Refactor", "Call mom"]);
        assert_eq!(app.model.selected_task(), Some((TaskColumn::InProgress, 1, "Call mom")));
    }

    #[test]
    fn double_click_opens_edit_dialog() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, sample());

        app.dispatch(Message::ClickedTask { column: TaskColumn::Done, row: 0 });
        assert!(!app.model.ui_state.is_dialog_open());
        app.dispatch(Message::ClickedTask { column: TaskColumn::Done, row: 0 });

        let kind = app.model.ui_state.dialog.as_ref().map(|d| d.kind);
        assert_eq!(kind, Some(DialogKind::Edit { column: TaskColumn::Done, row: 0 }));
    }

    #[test]
    fn clicks_on_different_rows_do_not_edit() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, sample());

        app.dispatch(Message::ClickedTask { column: TaskColumn::Planned, row: 0 });
        app.dispatch(Message::ClickedTask { column: TaskColumn::Planned, row: 1 });

        assert!(!app.model.ui_state.is_dialog_open());
        assert_eq!(app.model.selected_task(), Some((TaskColumn::Planned, 1, "Call mom")));
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, sample());

        app.dispatch(Message::NavigateDown);
        app.dispatch(Message::NavigateDown);
        assert_eq!(app.model.selected_row(TaskColumn::Planned), Some(1));
        app.dispatch(Message::NavigateLeft);
        assert_eq!(app.model.ui_state.selected_column, TaskColumn::Planned);
        app.dispatch(Message::NavigateRight);
        app.dispatch(Message::NavigateRight);
        app.dispatch(Message::NavigateRight);
        assert_eq!(app.model.ui_state.selected_column, TaskColumn::Done);
        app.dispatch(Message::NavigateUp);
        assert_eq!(app.model.selected_row(TaskColumn::Done), Some(0));
    }

    #[test]
    fn save_failure_is_reported_in_status_bar() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("occupant"), "x").unwrap();
        let mut app = app_with(&dir, sample());

        app.dispatch(Message::AddTask { column: TaskColumn::Planned, text: "Kept in memory".into() });

        assert_eq!(app.board().len(TaskColumn::Planned), 3);
        let status = app.model.ui_state.status_message.clone().unwrap_or_default();
        assert!(status.starts_with("Save failed"), "{status}");
    }

    #[test]
    fn unreadable_file_is_never_overwritten() {
        let dir = TempDir::new().unwrap();
        // A directory at the file path exists but cannot be read as a document
        let path = dir.path().join("tasks.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("occupant"), "original").unwrap();

        let mut app = App::load(TaskStore::new(&path));
        assert!(app.load_failed);
        assert!(app.board().total() == 0);
        assert!(app.model.ui_state.status_message.is_some());

        app.dispatch(Message::AddTask { column: TaskColumn::Planned, text: "Kept in memory".into() });
        assert_eq!(app.board().len(TaskColumn::Planned), 1);
        let status = app.model.ui_state.status_message.clone().unwrap_or_default();
        assert!(status.contains("could not be read"), "{status}");

        // The save main runs on exit
        assert!(matches!(app.save(), Err(StoreError::Unread { .. })));
        assert!(path.is_dir());
        assert_eq!(std::fs::read_to_string(path.join("occupant")).unwrap(), "original");
    }

    #[cfg(unix)]
    #[test]
    fn permission_denied_file_keeps_its_bytes() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let original = r#"{"todo":["Important task A","Important task B"],"inProgress":[],"done":[]}"#;
        std::fs::write(&path, original).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();
        if std::fs::read(&path).is_ok() {
            // Running with privileges that ignore file modes
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
            return;
        }

        let app = App::load(TaskStore::new(&path));
        assert!(app.load_failed);
        assert!(app.save().is_err());

        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }
}
