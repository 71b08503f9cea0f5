mod board;
mod dialog;
mod drag;

pub use board::{Board, TaskColumn};
pub use dialog::{Dialog, DialogKind};
pub use drag::{DragState, DropTarget};

use std::time::Instant;

/// Application state following The Elm Architecture
#[derive(Debug, Default)]
pub struct AppModel {
    pub board: Board,
    pub ui_state: UiState,
}

impl AppModel {
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            ui_state: UiState::default(),
        }
    }

    /// Row selected in a column, clamped to the column's current length
    pub fn selected_row(&self, column: TaskColumn) -> Option<usize> {
        let len = self.board.len(column);
        (len > 0).then(|| self.ui_state.selected_rows[column.index()].min(len - 1))
    }

    /// Text of the selected task in the focused column
    pub fn selected_task(&self) -> Option<(TaskColumn, usize, &str)> {
        let column = self.ui_state.selected_column;
        let row = self.selected_row(column)?;
        self.board.task(column, row).map(|text| (column, row, text))
    }

    pub fn select(&mut self, column: TaskColumn, row: usize) {
        self.ui_state.selected_column = column;
        self.ui_state.selected_rows[column.index()] = row;
    }

    /// Keep every column's selection inside its bounds after a mutation
    pub fn clamp_selection(&mut self) {
        for column in TaskColumn::all() {
            let len = self.board.len(column);
            let row = &mut self.ui_state.selected_rows[column.index()];
            *row = (*row).min(len.saturating_sub(1));
        }
    }
}

/// UI state (not persisted)
#[derive(Debug, Default)]
pub struct UiState {
    pub selected_column: TaskColumn,
    /// Selected row per column, indexed by `TaskColumn::index`
    pub selected_rows: [usize; 3],
    pub dialog: Option<Dialog>,
    pub drag: Option<DragState>,
    /// Left button held on a task but not yet moved
    pub press: Option<Press>,
    /// Last left click on a task, for double-click detection
    pub last_click: Option<Click>,
    pub show_help: bool,
    pub status_message: Option<String>,
}

impl UiState {
    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Press {
    pub column: TaskColumn,
    pub row: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Click {
    pub column: TaskColumn,
    pub row: usize,
    pub at: Instant,
}
