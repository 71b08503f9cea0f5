use edtui::{EditorMode, EditorState, Lines};

use super::board::TaskColumn;

/// What the open prompt will do when confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Append a new task to the column
    Add(TaskColumn),
    /// Replace the text of an existing task
    Edit { column: TaskColumn, row: usize },
}

impl DialogKind {
    pub fn title(&self) -> &'static str {
        match self {
            DialogKind::Add(_) => " 할 일 추가 ",
            DialogKind::Edit { .. } => " 할 일 수정 ",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            DialogKind::Add(_) => "할 일을 입력하세요:",
            DialogKind::Edit { .. } => "할 일을 수정하세요:",
        }
    }
}

/// A modal text prompt
pub struct Dialog {
    pub kind: DialogKind,
    pub editor_state: EditorState,
}

impl Dialog {
    pub fn add(column: TaskColumn) -> Self {
        Self::new(DialogKind::Add(column), "")
    }

    /// Edit prompt pre-filled with the current task text
    pub fn edit(column: TaskColumn, row: usize, text: &str) -> Self {
        Self::new(DialogKind::Edit { column, row }, text)
    }

    pub fn new(kind: DialogKind, text: &str) -> Self {
        let mut editor_state = EditorState::new(Lines::from(text));
        editor_state.mode = EditorMode::Insert;
        if !text.is_empty() {
            // Start typing after the existing text
            let last_row = text.lines().count().saturating_sub(1);
            let last_col = text.lines().last().map(|l| l.chars().count()).unwrap_or(0);
            editor_state.cursor.row = last_row;
            editor_state.cursor.col = last_col;
        }
        Self { kind, editor_state }
    }

    pub fn text(&self) -> String {
        self.editor_state.lines.to_string()
    }
}

impl std::fmt::Debug for Dialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dialog")
            .field("kind", &self.kind)
            .field("text", &self.text())
            .finish()
    }
}
