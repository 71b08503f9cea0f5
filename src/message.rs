use crate::model::{DropTarget, TaskColumn};

/// Messages that can be dispatched to update application state (TEA pattern)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Board mutations (each one saves the whole board)
    AddTask { column: TaskColumn, text: String },
    EditTask { column: TaskColumn, row: usize, text: String },
    /// Move the selected task of `from` to the end of `to`
    MoveTask { from: TaskColumn, to: TaskColumn },
    /// Delete the selected task of a column
    DeleteTask(TaskColumn),
    /// Move a task to another row of the same column
    ReorderTask { column: TaskColumn, from: usize, to: usize },
    MoveTaskUp,
    MoveTaskDown,

    // Dialogs
    OpenAddDialog(TaskColumn),
    OpenEditDialog { column: TaskColumn, row: usize },
    DialogSubmit,
    DialogCancel,

    // Drag and drop
    /// Pick up the selected task of a column
    BeginDrag(TaskColumn),
    DragOver(Option<DropTarget>),
    /// Release over a target, or over nothing
    Drop(Option<DropTarget>),
    /// Drop on whatever target is currently hovered
    DropOnHovered,
    CancelDrag,

    // Selection
    SelectColumn(TaskColumn),
    ClickedTask { column: TaskColumn, row: usize },
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    NavigateToStart,
    NavigateToEnd,

    // UI
    ToggleHelp,
    SetStatusMessage(Option<String>),
    Save,
    Quit,
}
