use super::board::TaskColumn;

/// Where a dragged task can be released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// A column list. `row` is the hovered row, used only for reordering
    /// within the source column; cross-column drops always append.
    Column { column: TaskColumn, row: Option<usize> },
    Trash,
}

impl DropTarget {
    pub fn column(column: TaskColumn) -> Self {
        DropTarget::Column { column, row: None }
    }

    /// Next target to the left when steering a keyboard drag
    pub fn left(&self) -> DropTarget {
        match self {
            DropTarget::Column { column, .. } => DropTarget::column(column.left()),
            DropTarget::Trash => DropTarget::column(TaskColumn::Done),
        }
    }

    /// Next target to the right; the trash sits after the last column
    pub fn right(&self) -> DropTarget {
        match self {
            DropTarget::Column { column: TaskColumn::Done, .. } | DropTarget::Trash => DropTarget::Trash,
            DropTarget::Column { column, .. } => DropTarget::column(column.right()),
        }
    }
}

/// A drag in flight.
///
/// The payload is the task text captured when the drag started. On drop the
/// source column gives up whatever row is selected at that moment, not the
/// row the drag started from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    pub source: TaskColumn,
    pub payload: String,
    pub hover: Option<DropTarget>,
}

impl DragState {
    pub fn new(source: TaskColumn, payload: String) -> Self {
        Self {
            source,
            payload,
            hover: Some(DropTarget::column(source)),
        }
    }

    pub fn is_hovering(&self, target: DropTarget) -> bool {
        match (self.hover, target) {
            (Some(DropTarget::Trash), DropTarget::Trash) => true,
            (Some(DropTarget::Column { column: a, .. }), DropTarget::Column { column: b, .. }) => a == b,
            _ => false,
        }
    }
}
