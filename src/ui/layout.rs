use crate::model::{AppModel, DropTarget, TaskColumn};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Height of the "add task" button under each column
const ADD_BUTTON_HEIGHT: u16 = 1;
/// Height of the trash drop zone under the done column
const TRASH_HEIGHT: u16 = 3;

/// Screen regions, shared by rendering and mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub header: Rect,
    pub columns: [ColumnLayout; 3],
    pub trash: Rect,
    pub status: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Bordered task list
    pub list: Rect,
    pub add_button: Rect,
}

impl ColumnLayout {
    /// Area inside the list border where task rows are drawn
    pub fn rows(&self) -> Rect {
        Rect {
            x: self.list.x.saturating_add(1),
            y: self.list.y.saturating_add(1),
            width: self.list.width.saturating_sub(2),
            height: self.list.height.saturating_sub(2),
        }
    }
}

/// What sits under a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Task { column: TaskColumn, row: usize },
    /// Column list outside any task (header, border, empty space)
    Column(TaskColumn),
    AddButton(TaskColumn),
    Trash,
}

impl Hit {
    /// Drop target for a drag released over this position
    pub fn drop_target(&self) -> DropTarget {
        match *self {
            Hit::Task { column, row } => DropTarget::Column { column, row: Some(row) },
            Hit::Column(column) | Hit::AddButton(column) => DropTarget::column(column),
            Hit::Trash => DropTarget::Trash,
        }
    }
}

impl BoardLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(6),    // Columns
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let column_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(chunks[1]);

        let split_column = |area: Rect| {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(ADD_BUTTON_HEIGHT)])
                .split(area);
            ColumnLayout {
                list: parts[0],
                add_button: parts[1],
            }
        };

        // The trash zone sits under the done column, below its add button
        let done_parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(TRASH_HEIGHT)])
            .split(column_areas[2]);

        Self {
            header: chunks[0],
            columns: [
                split_column(column_areas[0]),
                split_column(column_areas[1]),
                split_column(done_parts[0]),
            ],
            trash: done_parts[1],
            status: chunks[2],
        }
    }

    pub fn column(&self, column: TaskColumn) -> &ColumnLayout {
        &self.columns[column.index()]
    }

    /// Resolve a terminal cell to the element under it
    pub fn hit_test(&self, x: u16, y: u16, model: &AppModel) -> Option<Hit> {
        let pos = Position::new(x, y);
        if self.trash.contains(pos) {
            return Some(Hit::Trash);
        }

        for column in TaskColumn::all() {
            let layout = self.column(column);
            if layout.add_button.contains(pos) {
                return Some(Hit::AddButton(column));
            }
            if !layout.list.contains(pos) {
                continue;
            }

            let rows = layout.rows();
            if rows.contains(pos) {
                let offset = scroll_offset(model.selected_row(column), rows.height as usize);
                let row = offset + (y - rows.y) as usize;
                if row < model.board.len(column) {
                    return Some(Hit::Task { column, row });
                }
            }
            return Some(Hit::Column(column));
        }

        None
    }
}

/// First visible row of a list so the selected row stays on screen
pub fn scroll_offset(selected: Option<usize>, visible: usize) -> usize {
    match selected {
        Some(row) if visible > 0 => row.saturating_sub(visible - 1),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Board;

    fn model() -> AppModel {
        AppModel::with_board(Board::from_columns(
            vec!["a".into(), "b".into()],
            vec![],
            (0..30).map(|i| format!("done {i}")).collect(),
        ))
    }

    #[test]
    fn regions_cover_screen_without_overlap() {
        let layout = BoardLayout::new(Rect::new(0, 0, 90, 30));
        assert_eq!(layout.header, Rect::new(0, 0, 90, 1));
        assert_eq!(layout.status, Rect::new(0, 29, 90, 1));
        assert_eq!(layout.trash.height, TRASH_HEIGHT);
        assert_eq!(layout.trash.bottom(), 29);
        assert_eq!(layout.columns[0].list.x, 0);
        assert_eq!(layout.columns[1].list.x, 30);
        assert_eq!(layout.columns[2].list.x, 60);
        assert!(layout.columns[2].add_button.bottom() <= layout.trash.y);
    }

    #[test]
    fn hit_test_finds_tasks_and_empty_space() {
        let model = model();
        let layout = BoardLayout::new(Rect::new(0, 0, 90, 30));
        let rows = layout.columns[0].rows();

        assert_eq!(
            layout.hit_test(rows.x, rows.y, &model),
            Some(Hit::Task { column: TaskColumn::Planned, row: 0 })
        );
        assert_eq!(
            layout.hit_test(rows.x + 3, rows.y + 1, &model),
            Some(Hit::Task { column: TaskColumn::Planned, row: 1 })
        );
        assert_eq!(
            layout.hit_test(rows.x, rows.y + 2, &model),
            Some(Hit::Column(TaskColumn::Planned))
        );
        assert_eq!(layout.hit_test(rows.x, layout.columns[0].list.y, &model), Some(Hit::Column(TaskColumn::Planned)));
    }

    #[test]
    fn hit_test_finds_buttons_and_trash() {
        let model = model();
        let layout = BoardLayout::new(Rect::new(0, 0, 90, 30));
        let add = layout.columns[1].add_button;
        assert_eq!(layout.hit_test(add.x, add.y, &model), Some(Hit::AddButton(TaskColumn::InProgress)));
        assert_eq!(layout.hit_test(layout.trash.x + 1, layout.trash.y + 1, &model), Some(Hit::Trash));
        assert_eq!(layout.hit_test(0, 0, &model), None);
    }

    #[test]
    fn hit_test_accounts_for_scrolling() {
        let mut model = model();
        model.select(TaskColumn::Done, 29);
        let layout = BoardLayout::new(Rect::new(0, 0, 90, 30));
        let rows = layout.columns[2].rows();
        let last_visible = rows.y + rows.height - 1;

        assert_eq!(
            layout.hit_test(rows.x, last_visible, &model),
            Some(Hit::Task { column: TaskColumn::Done, row: 29 })
        );
    }

    #[test]
    fn scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(None, 5), 0);
        assert_eq!(scroll_offset(Some(3), 5), 0);
        assert_eq!(scroll_offset(Some(4), 5), 0);
        assert_eq!(scroll_offset(Some(7), 5), 3);
        assert_eq!(scroll_offset(Some(7), 0), 0);
    }

    #[test]
    fn hits_map_to_drop_targets() {
        assert_eq!(
            Hit::Task { column: TaskColumn::Done, row: 2 }.drop_target(),
            DropTarget::Column { column: TaskColumn::Done, row: Some(2) }
        );
        assert_eq!(Hit::AddButton(TaskColumn::Planned).drop_target(), DropTarget::column(TaskColumn::Planned));
        assert_eq!(Hit::Trash.drop_target(), DropTarget::Trash);
    }
}
