/// One of the three fixed columns of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskColumn {
    #[default]
    Planned,
    InProgress,
    Done,
}

impl TaskColumn {
    /// Columns in on-screen (left to right) and on-disk order
    pub fn all() -> [TaskColumn; 3] {
        [TaskColumn::Planned, TaskColumn::InProgress, TaskColumn::Done]
    }

    /// Fixed column label shown in the column header
    pub fn label(&self) -> &'static str {
        match self {
            TaskColumn::Planned => "계획",
            TaskColumn::InProgress => "진행 중",
            TaskColumn::Done => "완료",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TaskColumn::Planned => 0,
            TaskColumn::InProgress => 1,
            TaskColumn::Done => 2,
        }
    }

    pub fn left(&self) -> TaskColumn {
        match self {
            TaskColumn::Planned | TaskColumn::InProgress => TaskColumn::Planned,
            TaskColumn::Done => TaskColumn::InProgress,
        }
    }

    pub fn right(&self) -> TaskColumn {
        match self {
            TaskColumn::Planned => TaskColumn::InProgress,
            TaskColumn::InProgress | TaskColumn::Done => TaskColumn::Done,
        }
    }
}

/// The whole board: three ordered lists of task text.
///
/// Tasks have no identity beyond their text and position, so two identical
/// strings in one column are indistinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    columns: [Vec<String>; 3],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_columns(planned: Vec<String>, in_progress: Vec<String>, done: Vec<String>) -> Self {
        Self {
            columns: [planned, in_progress, done],
        }
    }

    pub fn tasks(&self, column: TaskColumn) -> &[String] {
        &self.columns[column.index()]
    }

    pub fn task(&self, column: TaskColumn, row: usize) -> Option<&str> {
        self.tasks(column).get(row).map(String::as_str)
    }

    pub fn len(&self, column: TaskColumn) -> usize {
        self.tasks(column).len()
    }

    pub fn total(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Append a task to the end of a column
    pub fn push(&mut self, column: TaskColumn, text: String) {
        self.columns[column.index()].push(text);
    }

    /// Replace the text of a task in place. Returns false if the row does not exist.
    pub fn replace(&mut self, column: TaskColumn, row: usize, text: String) -> bool {
        match self.columns[column.index()].get_mut(row) {
            Some(task) => {
                *task = text;
                true
            }
            None => false,
        }
    }

    /// Remove and return the task at a row
    pub fn take(&mut self, column: TaskColumn, row: usize) -> Option<String> {
        let tasks = &mut self.columns[column.index()];
        (row < tasks.len()).then(|| tasks.remove(row))
    }

    /// Move a task to another row of the same column.
    /// `to` is clamped to the last row. Returns the row the task landed on.
    pub fn reorder(&mut self, column: TaskColumn, from: usize, to: usize) -> Option<usize> {
        let tasks = &mut self.columns[column.index()];
        if from >= tasks.len() {
            return None;
        }
        let to = to.min(tasks.len() - 1);
        let task = tasks.remove(from);
        tasks.insert(to, task);
        Some(to)
    }
}
