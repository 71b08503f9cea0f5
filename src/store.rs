//! Whole-board persistence to a single JSON file.
//!
//! The file holds one object with three arrays of strings:
//! `{"todo": [...], "inProgress": [...], "done": [...]}`. Every save rewrites
//! the entire document.

use crate::model::{Board, TaskColumn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name used in the working directory
pub const DEFAULT_FILE_NAME: &str = "tasks.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to serialize board: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("not saving over {path}: it could not be read at startup")]
    Unread { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// On-disk shape. Field order fixes key order, so repeated saves are byte-identical.
#[derive(Debug, Default, Serialize, Deserialize)]
struct BoardDocument {
    #[serde(default)]
    todo: Vec<String>,
    #[serde(default, rename = "inProgress")]
    in_progress: Vec<String>,
    #[serde(default)]
    done: Vec<String>,
}

impl From<BoardDocument> for Board {
    fn from(doc: BoardDocument) -> Self {
        Board::from_columns(doc.todo, doc.in_progress, doc.done)
    }
}

impl From<&Board> for BoardDocument {
    fn from(board: &Board) -> Self {
        Self {
            todo: board.tasks(TaskColumn::Planned).to_vec(),
            in_progress: board.tasks(TaskColumn::InProgress).to_vec(),
            done: board.tasks(TaskColumn::Done).to_vec(),
        }
    }
}

/// How the board came out of `TaskStore::load`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed and had the expected shape
    Loaded,
    /// No file yet; an empty document was written
    Missing,
    /// The file could not be used; it was reset to an empty document
    Reset(String),
}

#[derive(Debug)]
pub struct LoadedBoard {
    pub board: Board,
    pub outcome: LoadOutcome,
}

/// Reads and writes the persistence file
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `tasks.json` in the current directory
    pub fn in_working_dir() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the board.
    ///
    /// A missing file, invalid JSON, or a document of the wrong shape all
    /// produce an empty board and an empty document on disk. Errors are only
    /// returned when the file exists but cannot be read, or when writing the
    /// empty document fails.
    pub fn load(&self) -> Result<LoadedBoard> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.initialize_empty()?;
                return Ok(LoadedBoard {
                    board: Board::new(),
                    outcome: LoadOutcome::Missing,
                });
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match parse_document(&bytes) {
            Ok(doc) => Ok(LoadedBoard {
                board: doc.into(),
                outcome: LoadOutcome::Loaded,
            }),
            Err(reason) => {
                tracing::warn!(path = %self.path.display(), %reason, "resetting unusable task file");
                self.initialize_empty()?;
                Ok(LoadedBoard {
                    board: Board::new(),
                    outcome: LoadOutcome::Reset(reason),
                })
            }
        }
    }

    /// Write the complete board, replacing the file
    pub fn save(&self, board: &Board) -> Result<()> {
        let content = serde_json::to_string_pretty(&BoardDocument::from(board))?;
        self.write(content.as_bytes())?;
        tracing::debug!(path = %self.path.display(), tasks = board.total(), "saved board");
        Ok(())
    }

    fn initialize_empty(&self) -> Result<()> {
        self.save(&Board::new())
    }

    /// Write to a sibling temp file, then rename it over the target so a
    /// failed write never leaves a truncated document behind.
    fn write(&self, content: &[u8]) -> Result<()> {
        let tmp = self.temp_path();
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(&tmp, content).map_err(write_err)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(e));
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Parse the document, returning why it is unusable on failure
fn parse_document(bytes: &[u8]) -> std::result::Result<BoardDocument, String> {
    let value: serde_json::Value = serde_json::from_slice(bytes).map_err(|e| format!("invalid JSON: {e}"))?;
    if !value.is_object() {
        return Err(format!("expected a JSON object, found {}", json_kind(&value)));
    }
    serde_json::from_value(value).map_err(|e| format!("unexpected document shape: {e}"))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
