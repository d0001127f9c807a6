//! Persistence of the single live board.
//!
//! The board is stored as a bare JSON grid: no wrapper object, no version.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::game::board::Board;
use crate::{GameError, Result};

pub const DEFAULT_STORE_PATH: &str = "store.json";

/// Load/save access to the persisted board.
pub trait BoardStore: Send + Sync {
    fn load(&self) -> Result<Board>;
    fn save(&self, board: &Board) -> Result<()>;
}

pub fn serialize_board(board: &Board) -> Result<String> {
    Ok(serde_json::to_string(board)?)
}

pub fn deserialize_board(contents: &str) -> Result<Board> {
    Ok(serde_json::from_str(contents)?)
}

// ============================================================================
// JSON FILE STORE
// ============================================================================

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

impl BoardStore for JsonFileStore {
    fn load(&self) -> Result<Board> {
        let contents = fs::read_to_string(&self.path)?;
        deserialize_board(&contents)
    }

    fn save(&self, board: &Board) -> Result<()> {
        fs::write(&self.path, serialize_board(board)?)?;
        log::debug!("Board saved to {}", self.path.display());
        Ok(())
    }
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// Store kept in process memory, with load/save counters.
///
/// Starts empty; `load` fails with `NotFound` until the first `save`, the same
/// way the file store does before its file exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    board: Mutex<Option<Board>>,
    loads: AtomicUsize,
    saves: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board(board: Board) -> Self {
        Self {
            board: Mutex::new(Some(board)),
            ..Self::default()
        }
    }

    pub fn current(&self) -> Option<Board> {
        *self.board.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl BoardStore for MemoryStore {
    fn load(&self) -> Result<Board> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.current().ok_or_else(|| {
            GameError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no board has been saved",
            ))
        })
    }

    fn save(&self, board: &Board) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.board.lock().unwrap_or_else(|e| e.into_inner()) = Some(*board);
        Ok(())
    }
}
