//! Game state machine over the persisted board.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::game::{init_board_with, is_lose, is_win, move_board, spawn_tile_with, Board, Direction};
use crate::services::store::BoardStore;
use crate::Result;

/// Terminal or no-op outcome of a move; `None` means the game continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Win,
    Lose,
    Noop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub status: Option<Status>,
}

pub struct GameService {
    store: Arc<dyn BoardStore>,
    // serializes load-modify-save across concurrent requests
    session: Mutex<()>,
}

impl GameService {
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self {
            store,
            session: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &Arc<dyn BoardStore> {
        &self.store
    }

    fn lock_session(&self) -> MutexGuard<'_, ()> {
        self.session.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn restart(&self) -> Result<Board> {
        self.restart_with(&mut rand::rng())
    }

    pub fn restart_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board> {
        let _session = self.lock_session();
        let board = init_board_with(rng);
        self.store.save(&board)?;
        log::info!("New game started");
        Ok(board)
    }

    pub fn make_move(&self, direction: Direction) -> Result<MoveOutcome> {
        self.make_move_with(direction, &mut rand::rng())
    }

    /// Applies `direction` to the stored board.
    ///
    /// Only a changed, non-terminal board is written back. Win and lose are
    /// checked after the new tile is spawned.
    pub fn make_move_with<R: Rng + ?Sized>(
        &self,
        direction: Direction,
        rng: &mut R,
    ) -> Result<MoveOutcome> {
        let _session = self.lock_session();
        let board = self.store.load()?;

        let after_move = move_board(&board, direction);
        if after_move == board {
            log::debug!("Move {} changed nothing", direction);
            return Ok(MoveOutcome {
                board,
                status: Some(Status::Noop),
            });
        }

        let after_tile = spawn_tile_with(after_move, rng);
        if is_win(&after_tile) {
            log::info!("Game won with move {}", direction);
            return Ok(MoveOutcome {
                board: after_tile,
                status: Some(Status::Win),
            });
        }
        if is_lose(&after_tile) {
            log::info!("Game lost after move {}", direction);
            return Ok(MoveOutcome {
                board: after_tile,
                status: Some(Status::Lose),
            });
        }

        self.store.save(&after_tile)?;
        Ok(MoveOutcome {
            board: after_tile,
            status: None,
        })
    }
}
