pub mod game_service;
pub mod store;

pub use game_service::{GameService, MoveOutcome, Status};
pub use store::{BoardStore, JsonFileStore, MemoryStore, DEFAULT_STORE_PATH};
