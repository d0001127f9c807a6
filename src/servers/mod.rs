pub mod api;

pub use api::{api_router, create_router, AppState, GameResponse};
