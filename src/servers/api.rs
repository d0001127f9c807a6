//! REST API: restart, move and suggest under `/api`.

use axum::{
    extract::{rejection::PathRejection, ConnectInfo, Path, State},
    http::{Extensions, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::agent::{AgentResponse, MoveAdvisor};
use crate::game::{Board, Direction};
use crate::services::{GameService, Status};

pub const AGENT_FAILURE_DETAIL: &str = "Agent invocation failed";
pub const STORE_FAILURE_DETAIL: &str = "Game state unavailable";

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub game: Arc<GameService>,
    pub advisor: Arc<dyn MoveAdvisor>,
}

impl AppState {
    pub fn new(game: Arc<GameService>, advisor: Arc<dyn MoveAdvisor>) -> Self {
        Self { game, advisor }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResponse {
    pub board: Board,
    pub status: Option<Status>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    detail: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    fn unprocessable(rejection: PathRejection) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { detail: self.detail })).into_response()
    }
}

/// Routes relative to `/api`.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/restart", patch(restart))
        .route("/move/{direction}", patch(make_move))
        .route("/suggest/{num_suggestions}", post(suggest))
        .with_state(state)
}

/// Full application: API nested under `/api` with CORS applied.
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .nest("/api", api_router(state))
        .layer(cors_layer(allowed_origins))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

fn client_of(extensions: &Extensions) -> String {
    extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// PATCH /api/restart
async fn restart(
    State(state): State<AppState>,
    extensions: Extensions,
) -> Result<Json<GameResponse>, ApiError> {
    log::info!("/api/restart called; client={}", client_of(&extensions));

    let board = state.game.restart().map_err(|e| {
        log::error!("Restart failed: {}", e);
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, STORE_FAILURE_DETAIL)
    })?;

    Ok(Json(GameResponse {
        board,
        status: None,
    }))
}

/// PATCH /api/move/{direction}
async fn make_move(
    State(state): State<AppState>,
    extensions: Extensions,
    direction: Result<Path<Direction>, PathRejection>,
) -> Result<Json<GameResponse>, ApiError> {
    let Path(direction) = direction.map_err(ApiError::unprocessable)?;
    log::info!(
        "/api/move/{} called; client={}",
        direction,
        client_of(&extensions)
    );

    let outcome = state.game.make_move(direction).map_err(|e| {
        log::error!("Move {} failed: {}", direction, e);
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, STORE_FAILURE_DETAIL)
    })?;

    Ok(Json(GameResponse {
        board: outcome.board,
        status: outcome.status,
    }))
}

/// POST /api/suggest/{num_suggestions}
async fn suggest(
    State(state): State<AppState>,
    extensions: Extensions,
    num_suggestions: Result<Path<u32>, PathRejection>,
) -> Result<Json<AgentResponse>, ApiError> {
    let Path(num_suggestions) = num_suggestions.map_err(ApiError::unprocessable)?;
    log::info!("/api/suggest called; client={}", client_of(&extensions));

    match state.advisor.suggest(num_suggestions).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            log::error!("Agent invocation error: {}", e);
            Err(ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                AGENT_FAILURE_DETAIL,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Move;
    use crate::services::MemoryStore;
    use crate::{GameError, Result};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use std::sync::atomic::{AtomicU32, Ordering};
    use tower::ServiceExt;

    struct StubAdvisor {
        fail: bool,
        last_request: AtomicU32,
    }

    #[async_trait]
    impl MoveAdvisor for StubAdvisor {
        async fn suggest(&self, num_suggestions: u32) -> Result<AgentResponse> {
            self.last_request.store(num_suggestions, Ordering::SeqCst);
            if self.fail {
                return Err(GameError::Agent("Agent error".to_string()));
            }
            Ok(AgentResponse {
                recommended_moves: vec![Move {
                    direction: Direction::Up,
                    reasoning: "Test".to_string(),
                    confidence: 0.9,
                }],
                game_analysis: "Analysis".to_string(),
            })
        }
    }

    fn test_app(store: Arc<MemoryStore>, fail_agent: bool) -> (Router, Arc<StubAdvisor>) {
        let advisor = Arc::new(StubAdvisor {
            fail: fail_agent,
            last_request: AtomicU32::new(0),
        });
        let state = AppState::new(Arc::new(GameService::new(store)), advisor.clone());
        (create_router(state, &["http://localhost:3000".to_string()]), advisor)
    }

    async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_restart() {
        let store = Arc::new(MemoryStore::new());
        let (app, _) = test_app(store.clone(), false);

        let (status, body) = send(app, Method::PATCH, "/api/restart").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["status"].is_null());
        let board: Board = serde_json::from_value(body["board"].clone()).unwrap();
        assert_eq!(store.current(), Some(board));
    }

    #[tokio::test]
    async fn test_move_noop() {
        let board = Board([[2, 4, 0, 0], [4, 8, 0, 0], [0; 4], [0; 4]]);
        let store = Arc::new(MemoryStore::with_board(board));
        let (app, _) = test_app(store.clone(), false);

        let (status, body) = send(app, Method::PATCH, "/api/move/UP").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "NOOP");
        assert_eq!(body["board"], serde_json::to_value(board).unwrap());
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_move_continues() {
        let store = Arc::new(MemoryStore::with_board(Board([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]])));
        let (app, _) = test_app(store.clone(), false);

        let (status, body) = send(app, Method::PATCH, "/api/move/LEFT").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["status"].is_null());
        assert_eq!(body["board"][0][0], 2);
        assert_eq!(store.save_count(), 1);
    }

    #[tokio::test]
    async fn test_move_invalid_direction() {
        let store = Arc::new(MemoryStore::with_board(Board::empty()));
        let (app, _) = test_app(store.clone(), false);

        let (status, _) = send(app.clone(), Method::PATCH, "/api/move/hi").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let (status, _) = send(app, Method::PATCH, "/api/move/up").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(store.load_count(), 0);
    }

    #[tokio::test]
    async fn test_move_without_saved_game() {
        let (app, _) = test_app(Arc::new(MemoryStore::new()), false);

        let (status, body) = send(app, Method::PATCH, "/api/move/DOWN").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], STORE_FAILURE_DETAIL);
    }

    #[tokio::test]
    async fn test_suggest_success() {
        let (app, advisor) = test_app(Arc::new(MemoryStore::new()), false);

        let (status, body) = send(app, Method::POST, "/api/suggest/3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({
                "recommended_moves": [
                    {"direction": "UP", "reasoning": "Test", "confidence": 0.9}
                ],
                "game_analysis": "Analysis"
            })
        );
        assert_eq!(advisor.last_request.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_suggest_agent_error() {
        let (app, _) = test_app(Arc::new(MemoryStore::new()), true);

        let (status, body) = send(app, Method::POST, "/api/suggest/3").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], AGENT_FAILURE_DETAIL);
    }

    #[tokio::test]
    async fn test_suggest_input_error() {
        let (app, advisor) = test_app(Arc::new(MemoryStore::new()), false);

        let (status, _) = send(app, Method::POST, "/api/suggest/hi").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(advisor.last_request.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_wrong_method_rejected() {
        let (app, _) = test_app(Arc::new(MemoryStore::new()), false);

        let (status, _) = send(app, Method::GET, "/api/restart").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let (app, _) = test_app(Arc::new(MemoryStore::new()), false);

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/restart")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://localhost:3000"))
        );
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some(&HeaderValue::from_static("true"))
        );
    }
}
