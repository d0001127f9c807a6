use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

use twenty48_server::agent::{AgentConfig, GameAgent, GroqClient, GroqConfig};
use twenty48_server::logging::setup_logging;
use twenty48_server::services::{GameService, JsonFileStore, DEFAULT_STORE_PATH};
use twenty48_server::{create_router, AppState};

#[derive(Parser, Debug)]
#[command(name = "twenty48_server", version, about)]
struct Config {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short = 'p', long, default_value_t = 8000)]
    port: u16,

    /// JSON file holding the current board
    #[arg(long, default_value = DEFAULT_STORE_PATH)]
    store_path: PathBuf,

    /// Write rotated log files here instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Comma-separated origins allowed by CORS
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',', default_value = "")]
    allowed_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let _logger = setup_logging(config.log_dir.as_deref())?;

    let store = Arc::new(JsonFileStore::new(&config.store_path));
    log::info!("Board store: {}", store.path().display());

    let agent_config = AgentConfig::from_env()?;
    log::info!(
        "Suggestion model: {} (temperature {})",
        agent_config.model,
        agent_config.temperature
    );
    let backend = Arc::new(GroqClient::new(GroqConfig::from_env())?);
    let agent = GameAgent::new(agent_config, store.clone(), backend);

    let state = AppState::new(Arc::new(GameService::new(store)), Arc::new(agent));
    let app = create_router(state, &config.allowed_origins);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    log::info!("🌐 2048 API listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
