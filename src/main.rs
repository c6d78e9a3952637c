mod app;
mod config;
mod dispatch;
mod logging;
mod scenario;
mod session;
mod state;
mod types;
mod ui;
mod utils;

use app::App;
use color_eyre::Result;
use session::Session;
use state::AppState;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Keep the guard alive or buffered log lines are dropped on exit
    let _log_guard = logging::init(Path::new("logs"))?;

    let config = config::Config::load().unwrap_or_default();
    let session_config = config.session_config();

    tracing::info!("{}", "=".repeat(80));
    tracing::info!("Application started");
    tracing::info!(base_url = %session_config.base_url, "API base URL");
    tracing::info!(
        api_key_configured = !session_config.api_key.is_empty(),
        "API key"
    );

    let app = App::new(AppState::new(Session::new(session_config)))?;

    let terminal = ratatui::init();
    let app_result = app.run(terminal).await;
    ratatui::restore();
    app_result
}
