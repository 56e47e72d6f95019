use estaciones_web::client::{
    MockStationRepository, StationClient, StationClientConfig, StationRepository,
};
use estaciones_web::config::AppConfig;
use estaciones_web::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("estaciones_web=info,tower_http=info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };

    let result = match &config.mock_data {
        Some(path) => match MockStationRepository::from_file(path) {
            Ok(repo) => {
                tracing::info!(path = %path.display(), "using in-memory stations");
                serve(repo, &config).await
            }
            Err(e) => Err(e.to_string()),
        },
        None => {
            let client_config =
                StationClientConfig::new(&config.api_url).with_timeout(config.timeout_secs);
            match StationClient::new(client_config) {
                Ok(client) => {
                    tracing::info!(api = %client.base_url(), "using stations backend");
                    serve(client, &config).await
                }
                Err(e) => Err(e.to_string()),
            }
        }
    };

    if let Err(message) = result {
        tracing::error!(error = %message, "server stopped");
        std::process::exit(1);
    }
}

/// Bind and serve until the process is stopped.
async fn serve<R: StationRepository + 'static>(repo: R, config: &AppConfig) -> Result<(), String> {
    let app = create_router(AppState::new(repo), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| format!("failed to bind {}: {e}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, "Clima App listening");
    tracing::info!("Routes:");
    tracing::info!("  GET       /              - station list");
    tracing::info!("  GET/POST  /agregar       - create a station");
    tracing::info!("  GET/POST  /editar/:id    - edit a station");
    tracing::info!("  GET/POST  /eliminar/:id  - delete a station");

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("server error: {e}"))
}
