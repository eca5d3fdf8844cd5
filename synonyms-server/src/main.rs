use std::sync::Arc;

use anyhow::{Context, Result};
use synonyms::config::{ConfigLoader, SynonymsConfig};
use synonyms::logging::parse_log_level;
use synonyms::store::{InMemorySynonymStore, SynonymStore, load_groups, seed_store};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use synonyms_server::cli::CliArgs;
use synonyms_server::config::ServerConfig;
use synonyms_server::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    let server_config = ServerConfig::from_cli_and_env(cli_args.clone())?;
    let config = load_library_config(&server_config, &cli_args)?;

    // Keeps the file writer alive until shutdown
    let _log_guard = synonyms::logging::init(&config.logging)?;

    info!("Starting synonyms server v{}", synonyms::VERSION);

    let store: Arc<dyn SynonymStore> = Arc::new(InMemorySynonymStore::new());

    if let Some(seed_file) = &config.store.seed_file {
        info!("Loading synonym dictionary from {}", seed_file.display());
        let groups = load_groups(seed_file)?;
        seed_store(store.as_ref(), &groups);
    }

    let stats = store.stats();
    info!(words = stats.words, links = stats.links, "Synonym store ready");

    let app_state = Arc::new(
        AppState::new(store, server_config.clone())
            .with_default_max_depth(config.store.default_max_depth),
    );

    let app = create_router(app_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr = server_config.bind_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on {}", addr);
    info!("API documentation available at http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Build the library configuration from files, environment and CLI overrides
fn load_library_config(server_config: &ServerConfig, cli_args: &CliArgs) -> Result<SynonymsConfig> {
    let log_level = cli_args
        .log_level
        .as_deref()
        .map(parse_log_level)
        .transpose()?;

    let loader = match &server_config.config_file {
        Some(config_file) => ConfigLoader::new().with_file(config_file)?,
        None => ConfigLoader::new().with_default_files(),
    };

    let config = loader
        .with_env()
        .with_seed_file(cli_args.seed_file.clone())
        .with_default_max_depth(cli_args.default_max_depth)
        .with_log_level(log_level)
        .load()?;

    Ok(config)
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to register SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
