use pawhaven::server::{config::Config, model::app::AppState, router, startup};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), pawhaven::server::error::Error> {
    let session = startup::connect_to_session(&config).await?;
    let db = startup::connect_to_database(&config).await?;

    let app = router::routes()
        .with_state(AppState { db })
        .layer(session);

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("Failed to listen for shutdown signal");
    }

    tracing::info!("Shutting down");
}
