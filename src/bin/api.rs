use medbrief::api::{AppState, router};
use medbrief::core::config::AppConfig;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    medbrief::setup_logging();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("FATAL ERROR: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::from_config(&config)?;
    let addr = config.socket_addr().map_err(anyhow::Error::msg)?;

    info!(
        %addr,
        model = %config.llm_model,
        classifier_threshold = config.classifier_threshold,
        classifier_fail_open = config.classifier_fail_open,
        ocr_min_chars = config.ocr_min_chars,
        "Server is starting"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router(state, config.max_upload_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
