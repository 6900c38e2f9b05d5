use tracing::info;

pub async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");

    info!("🛑 Shutdown signal received, draining connections");
}
