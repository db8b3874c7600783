#![recursion_limit = "256"]
mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    let port = config.port;

    let state = state::AppState::new(config);
    {
        let vault = state.vault.read().await;
        tracing::info!(status = ?vault.status(), session = vault.session_id().is_some(), "vault initialized");
    }

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "identra host listening");
    axum::serve(listener, app).await.expect("server failed");
}
