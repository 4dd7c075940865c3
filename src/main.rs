mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // `.env` is optional; real environment variables take precedence.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog=info,tower_http=info".into()),
        )
        .init();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    let port = config.port;
    tracing::info!(backend = %config.backend_url, timeout_secs = config.proxy_timeout.as_secs(), "catalog backend configured");

    let state = state::AppState::new(config).expect("http client init failed");
    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router init failed");
            std::process::exit(1);
        }
    };
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "catalog listening");
    axum::serve(listener, app).await.expect("server failed");
}
