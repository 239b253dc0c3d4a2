mod config;
mod routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let app = routes::app(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(
        port = config.port,
        site = %config.site_dir.display(),
        pkg = %config.pkg_dir.display(),
        "celebration listening"
    );
    axum::serve(listener, app).await.expect("server failed");
}
