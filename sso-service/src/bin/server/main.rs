use sso_service::app::shutdown_signal;
use sso_service::app::App;
use sso_service::config::Config;
use sso_service::telemetry;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load()?;

    telemetry::init(config.env)?;

    tracing::info!(
        service = "sso",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    tracing::info!(
        env = ?config.env,
        database_url = %config.database.url,
        grpc_port = config.server.grpc_port,
        timeout_seconds = config.server.timeout_seconds,
        token_ttl_seconds = config.auth.token_ttl_seconds,
        "Configuration loaded"
    );

    let app = App::build(&config).await?;

    let grpc_address = format!("0.0.0.0:{}", config.server.grpc_port);
    let listener = tokio::net::TcpListener::bind(&grpc_address).await?;

    app.serve(listener, shutdown_signal()).await?;

    tracing::info!("Application stopped");

    Ok(())
}
