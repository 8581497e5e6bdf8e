use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

use crate::config::Config;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::service::AuthService;
use crate::inbound::grpc::AuthGrpcService;
use crate::outbound::repositories;
use crate::outbound::repositories::SqliteApplicationRepository;
use crate::outbound::repositories::SqliteUserRepository;
use crate::proto::auth_server::AuthServer;

pub type SqliteAuthService =
    AuthService<SqliteUserRepository, SqliteUserRepository, SqliteApplicationRepository>;

/// Errors that prevent the service from starting or keep it from serving.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Storage initialization failed: {0}")]
    StorageInit(#[from] sqlx::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Applications without signing secret: {0:?}")]
    MissingSigningSecret(Vec<i32>),

    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fully wired gRPC application.
pub struct App {
    service: Arc<SqliteAuthService>,
    timeout: Duration,
}

impl App {
    /// Open storage and wire the service.
    ///
    /// # Errors
    /// * `StorageInit` - Database unreachable or migrations failed
    /// * `MissingSigningSecret` - A provisioned application cannot sign tokens
    pub async fn build(config: &Config) -> Result<Self, BootstrapError> {
        let pool =
            repositories::connect(&config.database.url, config.database.max_connections).await?;
        tracing::info!(
            max_connections = config.database.max_connections,
            database = "sqlite",
            "Storage initialized"
        );

        Self::with_pool(pool, config).await
    }

    /// Wire the service over an already migrated pool.
    pub async fn with_pool(pool: SqlitePool, config: &Config) -> Result<Self, BootstrapError> {
        let app_repository = SqliteApplicationRepository::new(pool.clone());

        let without_secret = app_repository.find_without_secret().await?;
        if !without_secret.is_empty() {
            return Err(BootstrapError::MissingSigningSecret(
                without_secret.into_iter().map(|id| id.0).collect(),
            ));
        }

        let user_repository = Arc::new(SqliteUserRepository::new(pool));

        let service = Arc::new(AuthService::new(
            Arc::clone(&user_repository),
            user_repository,
            Arc::new(app_repository),
            config.auth.token_ttl(),
            tracing::info_span!("auth"),
        ));

        Ok(Self {
            service,
            timeout: config.server.timeout(),
        })
    }

    /// Serve gRPC on `listener` until `shutdown` resolves, then drain in-flight calls.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), BootstrapError>
    where
        F: Future<Output = ()> + Send,
    {
        let address = listener.local_addr()?;
        tracing::info!(address = %address, protocol = "grpc", "gRPC server listening");

        Server::builder()
            .timeout(self.timeout)
            .add_service(AuthServer::new(AuthGrpcService::new(self.service)))
            .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
            .await?;

        tracing::info!(address = %address, "gRPC server stopped");

        Ok(())
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!(signal = "SIGINT", "stopping application"),
        _ = terminate => tracing::info!(signal = "SIGTERM", "stopping application"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;
    use crate::config::DatabaseConfig;
    use crate::config::Env;
    use crate::config::ServerConfig;
    use crate::outbound::repositories::connect_in_memory;

    fn config() -> Config {
        Config {
            env: Env::Local,
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            server: ServerConfig {
                grpc_port: 0,
                timeout_seconds: 5,
            },
            auth: AuthConfig {
                token_ttl_seconds: 60,
            },
        }
    }

    #[tokio::test]
    async fn test_with_pool_rejects_application_without_secret() {
        let pool = connect_in_memory().await.unwrap();
        sqlx::query("INSERT INTO apps (id, name, secret) VALUES (3, 'broken', '')")
            .execute(&pool)
            .await
            .unwrap();

        let result = App::with_pool(pool, &config()).await;

        assert!(matches!(
            result,
            Err(BootstrapError::MissingSigningSecret(ids)) if ids == vec![3]
        ));
    }

    #[tokio::test]
    async fn test_build_with_in_memory_database() {
        assert!(App::build(&config()).await.is_ok());
    }
}
