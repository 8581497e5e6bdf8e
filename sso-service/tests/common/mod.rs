use sqlx::SqlitePool;
use sso_service::app::App;
use sso_service::config::AuthConfig;
use sso_service::config::Config;
use sso_service::config::DatabaseConfig;
use sso_service::config::Env;
use sso_service::config::ServerConfig;
use sso_service::outbound::repositories::connect;
use sso_service::outbound::repositories::connect_in_memory;
use sso_service::proto::auth_client::AuthClient;
use sso_service::proto::RegisterRequest;
use tempfile::TempDir;
use tonic::transport::Channel;

pub const APP_ID: i32 = 1;
pub const APP_SECRET: &str = "test-secret";
pub const TOKEN_TTL_SECONDS: u64 = 3600;

/// Test application that spawns a real gRPC server
pub struct TestApp {
    pub address: String,
    pub client: AuthClient<Channel>,
    pub pool: SqlitePool,
    _data_dir: Option<TempDir>,
}

impl TestApp {
    /// Spawn the server on a random port over a fresh in-memory database
    pub async fn spawn() -> Self {
        let pool = connect_in_memory()
            .await
            .expect("Failed to create test database");

        Self::start(pool, None).await
    }

    /// Spawn the server over a database file shared by several pooled connections
    pub async fn spawn_on_disk() -> Self {
        let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.path().join("sso.db").display()
        );

        let pool = connect(&url, 4)
            .await
            .expect("Failed to create test database");

        Self::start(pool, Some(data_dir)).await
    }

    async fn start(pool: SqlitePool, data_dir: Option<TempDir>) -> Self {
        provision_app(&pool, APP_ID, "test", APP_SECRET).await;

        let config = Config {
            env: Env::Local,
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: pool.options().get_max_connections(),
            },
            server: ServerConfig {
                grpc_port: 0,
                timeout_seconds: 10,
            },
            auth: AuthConfig {
                token_ttl_seconds: TOKEN_TTL_SECONDS,
            },
        };

        let app = App::with_pool(pool.clone(), &config)
            .await
            .expect("Failed to build application");

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            app.serve(listener, std::future::pending())
                .await
                .expect("Server error");
        });

        let client = AuthClient::connect(address.clone())
            .await
            .expect("Failed to connect to gRPC server");

        Self {
            address,
            client,
            pool,
            _data_dir: data_dir,
        }
    }

    /// Register a user and return its id
    pub async fn register(&self, email: &str, password: &str) -> i64 {
        self.client
            .clone()
            .register(RegisterRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
            .expect("Failed to register user")
            .into_inner()
            .user_id
    }

    /// Grant the administrator flag directly in storage
    pub async fn make_admin(&self, user_id: i64) {
        sqlx::query("UPDATE users SET is_admin = TRUE WHERE id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .expect("Failed to flag admin");
    }
}

pub async fn provision_app(pool: &SqlitePool, id: i32, name: &str, secret: &str) {
    sqlx::query("INSERT INTO apps (id, name, secret) VALUES (?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(secret)
        .execute(pool)
        .await
        .expect("Failed to provision application");
}

pub fn random_email() -> String {
    format!("{}@example.com", uuid::Uuid::new_v4().simple())
}

pub fn random_password() -> String {
    format!("P4ss-{}", &uuid::Uuid::new_v4().simple().to_string()[..10])
}
