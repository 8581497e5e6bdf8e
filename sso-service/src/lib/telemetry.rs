use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;

use crate::config::Env;

/// Install the global tracing subscriber for `env`.
///
/// - `local`: human-readable text, debug
/// - `dev`: JSON lines, debug
/// - `prod`: human-readable text, info
///
/// `RUST_LOG` overrides the level filter in every environment.
pub fn init(env: Env) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    let registry = tracing_subscriber::registry().with(filter);

    match env {
        Env::Dev => registry.with(fmt::layer().json()).try_init(),
        Env::Local | Env::Prod => registry.with(fmt::layer()).try_init(),
    }
}

fn default_directives(env: Env) -> String {
    let level = match env {
        Env::Local | Env::Dev => "debug",
        Env::Prod => "info",
    };

    // Transport internals are noisy below info.
    format!("{level},h2=info,hyper=info,tower=info,sqlx=warn")
}
