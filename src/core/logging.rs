//! Logging - Inizializzazione di tracing in base a RUN_ENV

use crate::core::config::RunEnv;
use tracing_subscriber::{EnvFilter, fmt};

fn default_filter(run_env: RunEnv) -> &'static str {
    match run_env {
        RunEnv::Production => "review_server=info,tower_http=info,sqlx=warn",
        RunEnv::Development => "review_server=debug,tower_http=debug,sqlx=info",
    }
}

/// Installa il subscriber globale. `RUST_LOG` ha la precedenza sul filtro di default.
/// Da chiamare una sola volta, all'avvio del processo.
pub fn init_logging(run_env: RunEnv) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(run_env)));

    let builder = fmt().with_env_filter(filter).with_target(true);
    let result = match run_env {
        RunEnv::Production => builder.with_ansi(false).compact().try_init(),
        RunEnv::Development => builder.pretty().try_init(),
    };

    // un subscriber già installato (es. nei test) non è un errore
    if let Err(e) = result {
        eprintln!("Logging already initialized: {e}");
    }
}
