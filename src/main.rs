use clap::Parser;
use review_server::core::{Args, Config, RunEnv, ServerError, db, logging};
use review_server::{AppState, Server, create_router};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init_logging(RunEnv::from_env());

    if let Err(e) = run(args).await {
        error!("Server failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), ServerError> {
    info!("Starting server");
    let config = Config::from_env()?;
    config.log_summary();

    let pool = db::init_pool(&config).await?;
    let state = Arc::new(AppState::new(pool, config.jwt()));
    let router = create_router(state.clone())?;

    // il server chiude lo stesso pool condiviso dai repository
    let server = Server::bind(
        config.socket_addr()?,
        router,
        state.pool.clone(),
        args.graceful_timeout,
    )
    .await?;
    let outcome = server.run().await;
    info!(?outcome, "Server stopped");
    Ok(())
}
