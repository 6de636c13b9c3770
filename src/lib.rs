//! Server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod routes;
pub mod server;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use core::{AppError, AppState, ServerError};
pub use routes::{RouteComposer, RouteGroup};
pub use server::{LifecycleState, Server, ShutdownOutcome};

use axum::Router;
use routes::RouteError;
use std::sync::Arc;

/// Crea il router principale dell'applicazione con tutti i route group montati
pub fn create_router(state: Arc<AppState>) -> Result<Router, RouteError> {
    Ok(services::standard_routes()?.build(state))
}
