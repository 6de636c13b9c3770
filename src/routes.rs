//! Routes module - Composizione dell'albero delle route
//!
//! Ogni dominio funzionale (student, staff, admin, module) espone un `RouteGroup`
//! che registra i propri endpoint su un sotto-router; il `RouteComposer` monta
//! ciascun gruppo sotto il suo prefisso e aggiunge `GET /health`.

use crate::core::{AppState, handle_response};
use axum::{
    Router,
    http::StatusCode,
    response::Response,
    routing::get,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{debug, info};

pub const HEALTH_PATH: &str = "/health";

/// Limite per richiesta, copre sia la lettura del body che la scrittura della risposta
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub type AppRouter = Router<Arc<AppState>>;

/// Capacità di registrare un insieme di endpoint su un sotto-router
pub trait RouteGroup: Send + Sync {
    fn register(&self, router: AppRouter) -> AppRouter;
}

impl<F> RouteGroup for F
where
    F: Fn(AppRouter) -> AppRouter + Send + Sync,
{
    fn register(&self, router: AppRouter) -> AppRouter {
        self(router)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("route prefix {0:?} is already mounted")]
    DuplicatePrefix(String),

    #[error("invalid route prefix {0:?}: must start with '/', must not end with '/' and must not shadow /health")]
    InvalidPrefix(String),
}

/// Builder dell'albero delle route, usato una sola volta all'avvio
#[derive(Default)]
pub struct RouteComposer {
    groups: Vec<(String, Box<dyn RouteGroup>)>,
}

impl RouteComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monta `group` sotto `prefix`. I prefissi sono case-sensitive e devono essere unici.
    pub fn mount(
        mut self,
        prefix: &str,
        group: impl RouteGroup + 'static,
    ) -> Result<Self, RouteError> {
        if !prefix.starts_with('/')
            || prefix.len() < 2
            || prefix.ends_with('/')
            || prefix == HEALTH_PATH
        {
            return Err(RouteError::InvalidPrefix(prefix.to_string()));
        }
        if self.groups.iter().any(|(existing, _)| existing == prefix) {
            return Err(RouteError::DuplicatePrefix(prefix.to_string()));
        }

        debug!("Mounting route group at {}", prefix);
        self.groups.push((prefix.to_string(), Box::new(group)));
        Ok(self)
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(prefix, _)| prefix.as_str())
    }

    /// Consuma il composer e produce il router finale con lo stato applicato
    pub fn build(self, state: Arc<AppState>) -> Router {
        let mut router: AppRouter = Router::new().route(HEALTH_PATH, get(health_check));

        for (prefix, group) in self.groups {
            router = router.nest(&prefix, group.register(Router::new()));
        }
        info!("Route tree composed");

        router
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                REQUEST_TIMEOUT,
            ))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state)
    }
}

/// Liveness probe, non controlla le dipendenze
pub async fn health_check() -> Response {
    handle_response(StatusCode::OK, "Server is healthy")
}
