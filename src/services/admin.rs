//! Admin services - Endpoint montati sotto /admin

use crate::core::{AppError, AppState, StrictJson};
use crate::dtos::LoginDTO;
use crate::entities::AccountKind;
use crate::routes::{AppRouter, RouteGroup};
use crate::services::auth::login;
use axum::{extract::State, response::Response, routing::post};
use std::sync::Arc;

pub struct AdminRoutes;

impl RouteGroup for AdminRoutes {
    fn register(&self, router: AppRouter) -> AppRouter {
        router.route("/login", post(login_admin))
    }
}

pub async fn login_admin(
    State(state): State<Arc<AppState>>,
    StrictJson(body): StrictJson<LoginDTO>,
) -> Result<Response, AppError> {
    login(&state, AccountKind::Admin, body).await
}
