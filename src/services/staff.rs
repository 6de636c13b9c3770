//! Staff services - Endpoint montati sotto /staff

use crate::core::{AppError, AppState, StrictJson};
use crate::dtos::{AccountDTO, LoginDTO};
use crate::entities::AccountKind;
use crate::routes::{AppRouter, RouteGroup};
use crate::services::auth::{get_account, login};
use axum::{
    Json,
    extract::{Path, State},
    response::Response,
    routing::{get, post},
};
use std::sync::Arc;

pub struct StaffRoutes;

impl RouteGroup for StaffRoutes {
    fn register(&self, router: AppRouter) -> AppRouter {
        router
            .route("/login", post(login_staff))
            .route("/{staff_id}", get(get_staff))
    }
}

pub async fn login_staff(
    State(state): State<Arc<AppState>>,
    StrictJson(body): StrictJson<LoginDTO>,
) -> Result<Response, AppError> {
    login(&state, AccountKind::Staff, body).await
}

pub async fn get_staff(
    State(state): State<Arc<AppState>>,
    Path(staff_id): Path<i32>,
) -> Result<Json<AccountDTO>, AppError> {
    get_account(&state, AccountKind::Staff, staff_id).await
}
