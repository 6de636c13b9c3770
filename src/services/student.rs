//! Student services - Endpoint montati sotto /student

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

pub struct StudentRoutes;

impl RouteGroup for StudentRoutes {
    fn register(&self, router: AppRouter) -> AppRouter {
        router
            .route("/login", post(login_student))
            .route("/{student_id}", get(get_student))
    }
}

pub async fn login_student(
    State(state): State<Arc<AppState>>,
    StrictJson(body): StrictJson<LoginDTO>,
) -> Result<Response, AppError> {
    login(&state, AccountKind::Student, body).await
}

pub async fn get_student(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i32>, // parametro dalla URL /student/:student_id
) -> Result<Json<AccountDTO>, AppError> {
    get_account(&state, AccountKind::Student, student_id).await
}
