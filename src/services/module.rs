//! Module services - Moduli, iscrizioni (/module/enroll) e supervisioni (/module/supervise)

use crate::core::{AppError, AppState, StrictJson, handle_response, handle_response_with_object};
use crate::dtos::{
    CreateModuleDTO, EnrollDTO, EnrollmentDTO, ModuleDTO, ModuleFilterQuery, Page, PageQuery,
    SuperviseDTO, SupervisionDTO,
};
use crate::repositories::{Create, Read};
use crate::routes::{AppRouter, RouteGroup};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::get,
};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// I tre gruppi del dominio module, ognuno montato sotto un prefisso distinto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleRoutes {
    Modules,
    Enrollments,
    Supervisions,
}

impl ModuleRoutes {
    pub fn modules() -> Self {
        Self::Modules
    }

    pub fn enrollments() -> Self {
        Self::Enrollments
    }

    pub fn supervisions() -> Self {
        Self::Supervisions
    }
}

impl RouteGroup for ModuleRoutes {
    fn register(&self, router: AppRouter) -> AppRouter {
        match self {
            Self::Modules => router
                .route("/", get(list_modules).post(create_module))
                .route("/{module_id}", get(get_module)),
            Self::Enrollments => router.route("/", get(list_enrollments).post(enroll_student)),
            Self::Supervisions => {
                router.route("/", get(list_supervisions).post(assign_supervisor))
            }
        }
    }
}

#[instrument(skip(state))]
pub async fn list_modules(
    State(state): State<Arc<AppState>>,
    Query(paging): Query<PageQuery>, // ?page=&limit=
) -> Result<Response, AppError> {
    debug!("Listing modules");
    let (rows, total) = state.modules.list(&paging).await?;
    let page = Page::new(rows, &paging, total).map(ModuleDTO::from);
    info!("Found {} modules", page.rows.len());
    handle_response_with_object(StatusCode::OK, &page)
}

#[instrument(skip(state))]
pub async fn get_module(
    State(state): State<Arc<AppState>>,
    Path(module_id): Path<i32>,
) -> Result<Response, AppError> {
    match state.modules.read(&module_id).await? {
        Some(module) => handle_response_with_object(StatusCode::OK, &ModuleDTO::from(module)),
        None => {
            warn!("Module not found");
            Err(AppError::not_found("Module not found"))
        }
    }
}

#[debug_handler]
pub async fn create_module(
    State(state): State<Arc<AppState>>,
    StrictJson(body): StrictJson<CreateModuleDTO>,
) -> Result<Response, AppError> {
    body.validate()?;
    let module = state.modules.create(&body).await?;
    info!("Module {} created", module.code);
    handle_response_with_object(StatusCode::CREATED, &ModuleDTO::from(module))
}

#[instrument(skip(state), fields(module_id = %filter.module_id))]
pub async fn list_enrollments(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ModuleFilterQuery>, // ?moduleId=&page=&limit=
) -> Result<Response, AppError> {
    let paging = filter.paging();
    let (rows, total) = state
        .enrollments
        .list_by_module(filter.module_id, &paging)
        .await?;
    let page = Page::new(rows, &paging, total).map(EnrollmentDTO::from);
    handle_response_with_object(StatusCode::OK, &page)
}

#[instrument(skip(state, body), fields(module_id = %body.module_id, student_id = %body.student_id))]
pub async fn enroll_student(
    State(state): State<Arc<AppState>>,
    StrictJson(body): StrictJson<EnrollDTO>,
) -> Result<Response, AppError> {
    state.enrollments.create(&body).await?;
    info!("Student enrolled");
    Ok(handle_response(StatusCode::CREATED, "Student enrolled"))
}

#[instrument(skip(state), fields(module_id = %filter.module_id))]
pub async fn list_supervisions(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ModuleFilterQuery>,
) -> Result<Response, AppError> {
    let paging = filter.paging();
    let (rows, total) = state
        .supervisions
        .list_by_module(filter.module_id, &paging)
        .await?;
    let page = Page::new(rows, &paging, total).map(SupervisionDTO::from);
    handle_response_with_object(StatusCode::OK, &page)
}

#[instrument(skip(state, body), fields(module_id = %body.module_id, staff_id = %body.staff_id))]
pub async fn assign_supervisor(
    State(state): State<Arc<AppState>>,
    StrictJson(body): StrictJson<SuperviseDTO>,
) -> Result<Response, AppError> {
    state.supervisions.create(&body).await?;
    info!("Supervisor assigned");
    Ok(handle_response(StatusCode::CREATED, "Supervisor assigned"))
}
