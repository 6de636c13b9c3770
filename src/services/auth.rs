//! Auth services - Login e lettura degli account, condivisi dai gruppi student/staff/admin

use crate::core::{AppError, AppState, generate_role_jwt, handle_response_with_object};
use crate::dtos::{AccountDTO, LoginDTO, TokenDTO};
use crate::entities::AccountKind;
use crate::repositories::Read;
use axum::{Json, http::StatusCode, response::Response};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn login(
    state: &AppState,
    kind: AccountKind,
    body: LoginDTO,
) -> Result<Response, AppError> {
    // 1. Validare il DTO con validator (formato email, password non vuota)
    // 2. Cercare l'account nella tabella della tipologia richiesta tramite email
    // 3. Se l'account non esiste, ritornare errore UNAUTHORIZED
    // 4. Verificare la password con bcrypt, altrimenti UNAUTHORIZED
    // 5. Generare il token JWT con i dati pubblici dell'account e il ruolo
    // 6. Ritornare {"token": ...} come oggetto JSON
    body.validate()?;

    let account = match state.accounts(kind).find_by_email(&body.email).await? {
        Some(account) => account,
        None => {
            warn!("Login attempt for unknown account");
            return Err(AppError::unauthorized("Invalid email or password"));
        }
    };

    if !account.verify_password(&body.password) {
        warn!("Login attempt with wrong password");
        return Err(AppError::unauthorized("Invalid email or password"));
    }

    let token = generate_role_jwt(&AccountDTO::from(account), kind.role(), &state.jwt)?;

    info!("Login successful");
    handle_response_with_object(StatusCode::OK, &TokenDTO { token })
}

#[instrument(skip(state))]
pub async fn get_account(
    state: &AppState,
    kind: AccountKind,
    id: i32,
) -> Result<Json<AccountDTO>, AppError> {
    debug!("Fetching account by ID");
    match state.accounts(kind).read(&id).await? {
        Some(account) => Ok(Json(AccountDTO::from(account))),
        None => {
            warn!("Account not found");
            Err(AppError::not_found("Account not found"))
        }
    }
}
