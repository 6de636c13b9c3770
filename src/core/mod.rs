//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Emissione dei token JWT
//! - Configurazione e logging
//! - Codec JSON e risposte
//! - Gestione errori
//! - Pool del database e stato applicazione

pub mod auth;
pub mod codec;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::{Claims, JwtConfig, Role, generate_jwt, generate_role_jwt};
pub use codec::{StrictJson, decode_body, handle_response, handle_response_with_object};
pub use config::{Args, Config, RunEnv};
pub use error::{AppError, ServerError, TokenError};
pub use state::AppState;
