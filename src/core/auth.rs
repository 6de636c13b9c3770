//! Token Issuer - Emissione dei token JWT firmati

use crate::core::error::TokenError;
use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Ruolo dell'utente a cui viene emesso il token (letto dal frontend)
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Staff,
    Admin,
}

// struct che codifica il contenuto del token jwt
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub exp: i64, // Expiry time of the token
    pub iss: String,
}

/// Parametri di firma, passati esplicitamente ad ogni emissione
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub ttl: Duration,
}

/// Emette un token per `payload` senza ruolo.
pub fn generate_jwt<T: Serialize>(payload: &T, config: &JwtConfig) -> Result<String, TokenError> {
    generate_jwt_at(payload, None, config, Utc::now())
}

/// Emette un token per `payload` con il claim `role`.
pub fn generate_role_jwt<T: Serialize>(
    payload: &T,
    role: Role,
    config: &JwtConfig,
) -> Result<String, TokenError> {
    generate_jwt_at(payload, Some(role), config, Utc::now())
}

/// Firma HS256 con scadenza `now + ttl`. A parità di input il token è identico byte per byte.
#[instrument(skip(payload, config), fields(issuer = %config.issuer))]
pub fn generate_jwt_at<T: Serialize>(
    payload: &T,
    role: Option<Role>,
    config: &JwtConfig,
    now: DateTime<Utc>,
) -> Result<String, TokenError> {
    debug!("Encoding JWT token");
    if config.secret.is_empty() {
        error!("Failed to encode JWT token: secret is not configured");
        return Err(TokenError::MissingSecret);
    }

    let ttl = i64::try_from(config.ttl.as_secs()).unwrap_or(i64::MAX);
    let claims = Claims {
        data: payload,
        role,
        exp: now.timestamp().saturating_add(ttl),
        iss: config.issuer.clone(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| {
        error!("Failed to encode JWT token: {:?}", e);
        TokenError::Signing(e)
    })
}
