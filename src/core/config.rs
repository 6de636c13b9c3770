//! Configuration - Variabili d'ambiente e argomenti da linea di comando

use crate::core::auth::JwtConfig;
use crate::core::error::ServerError;
use clap::Parser;
use dotenv::dotenv;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::{info, warn};

const DEFAULT_GRACEFUL_TIMEOUT: &str = "15s";

/// Argomenti da linea di comando
#[derive(Debug, Clone, Parser)]
#[command(name = "review-server", about = "Peer review platform API server")]
pub struct Args {
    /// the duration for which the server gracefully wait for existing connections to finish - e.g. 15s or 1m
    #[arg(long = "graceful-timeout", default_value = DEFAULT_GRACEFUL_TIMEOUT, value_parser = parse_duration)]
    pub graceful_timeout: Duration,
}

/// Ambiente di esecuzione, seleziona il formato dei log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnv {
    Development,
    Production,
}

impl RunEnv {
    /// Legge `RUN_ENV` (dopo aver caricato `.env`), prima che il logging sia attivo
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::parse(&env::var("RUN_ENV").unwrap_or_default())
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub jwt_ttl_secs: u64,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub run_env: RunEnv,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, ServerError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Costruisce la configurazione da una sorgente qualsiasi di chiavi/valori
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ServerError::Config("DATABASE_URL must be set".to_string()))?;

        // niente default: senza segreto l'emissione dei token fallisce
        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            warn!("JWT_SECRET not set, token issuance will fail");
            String::new()
        });

        let jwt_issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "test".to_string());

        let jwt_ttl_secs = lookup("JWT_TTL_SECS")
            .unwrap_or_else(|| "15000".to_string())
            .parse::<u64>()
            .map_err(|_| {
                ServerError::Config("Invalid JWT_TTL_SECS: must be a positive number".to_string())
            })?;

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "5000".to_string())
            .parse::<u16>()
            .map_err(|_| {
                ServerError::Config(
                    "Invalid SERVER_PORT: must be a number between 0-65535".to_string(),
                )
            })?;

        let max_connections = lookup("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u32>()
            .map_err(|_| {
                ServerError::Config(
                    "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string(),
                )
            })?;

        let run_env = RunEnv::parse(&lookup("RUN_ENV").unwrap_or_default());

        Ok(Config {
            database_url,
            jwt_secret,
            jwt_issuer,
            jwt_ttl_secs,
            server_host,
            server_port,
            max_connections,
            run_env,
        })
    }

    /// Indirizzo su cui il listener effettua il bind
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let ip: IpAddr = self.server_host.parse().map_err(|_| {
            ServerError::Config(format!("Invalid SERVER_HOST: {}", self.server_host))
        })?;
        Ok(SocketAddr::new(ip, self.server_port))
    }

    pub fn jwt(&self) -> JwtConfig {
        JwtConfig {
            secret: self.jwt_secret.clone(),
            issuer: self.jwt_issuer.clone(),
            ttl: Duration::from_secs(self.jwt_ttl_secs),
        }
    }

    /// Logga la configurazione (nascondendo i segreti)
    pub fn log_summary(&self) {
        info!(
            environment = self.run_env.as_str(),
            address = %format!("{}:{}", self.server_host, self.server_port),
            database = %Self::mask_url(&self.database_url),
            max_connections = self.max_connections,
            jwt_secret_configured = !self.jwt_secret.is_empty(),
            "Server configuration loaded"
        );
    }

    /// Maschera l'URL del database per il logging
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.find('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        "***".to_string()
    }
}

/// Parser per le durate in formato letterale (`15s`, `1m`, `500ms`, `1h30m`).
/// Un numero senza unità è interpretato in secondi.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty duration".to_string());
    }
    if let Ok(secs) = input.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }

    let mut total = Duration::ZERO;
    let mut rest = input;
    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| format!("missing unit in duration {input:?}"))?;
        if digits == 0 {
            return Err(format!("invalid duration {input:?}"));
        }
        let value: u64 = rest[..digits]
            .parse()
            .map_err(|_| format!("invalid number in duration {input:?}"))?;
        rest = &rest[digits..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(rest.len());
        let secs_per_unit = match &rest[..unit_len] {
            "ms" => None,
            "s" => Some(1),
            "m" => Some(60),
            "h" => Some(60 * 60),
            unit => return Err(format!("unknown unit {unit:?} in duration {input:?}")),
        };
        let part = match secs_per_unit {
            None => Some(Duration::from_millis(value)),
            Some(factor) => value.checked_mul(factor).map(Duration::from_secs),
        };
        total = part
            .and_then(|part| total.checked_add(part))
            .ok_or_else(|| format!("duration out of range {input:?}"))?;
        rest = &rest[unit_len..];
    }
    Ok(total)
}
