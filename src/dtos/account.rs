//! Account DTOs - Data Transfer Objects per studenti, staff e admin

use crate::entities::Account;
use serde::{Deserialize, Serialize};
use validator::Validate;

// struct per gestire io col client, mai con la password
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AccountDTO {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<Account> for AccountDTO {
    fn from(value: Account) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
        }
    }
}

/// DTO per il login (solo email e password)
#[derive(Deserialize, Debug, Validate)]
#[serde(deny_unknown_fields)]
pub struct LoginDTO {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Risposta del login
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenDTO {
    pub token: String,
}
