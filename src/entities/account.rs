//! Account entity - Studenti, staff e admin condividono la stessa forma

use bcrypt::verify;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Account {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Account {
    /// Verify if target_password matches the stored hashed password
    pub fn verify_password(&self, target_password: &str) -> bool {
        verify(target_password, &self.password).unwrap_or(false)
    }
}
