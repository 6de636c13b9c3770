//! Enumerazioni - Tipi enumerati utilizzati nelle entità

use crate::core::auth::Role;

/// Tipologia di account: ognuna vive in una tabella dedicata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Student,
    Staff,
    Admin,
}

impl AccountKind {
    pub fn table(&self) -> &'static str {
        match self {
            Self::Student => "students",
            Self::Staff => "staff",
            Self::Admin => "admins",
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Self::Student => Role::Student,
            Self::Staff => Role::Staff,
            Self::Admin => Role::Admin,
        }
    }
}
