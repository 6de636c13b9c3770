//! Module entities - Moduli, iscrizioni e supervisioni

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Module {
    pub id: i32,
    pub code: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Enrollment {
    pub module_id: i32,
    pub student_id: i32,
}

/// Riga di supervisione con i dati dello staff già uniti (JOIN)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SupervisionRow {
    pub module_id: i32,
    pub staff_id: i32,
    pub staff_name: String,
    pub staff_email: String,
}
