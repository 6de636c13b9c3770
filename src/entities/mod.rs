//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database.

pub mod account;
pub mod enums;
pub mod module;

// Re-exports per facilitare l'import
pub use account::Account;
pub use enums::AccountKind;
pub use module::{Enrollment, Module, SupervisionRow};
