//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).
//! I nomi dei campi in uscita seguono quelli letti dal frontend (`ID`, `Name`, ...).

pub mod account;
pub mod module;
pub mod pagination;
pub mod query;

// Re-exports per facilitare l'import
pub use account::{AccountDTO, LoginDTO, TokenDTO};
pub use module::{
    CreateModuleDTO, EnrollDTO, EnrollmentDTO, ModuleDTO, StaffSummaryDTO, SuperviseDTO,
    SupervisionDTO,
};
pub use pagination::Page;
pub use query::{ModuleFilterQuery, PageQuery};
