//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//! Le query sono verificate a runtime (`query_as::<_, T>`), così la build non richiede un database.

pub mod account;
pub mod enrollment;
pub mod module;
pub mod supervision;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Read};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use account::AccountRepository;
pub use enrollment::EnrollmentRepository;
pub use module::ModuleRepository;
pub use supervision::SupervisionRepository;
