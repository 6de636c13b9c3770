//! Services module - Route group dei domini funzionali
//!
//! Ogni sotto-modulo espone un `RouteGroup` con i propri handler HTTP;
//! `standard_routes` li monta sotto i prefissi pubblici dell'API.

pub mod admin;
pub mod auth;
pub mod module;
pub mod staff;
pub mod student;

// Re-exports per facilitare l'import
pub use admin::AdminRoutes;
pub use module::ModuleRoutes;
pub use staff::StaffRoutes;
pub use student::StudentRoutes;

use crate::routes::{RouteComposer, RouteError};

/// Composer con tutti i gruppi dell'applicazione montati
pub fn standard_routes() -> Result<RouteComposer, RouteError> {
    RouteComposer::new()
        .mount("/student", StudentRoutes)?
        .mount("/staff", StaffRoutes)?
        .mount("/admin", AdminRoutes)?
        .mount("/module", ModuleRoutes::modules())?
        .mount("/module/enroll", ModuleRoutes::enrollments())?
        .mount("/module/supervise", ModuleRoutes::supervisions())
}
