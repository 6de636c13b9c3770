//! Application State - Contesto esplicito dell'applicazione
//!
//! Contiene il pool, i repository e la configurazione JWT. Viene costruito
//! una volta all'avvio e condiviso (`Arc`) tra tutte le route.

use crate::core::auth::JwtConfig;
use crate::entities::AccountKind;
use crate::repositories::{
    AccountRepository, EnrollmentRepository, ModuleRepository, SupervisionRepository,
};
use sqlx::MySqlPool;

pub struct AppState {
    /// Pool di connessioni condiviso, chiuso dal server durante il drain
    pub pool: MySqlPool,

    pub students: AccountRepository,
    pub staff: AccountRepository,
    pub admins: AccountRepository,
    pub modules: ModuleRepository,
    pub enrollments: EnrollmentRepository,
    pub supervisions: SupervisionRepository,

    /// Parametri di firma dei token, letti ad ogni emissione
    pub jwt: JwtConfig,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito.
    pub fn new(pool: MySqlPool, jwt: JwtConfig) -> Self {
        Self {
            students: AccountRepository::new(pool.clone(), AccountKind::Student),
            staff: AccountRepository::new(pool.clone(), AccountKind::Staff),
            admins: AccountRepository::new(pool.clone(), AccountKind::Admin),
            modules: ModuleRepository::new(pool.clone()),
            enrollments: EnrollmentRepository::new(pool.clone()),
            supervisions: SupervisionRepository::new(pool.clone()),
            pool,
            jwt,
        }
    }

    /// Repository degli account per la tipologia richiesta
    pub fn accounts(&self, kind: AccountKind) -> &AccountRepository {
        match kind {
            AccountKind::Student => &self.students,
            AccountKind::Staff => &self.staff,
            AccountKind::Admin => &self.admins,
        }
    }
}
