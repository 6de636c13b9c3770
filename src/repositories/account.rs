//! AccountRepository - Repository per studenti, staff e admin

use super::Read;
use crate::entities::{Account, AccountKind};
use sqlx::{Error, MySqlPool};

pub struct AccountRepository {
    connection_pool: MySqlPool,
    kind: AccountKind,
}

impl AccountRepository {
    pub fn new(connection_pool: MySqlPool, kind: AccountKind) -> AccountRepository {
        Self {
            connection_pool,
            kind,
        }
    }

    /// considero l'email univoca
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, Error> {
        let query = format!(
            "SELECT id, name, email, password FROM {} WHERE email = ?",
            self.kind.table()
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(email)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl Read<Account, i32> for AccountRepository {
    async fn read(&self, id: &i32) -> Result<Option<Account>, Error> {
        let query = format!(
            "SELECT id, name, email, password FROM {} WHERE id = ?",
            self.kind.table()
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
