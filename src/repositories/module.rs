//! ModuleRepository - Repository per i moduli

use super::{Create, Read};
use crate::dtos::{CreateModuleDTO, PageQuery};
use crate::entities::Module;
use sqlx::{Error, MySqlPool};

/// La colonna è INT: un id fuori range indica uno schema incoerente
fn module_id(last_insert_id: u64) -> Result<i32, Error> {
    i32::try_from(last_insert_id).map_err(|e| Error::Decode(Box::new(e)))
}

pub struct ModuleRepository {
    connection_pool: MySqlPool,
}

impl ModuleRepository {
    pub fn new(connection_pool: MySqlPool) -> ModuleRepository {
        Self { connection_pool }
    }

    /// Lista dei moduli ordinata per id, con il conteggio totale per la paginazione
    pub async fn list(&self, paging: &PageQuery) -> Result<(Vec<Module>, i64), Error> {
        let rows = match paging.window() {
            Some((limit, offset)) => {
                sqlx::query_as::<_, Module>(
                    "SELECT id, code, name FROM modules ORDER BY id LIMIT ? OFFSET ?",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.connection_pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Module>("SELECT id, code, name FROM modules ORDER BY id")
                    .fetch_all(&self.connection_pool)
                    .await?
            }
        };

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM modules")
            .fetch_one(&self.connection_pool)
            .await?;

        Ok((rows, total))
    }
}

impl Create<Module, CreateModuleDTO> for ModuleRepository {
    async fn create(&self, data: &CreateModuleDTO) -> Result<Module, Error> {
        let result = sqlx::query("INSERT INTO modules (code, name) VALUES (?, ?)")
            .bind(&data.code)
            .bind(&data.name)
            .execute(&self.connection_pool)
            .await?;

        let id = module_id(result.last_insert_id())?;

        Ok(Module {
            id,
            code: data.code.clone(),
            name: data.name.clone(),
        })
    }
}

impl Read<Module, i32> for ModuleRepository {
    async fn read(&self, id: &i32) -> Result<Option<Module>, Error> {
        sqlx::query_as::<_, Module>("SELECT id, code, name FROM modules WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
