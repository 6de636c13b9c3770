//! SupervisionRepository - Assegnazione dello staff ai moduli

use super::Create;
use crate::dtos::{PageQuery, SuperviseDTO};
use crate::entities::SupervisionRow;
use sqlx::{Error, MySqlPool};

const SELECT_SUPERVISIONS: &str = "SELECT s.module_id, s.staff_id, st.name AS staff_name, \
     st.email AS staff_email FROM supervisions s JOIN staff st ON st.id = s.staff_id \
     WHERE s.module_id = ? ORDER BY s.staff_id";

pub struct SupervisionRepository {
    connection_pool: MySqlPool,
}

impl SupervisionRepository {
    pub fn new(connection_pool: MySqlPool) -> SupervisionRepository {
        Self { connection_pool }
    }

    pub async fn list_by_module(
        &self,
        module_id: i32,
        paging: &PageQuery,
    ) -> Result<(Vec<SupervisionRow>, i64), Error> {
        let rows = match paging.window() {
            Some((limit, offset)) => {
                let query = format!("{SELECT_SUPERVISIONS} LIMIT ? OFFSET ?");
                sqlx::query_as::<_, SupervisionRow>(&query)
                    .bind(module_id)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.connection_pool)
                    .await?
            }
            None => {
                sqlx::query_as::<_, SupervisionRow>(SELECT_SUPERVISIONS)
                    .bind(module_id)
                    .fetch_all(&self.connection_pool)
                    .await?
            }
        };

        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM supervisions WHERE module_id = ?")
                .bind(module_id)
                .fetch_one(&self.connection_pool)
                .await?;

        Ok((rows, total))
    }
}

impl Create<(), SuperviseDTO> for SupervisionRepository {
    async fn create(&self, data: &SuperviseDTO) -> Result<(), Error> {
        sqlx::query("INSERT INTO supervisions (module_id, staff_id) VALUES (?, ?)")
            .bind(data.module_id)
            .bind(data.staff_id)
            .execute(&self.connection_pool)
            .await?;
        Ok(())
    }
}
