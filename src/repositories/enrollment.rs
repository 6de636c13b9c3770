//! EnrollmentRepository - Iscrizioni degli studenti ai moduli

use super::Create;
use crate::dtos::{EnrollDTO, PageQuery};
use crate::entities::Enrollment;
use sqlx::{Error, MySqlPool};

pub struct EnrollmentRepository {
    connection_pool: MySqlPool,
}

impl EnrollmentRepository {
    pub fn new(connection_pool: MySqlPool) -> EnrollmentRepository {
        Self { connection_pool }
    }

    pub async fn list_by_module(
        &self,
        module_id: i32,
        paging: &PageQuery,
    ) -> Result<(Vec<Enrollment>, i64), Error> {
        let rows = match paging.window() {
            Some((limit, offset)) => {
                sqlx::query_as::<_, Enrollment>(
                    "SELECT module_id, student_id FROM enrollments WHERE module_id = ? \
                     ORDER BY student_id LIMIT ? OFFSET ?",
                )
                .bind(module_id)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.connection_pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Enrollment>(
                    "SELECT module_id, student_id FROM enrollments WHERE module_id = ? \
                     ORDER BY student_id",
                )
                .bind(module_id)
                .fetch_all(&self.connection_pool)
                .await?
            }
        };

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM enrollments WHERE module_id = ?")
            .bind(module_id)
            .fetch_one(&self.connection_pool)
            .await?;

        Ok((rows, total))
    }
}

impl Create<Enrollment, EnrollDTO> for EnrollmentRepository {
    async fn create(&self, data: &EnrollDTO) -> Result<Enrollment, Error> {
        sqlx::query("INSERT INTO enrollments (module_id, student_id) VALUES (?, ?)")
            .bind(data.module_id)
            .bind(data.student_id)
            .execute(&self.connection_pool)
            .await?;

        Ok(Enrollment {
            module_id: data.module_id,
            student_id: data.student_id,
        })
    }
}
