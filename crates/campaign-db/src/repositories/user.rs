//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use campaign_core::entities::User;
use campaign_core::error::DomainError;
use campaign_core::traits::{RepoResult, UserRepository};

use crate::models::{DepartmentCountModel, UserModel};

use super::error::map_db_error;

const USER_COLUMNS: &str = "id, name, email, password_hash, employee_id, department, avatar, \
                            gender, date_of_birth, contact_no, created_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn identity_exists(&self, email: &str, employee_id: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 OR employee_id = $2)
            ",
        )
        .bind(email)
        .bind(employee_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, name, email, password_hash, employee_id, department,
                               avatar, gender, date_of_birth, contact_no, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(password_hash)
        .bind(&user.employee_id)
        .bind(&user.department)
        .bind(&user.avatar)
        .bind(&user.gender)
        .bind(user.date_of_birth)
        .bind(&user.contact_no)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // Both email and employee_id carry unique constraints
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return if db_err.constraint() == Some("users_employee_id_key") {
                        DomainError::EmployeeIdAlreadyExists
                    } else {
                        DomainError::EmailAlreadyExists
                    };
                }
            }
            map_db_error(e)
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, email: &str) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, email: &str, password_hash: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users SET password_hash = $2 WHERE email = $1
            ",
        )
        .bind(email)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EmailNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn distinct_departments(&self) -> RepoResult<Vec<String>> {
        let results = sqlx::query_scalar::<_, String>(
            r"
            SELECT DISTINCT department FROM users ORDER BY department
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }

    #[instrument(skip(self))]
    async fn count_by_department(&self) -> RepoResult<Vec<(String, i64)>> {
        let results = sqlx::query_as::<_, DepartmentCountModel>(
            r"
            SELECT department, COUNT(*) AS count
            FROM users
            GROUP BY department
            ORDER BY department
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(|r| (r.department, r.count)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }
}
