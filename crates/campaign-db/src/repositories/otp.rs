//! PostgreSQL implementation of OtpRepository
//!
//! Expiry is a query predicate (`expires_at > NOW()`); stale rows are
//! superseded on the next request rather than swept in the background.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use campaign_core::entities::PasswordOtp;
use campaign_core::traits::{OtpRepository, RepoResult};

use crate::models::PasswordOtpModel;

use super::error::map_db_error;

const OTP_COLUMNS: &str = "id, email, code, verified, expires_at, created_at";

/// PostgreSQL implementation of OtpRepository
#[derive(Clone)]
pub struct PgOtpRepository {
    pool: PgPool,
}

impl PgOtpRepository {
    /// Create a new PgOtpRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OtpRepository for PgOtpRepository {
    #[instrument(skip(self, otp))]
    async fn create(&self, otp: &PasswordOtp) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO password_otps (id, email, code, verified, expires_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(otp.id)
        .bind(&otp.email)
        .bind(&otp.code)
        .bind(otp.verified)
        .bind(otp.expires_at)
        .bind(otp.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_for_email(&self, email: &str) -> RepoResult<()> {
        sqlx::query("DELETE FROM password_otps WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, code))]
    async fn find_active(&self, email: &str, code: &str) -> RepoResult<Option<PasswordOtp>> {
        let result = sqlx::query_as::<_, PasswordOtpModel>(&format!(
            "SELECT {OTP_COLUMNS} FROM password_otps \
             WHERE email = $1 AND code = $2 AND expires_at > NOW()"
        ))
        .bind(email)
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(PasswordOtp::from))
    }

    #[instrument(skip(self))]
    async fn mark_verified(&self, id: Uuid) -> RepoResult<()> {
        sqlx::query("UPDATE password_otps SET verified = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_verified(&self, email: &str) -> RepoResult<Option<PasswordOtp>> {
        let result = sqlx::query_as::<_, PasswordOtpModel>(&format!(
            "SELECT {OTP_COLUMNS} FROM password_otps \
             WHERE email = $1 AND verified AND expires_at > NOW() \
             ORDER BY created_at DESC LIMIT 1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(PasswordOtp::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        sqlx::query("DELETE FROM password_otps WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgOtpRepository>();
    }
}
