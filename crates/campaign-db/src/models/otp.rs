//! Password OTP database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for password_otps table
#[derive(Debug, Clone, FromRow)]
pub struct PasswordOtpModel {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub verified: bool,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
