//! Password-reset OTP entity
//!
//! Codes are persisted with an expiry timestamp; expiry is enforced as a
//! query predicate, never by a background sweep.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// How long a code stays valid after issuance
pub const OTP_TTL_MINUTES: i64 = 10;

/// One-time password for a password-reset flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordOtp {
    pub id: Uuid,
    /// Normalized (lowercase) email the code was issued for
    pub email: String,
    pub code: String,
    pub verified: bool,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl PasswordOtp {
    /// Issue a new code for an email, valid for [`OTP_TTL_MINUTES`]
    pub fn issue(email: String, code: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            code,
            verified: false,
            expires_at: now + Duration::minutes(OTP_TTL_MINUTES),
            created_at: now,
        }
    }

    /// Check if the code has expired
    #[inline]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Generate a random six-digit reset code
pub fn generate_otp_code() -> String {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    rng.gen_range(100_000..=999_999).to_string()
}
