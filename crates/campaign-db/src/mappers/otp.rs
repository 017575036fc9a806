//! Password OTP entity <-> model mapper

use campaign_core::entities::PasswordOtp;

use crate::models::PasswordOtpModel;

impl From<PasswordOtpModel> for PasswordOtp {
    fn from(model: PasswordOtpModel) -> Self {
        PasswordOtp {
            id: model.id,
            email: model.email,
            code: model.code,
            verified: model.verified,
            expires_at: model.expires_at,
            created_at: model.created_at,
        }
    }
}
