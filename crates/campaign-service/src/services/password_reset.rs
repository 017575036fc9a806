//! Password reset service
//!
//! Three-step flow: request a one-time code by email, verify the code,
//! then set the new password. Codes expire after ten minutes and are
//! superseded by any newer request for the same email.

use async_trait::async_trait;
use campaign_common::auth::{hash_password, validate_password_strength};
use campaign_core::entities::{generate_otp_code, PasswordOtp};
use campaign_core::value_objects::normalize_email;
use campaign_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{RequestOtpRequest, ResetPasswordRequest, VerifyOtpRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Delivery channel for one-time password reset codes
#[async_trait]
pub trait OtpMailer: Send + Sync {
    /// Deliver the code to the given address
    async fn send_otp(&self, email: &str, code: &str) -> anyhow::Result<()>;
}

/// Mailer that only logs the code
///
/// Stands in for a real SMTP integration in development and tests.
#[derive(Debug, Default, Clone)]
pub struct TracingMailer;

#[async_trait]
impl OtpMailer for TracingMailer {
    async fn send_otp(&self, email: &str, _code: &str) -> anyhow::Result<()> {
        info!(email, "Password reset code issued");
        Ok(())
    }
}

/// Password reset service
pub struct PasswordResetService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PasswordResetService<'a> {
    /// Create a new PasswordResetService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue a fresh reset code and send it to the user's email
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn request_reset(&self, request: RequestOtpRequest) -> ServiceResult<()> {
        let email = normalize_email(&request.email);

        // Only registered addresses get a code
        self.ctx
            .user_repo()
            .find_by_email(&email)
            .await?
            .ok_or(ServiceError::Domain(DomainError::EmailNotFound))?;

        // Any earlier codes for this email are dead from here on
        self.ctx.otp_repo().delete_for_email(&email).await?;

        let otp = PasswordOtp::issue(email.clone(), generate_otp_code());
        self.ctx.otp_repo().create(&otp).await?;

        self.ctx
            .otp_mailer()
            .send_otp(&email, &otp.code)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!("Password reset code sent");
        Ok(())
    }

    /// Verify a reset code without consuming it
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn verify_otp(&self, request: VerifyOtpRequest) -> ServiceResult<()> {
        let email = normalize_email(&request.email);

        let otp = self
            .ctx
            .otp_repo()
            .find_active(&email, &request.otp)
            .await?
            .ok_or(ServiceError::Domain(DomainError::OtpInvalid))?;

        self.ctx.otp_repo().mark_verified(otp.id).await?;

        info!("Password reset code verified");
        Ok(())
    }

    /// Set a new password; requires a previously verified, unexpired code
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn reset_password(&self, request: ResetPasswordRequest) -> ServiceResult<()> {
        let email = normalize_email(&request.email);

        let otp = self
            .ctx
            .otp_repo()
            .find_verified(&email)
            .await?
            .ok_or(ServiceError::Domain(DomainError::OtpNotVerified))?;

        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx
            .user_repo()
            .update_password(&email, &password_hash)
            .await?;

        // The code is single-use
        self.ctx.otp_repo().delete(otp.id).await?;

        info!("Password reset successful");
        Ok(())
    }
}
