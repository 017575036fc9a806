//! Password reset handlers
//!
//! OTP-based password reset flow: request a code, verify it, set the new
//! password.

use axum::{extract::State, Json};
use campaign_service::{
    MessageResponse, PasswordResetService, RequestOtpRequest, ResetPasswordRequest,
    VerifyOtpRequest,
};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Request a password reset code
///
/// POST /password/request
pub async fn request_otp(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RequestOtpRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = PasswordResetService::new(state.service_context());
    service.request_reset(request).await?;
    Ok(Json(MessageResponse::new("OTP sent to email")))
}

/// Verify a password reset code
///
/// POST /password/verify
pub async fn verify_otp(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<VerifyOtpRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = PasswordResetService::new(state.service_context());
    service.verify_otp(request).await?;
    Ok(Json(MessageResponse::new("OTP verified")))
}

/// Reset the password using a verified code
///
/// POST /password/reset
pub async fn reset_password(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ResetPasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = PasswordResetService::new(state.service_context());
    service.reset_password(request).await?;
    Ok(Json(MessageResponse::new("Password reset successful")))
}
