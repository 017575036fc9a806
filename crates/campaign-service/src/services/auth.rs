//! Authentication service
//!
//! Handles user registration and login.

use campaign_common::auth::{hash_password, validate_password_strength, verify_password};
use campaign_core::entities::User;
use campaign_core::value_objects::normalize_email;
use campaign_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        let email = normalize_email(&request.email);

        // Check if the email or employee ID is already taken
        if self
            .ctx
            .user_repo()
            .identity_exists(&email, &request.employee_id)
            .await?
        {
            return Err(ServiceError::Domain(DomainError::EmailAlreadyExists));
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let mut user = User::new(request.name, email, request.employee_id, request.department);
        user.avatar = request.avatar;
        user.gender = request.gender;
        user.date_of_birth = request.date_of_birth;
        user.contact_no = request.contact_no;

        // Save to database; the unique constraints are the final arbiter under
        // concurrent registration
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        let token = self
            .ctx
            .jwt_service()
            .issue_token(user.id)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse::new(
            token.token,
            token.expires_in,
            UserResponse::from(&user),
        ))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let email = normalize_email(&request.email);

        // Find user by email
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(campaign_common::AppError::InvalidCredentials)
            })?;

        // Get password hash
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(&email)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(campaign_common::AppError::InvalidCredentials)
            })?;

        // Verify password
        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(
                campaign_common::AppError::InvalidCredentials,
            ));
        }

        info!(user_id = %user.id, "User logged in successfully");

        let token = self
            .ctx
            .jwt_service()
            .issue_token(user.id)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse::new(
            token.token,
            token.expires_in,
            UserResponse::from(&user),
        ))
    }
}
