use crate::shared::api_utils::post_json;
use crate::shared::error::ApiError;
use contracts::system::auth::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
    RegisterResponse,
};
use contracts::system::users::SessionUser;

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<SessionUser, ApiError> {
    let request = LoginRequest { email, password };
    let response: LoginResponse = post_json("/login", &request).await?;
    Ok(response.user)
}

/// Create an account with the cold-start profile
pub async fn register(request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    post_json("/register", request).await
}

/// Ask for a password reset email
pub async fn forgot_password(email: String) -> Result<MessageResponse, ApiError> {
    post_json("/forgot-password", &ForgotPasswordRequest { email }).await
}
