use axum::extract::Json;
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::system::auth::error::AuthError;
use crate::system::auth::extractor::CurrentUser;
use crate::system::{auth::jwt, users::service as user_service};

/// Login handler
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, AuthError> {
    let user = user_service::verify_credentials(&request.username, &request.password)?
        .ok_or_else(|| {
            tracing::info!("Rejected login for '{}'", request.username);
            AuthError::InvalidCredentials
        })?;

    let token = jwt::generate_access_token(&user.id, &user.username, user.is_admin)?;

    tracing::info!("User '{}' logged in", user.username);

    Ok(Json(LoginResponse {
        token,
        user: user.to_info(),
    }))
}

/// Get current user handler (protected by middleware)
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Result<Json<UserInfo>, AuthError> {
    let user = user_service::get_by_id(&claims.sub)?.ok_or(AuthError::UserNotFound)?;

    Ok(Json(user.to_info()))
}
