use axum::{body::Body, extract::Request, http::header, middleware::Next, response::Response};

use super::error::AuthError;

/// Middleware that requires a valid bearer token
///
/// On success the decoded [`TokenClaims`](contracts::system::auth::TokenClaims)
/// are put into the request extensions for [`CurrentUser`](super::extractor::CurrentUser).
pub async fn require_auth(mut req: Request<Body>, next: Next) -> Result<Response, AuthError> {
    let token = bearer_token(req.headers().get(header::AUTHORIZATION).and_then(|h| h.to_str().ok()))
        .ok_or(AuthError::MissingToken)?;

    let claims = super::jwt::validate_token(token).map_err(|e| {
        tracing::debug!("Rejected token: {:#}", e);
        AuthError::InvalidToken
    })?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

fn bearer_token(header_value: Option<&str>) -> Option<&str> {
    header_value?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(Some("Bearer abc.def")), Some("abc.def"));
        assert_eq!(bearer_token(Some("Bearer ")), None);
        assert_eq!(bearer_token(Some("Basic abc")), None);
        assert_eq!(bearer_token(None), None);
    }
}
