#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
pub const TEST_JWT_SECRET: &str = "test-secret-for-card-market";

#[cfg(test)]
pub fn create_admin_user() -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: "test-admin-id".to_string(),
        email: Some("admin@card-market.test".to_string()),
        roles: vec!["admin".to_string()],
    }
}

#[cfg(test)]
async fn inject_admin_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_admin_user());
    next.run(request).await
}

#[cfg(test)]
pub fn with_admin_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_admin_middleware))
}

/// Sign an HS256 access token; negative `expires_in_secs` yields an expired token.
#[cfg(test)]
pub fn issue_token(secret: &str, sub: &str, roles: &[&str], expires_in_secs: i64) -> String {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let exp = chrono::Utc::now().timestamp() + expires_in_secs;
    let claims = serde_json::json!({
        "sub": sub,
        "exp": exp,
        "roles": roles,
    });

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("failed to sign test token")
}
