use super::model::AuthenticatedUser;
use crate::core::error::AppError;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::time::Duration;

pub struct JwtValidator {
    decoding_key: DecodingKey,
    issuer: Option<String>,
    leeway: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct Claims {
    // Standard JWT claims (validated by jsonwebtoken library)
    sub: String,
    #[serde(rename = "exp")]
    _exp: u64,

    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    roles: Vec<String>,
}

impl JwtValidator {
    pub fn new(secret: &str, issuer: Option<String>, leeway: Duration) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
            leeway: leeway.as_secs(),
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
            validation.set_required_spec_claims(&["exp", "iss"]);
        }
        validation.leeway = self.leeway;
        validation.validate_nbf = true;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("Rejected access token: {}", e);
            AppError::Unauthorized("Invalid or expired token".to_string())
        })?;

        let claims = token_data.claims;

        Ok(AuthenticatedUser {
            user_id: claims.sub,
            email: claims.email,
            roles: claims.roles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{issue_token, TEST_JWT_SECRET};

    fn validator() -> JwtValidator {
        JwtValidator::new(TEST_JWT_SECRET, None, Duration::from_secs(0))
    }

    #[test]
    fn test_valid_token_yields_user_with_roles() {
        let token = issue_token(TEST_JWT_SECRET, "user-1", &["admin"], 3600);

        let user = validator().validate_token(&token).unwrap();
        assert_eq!(user.user_id, "user-1");
        assert!(user.is_admin());
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = issue_token("another-secret", "user-1", &["admin"], 3600);

        let err = validator().validate_token(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = issue_token(TEST_JWT_SECRET, "user-1", &[], -3600);

        let err = validator().validate_token(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_issuer_is_checked_when_configured() {
        let validator = JwtValidator::new(
            TEST_JWT_SECRET,
            Some("https://auth.card-market.test".to_string()),
            Duration::from_secs(0),
        );
        // Test tokens carry no issuer claim
        let token = issue_token(TEST_JWT_SECRET, "user-1", &[], 3600);

        assert!(validator.validate_token(&token).is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(validator().validate_token("not-a-jwt").is_err());
    }
}
