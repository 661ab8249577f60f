//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use orderhub_core::config::AuthConfig;
use orderhub_core::error::AppError;

use super::claims::Claims;

/// Validates signature, issuer, audience and lifetime of access tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Expiry is exact; no clock skew allowance.
        validation.leeway = 0;
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        if token.trim().is_empty() {
            return Err(AppError::authentication("Missing token"));
        }

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                        AppError::authentication("Invalid token issuer")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                        AppError::authentication("Invalid token audience")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Returns `true` only for a token that passes every check.
    pub fn validate_token(&self, token: &str) -> bool {
        match self.decode(token) {
            Ok(_) => true,
            Err(e) => {
                debug!(reason = %e.message, "Token rejected");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;

    use super::*;
    use crate::jwt::JwtEncoder;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-key-that-is-long-enough-for-hs256".to_string(),
            issuer: "OrderHub.Tests".to_string(),
            audience: "OrderHub.Tests.Clients".to_string(),
            expiration_minutes: 60,
            users: Vec::new(),
        }
    }

    fn roles() -> Vec<String> {
        vec!["User".to_string(), "Admin".to_string()]
    }

    #[test]
    fn test_generated_token_validates() {
        let config = config();
        let issued = JwtEncoder::new(&config)
            .generate_token("user-1", "user@example.com", &roles())
            .unwrap();

        assert!(!issued.token.is_empty());
        assert!(JwtDecoder::new(&config).validate_token(&issued.token));
    }

    #[test]
    fn test_claims_round_through_token() {
        let config = config();
        let before = Utc::now();
        let issued = JwtEncoder::new(&config)
            .generate_token("user-1", "user@example.com", &roles())
            .unwrap();
        let claims = JwtDecoder::new(&config).decode(&issued.token).unwrap();

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.role, roles());
        assert_eq!(claims.iss, "OrderHub.Tests");
        assert_eq!(claims.aud, "OrderHub.Tests.Clients");

        let expected = before + chrono::Duration::minutes(60);
        assert!((issued.expires_at - expected).num_seconds().abs() <= 5);
    }

    #[test]
    fn test_invalid_tokens_are_rejected() {
        let decoder = JwtDecoder::new(&config());
        assert!(!decoder.validate_token(""));
        assert!(!decoder.validate_token("not.a.jwt"));
        assert!(!decoder.validate_token("invalid-token"));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let config = config();
        let issued = JwtEncoder::new(&config)
            .generate_token("user-1", "user@example.com", &roles())
            .unwrap();
        let tampered = format!("{}x", issued.token);

        assert!(!JwtDecoder::new(&config).validate_token(&tampered));
    }

    #[test]
    fn test_foreign_secret_issuer_and_audience_are_rejected() {
        let config = config();
        let issued = JwtEncoder::new(&config)
            .generate_token("user-1", "user@example.com", &roles())
            .unwrap();

        let other_secret = AuthConfig {
            jwt_secret: "a-completely-different-secret-of-enough-length".to_string(),
            ..config.clone()
        };
        let other_issuer = AuthConfig {
            issuer: "Someone.Else".to_string(),
            ..config.clone()
        };
        let other_audience = AuthConfig {
            audience: "Someone.Else.Clients".to_string(),
            ..config.clone()
        };

        assert!(!JwtDecoder::new(&other_secret).validate_token(&issued.token));
        assert!(!JwtDecoder::new(&other_issuer).validate_token(&issued.token));
        assert!(!JwtDecoder::new(&other_audience).validate_token(&issued.token));
    }

    #[test]
    fn test_expired_token_is_rejected_without_leeway() {
        let config = config();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "user-1".to_string(),
            email: "user@example.com".to_string(),
            role: vec!["User".to_string()],
            iss: config.issuer.clone(),
            aud: config.audience.clone(),
            iat: now - 120,
            exp: now - 2,
            jti: Uuid::new_v4(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = JwtDecoder::new(&config).decode(&token).unwrap_err();
        assert_eq!(err.message, "Token has expired");
    }
}
