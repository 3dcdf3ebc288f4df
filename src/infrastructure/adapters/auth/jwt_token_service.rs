//! JWT Token Service - HS256 签名的访问令牌

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::application::ports::{AuthUser, TokenError, TokenServicePort};

/// 令牌载荷
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    user: AuthUser,
    exp: i64,
    iat: i64,
}

/// JWT Token Service
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl JwtTokenService {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        }
    }

    fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }
}

impl TokenServicePort for JwtTokenService {
    fn issue(&self, user: &AuthUser) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        self.sign(&Claims {
            user: user.clone(),
            iat: now,
            exp: now.saturating_add(self.ttl_secs),
        })
    }

    fn verify(&self, token: &str) -> Result<AuthUser, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            }
        })?;

        Ok(data.claims.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn alice() -> AuthUser {
        AuthUser {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let service = JwtTokenService::new("secret", 3600);
        let user = alice();

        let token = service.issue(&user).unwrap();
        assert_eq!(service.verify(&token).unwrap(), user);
    }

    #[test]
    fn test_rejects_foreign_signature() {
        let issuer = JwtTokenService::new("secret-a", 3600);
        let verifier = JwtTokenService::new("secret-b", 3600);

        let token = issuer.issue(&alice()).unwrap();
        assert!(matches!(verifier.verify(&token), Err(TokenError::Invalid(_))));
        assert!(matches!(verifier.verify("not-a-jwt"), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_rejects_expired_token() {
        let service = JwtTokenService::new("secret", 3600);
        let now = Utc::now().timestamp();
        let token = service
            .sign(&Claims {
                user: alice(),
                iat: now - 7200,
                exp: now - 3600,
            })
            .unwrap();

        assert!(matches!(service.verify(&token), Err(TokenError::Expired)));
    }
}
