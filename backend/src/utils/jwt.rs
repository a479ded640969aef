use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // account email
    pub kind: TokenKind,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
    #[error("expected {expected:?} token")]
    WrongKind { expected: TokenKind },
}

impl Claims {
    pub fn new(email: &str, kind: TokenKind, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: email.to_string(),
            kind,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }
}

pub fn create_token(
    email: &str,
    kind: TokenKind,
    secret: &str,
    ttl: Duration,
) -> anyhow::Result<String> {
    let claims = Claims::new(email, kind, ttl);
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;

    Ok(token)
}

pub fn create_access_token(email: &str, secret: &str, expiration_hours: u64) -> anyhow::Result<String> {
    create_token(
        email,
        TokenKind::Access,
        secret,
        Duration::hours(expiration_hours as i64),
    )
}

pub fn create_refresh_token(email: &str, secret: &str, expiration_days: u64) -> anyhow::Result<String> {
    create_token(
        email,
        TokenKind::Refresh,
        secret,
        Duration::days(expiration_days as i64),
    )
}

/// Decodes `token` and checks that it was issued as `expected`.
pub fn verify_token(token: &str, secret: &str, expected: TokenKind) -> Result<Claims, TokenError> {
    let mut validation = Validation::default();
    validation.leeway = 0;
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })?;

    if token_data.claims.kind != expected {
        return Err(TokenError::WrongKind { expected });
    }
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_round_trips() {
        let token = create_access_token("admin@example.com", "secret", 1).expect("create token");
        let claims = verify_token(&token, "secret", TokenKind::Access).expect("verify token");
        assert_eq!(claims.sub, "admin@example.com");
        assert_eq!(claims.kind, TokenKind::Access);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn refresh_token_is_not_an_access_token() {
        let token = create_refresh_token("admin@example.com", "secret", 7).unwrap();
        assert_eq!(
            verify_token(&token, "secret", TokenKind::Access).unwrap_err(),
            TokenError::WrongKind {
                expected: TokenKind::Access
            }
        );
        assert!(verify_token(&token, "secret", TokenKind::Refresh).is_ok());
    }

    #[test]
    fn wrong_secret_and_expiry_are_rejected() {
        let token = create_access_token("a@example.com", "secret", 1).unwrap();
        assert_eq!(
            verify_token(&token, "other", TokenKind::Access).unwrap_err(),
            TokenError::Invalid
        );

        let expired =
            create_token("a@example.com", TokenKind::Access, "secret", Duration::hours(-1)).unwrap();
        assert_eq!(
            verify_token(&expired, "secret", TokenKind::Access).unwrap_err(),
            TokenError::Expired
        );
        assert_eq!(
            verify_token("not-a-jwt", "secret", TokenKind::Access).unwrap_err(),
            TokenError::Invalid
        );
    }
}
