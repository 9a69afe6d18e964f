//! Authentication primitives: argon2id password hashing, HS256 JWT
//! issue/verify, and OTP code generation.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use ostrich_core::CustomerId;
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Phone/password pair does not match a registered customer.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Bearer token is missing, malformed, expired, or forged.
    #[error("invalid token")]
    InvalidToken,

    /// OTP code does not match, has expired, or was already used.
    #[error("invalid otp")]
    InvalidOtp,

    /// No customer account exists for this phone number.
    #[error("phone not registered")]
    PhoneNotRegistered,

    /// A customer account already exists for this phone number.
    #[error("phone already registered")]
    PhoneAlreadyRegistered,

    /// Password fails the strength policy.
    #[error("{0}")]
    WeakPassword(String),

    /// Password hashing failed.
    #[error("password hashing failed")]
    PasswordHash,

    /// JWT signing failed.
    #[error("token creation failed")]
    TokenCreation,
}

/// JWT claims carried by every bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Customer ID.
    pub sub: i64,
    /// Normalized phone number at issue time.
    pub phone: String,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
    /// Expiry, seconds since epoch.
    pub exp: i64,
}

impl Claims {
    #[must_use]
    pub const fn customer_id(&self) -> CustomerId {
        CustomerId::new(self.sub)
    }
}

/// Issues and verifies HS256 bearer tokens.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    #[must_use]
    pub fn new(secret: &SecretString, ttl_days: i64) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
            ttl: Duration::days(ttl_days),
        }
    }

    /// Issue a token for a logged-in customer.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenCreation`] if signing fails.
    pub fn issue(&self, customer_id: CustomerId, phone: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: customer_id.as_i64(),
            phone: phone.to_owned(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(|_| AuthError::TokenCreation)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] on any signature, format, or
    /// expiry failure.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Reject passwords that fail the strength policy.
///
/// # Errors
///
/// Returns [`AuthError::WeakPassword`] naming the failed rule.
pub fn validate_password_strength(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password with argon2id and a fresh random salt.
///
/// # Errors
///
/// Returns [`AuthError::PasswordHash`] if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored argon2id hash.
#[must_use]
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
}

/// Generate a random 6-digit OTP code.
#[must_use]
pub fn generate_otp_code() -> String {
    let code: u32 = rand::rng().random_range(100_000..=999_999);
    code.to_string()
}

/// Generate a reference number like `SRV-20260828-4821` for tickets,
/// enquiries, and customer codes.
#[must_use]
pub fn generate_reference(prefix: &str) -> String {
    let date = Utc::now().format("%Y%m%d");
    let suffix: u16 = rand::rng().random_range(1000..=9999);
    format!("{prefix}-{date}-{suffix}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(&SecretString::from("Kx9#mP2$vL8@nQ5averystrongsecret"), 30)
    }

    #[test]
    fn test_token_roundtrip() {
        let svc = service();
        let token = svc.issue(CustomerId::new(42), "+919812345678").unwrap();
        let claims = svc.verify(&token).unwrap();
        assert_eq!(claims.customer_id(), CustomerId::new(42));
        assert_eq!(claims.phone, "+919812345678");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let svc = service();
        let mut token = svc.issue(CustomerId::new(1), "+911111111111").unwrap();
        token.push('x');
        assert_eq!(svc.verify(&token).unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let other =
            TokenService::new(&SecretString::from("Zz7!qW3^rT6&yU1anotherstrongkey9"), 30);
        let token = other.issue(CustomerId::new(1), "+911111111111").unwrap();
        assert_eq!(service().verify(&token).unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(verify_password("correct horse battery", &hash));
        assert!(!verify_password("wrong password", &hash));
    }

    #[test]
    fn test_password_hashes_are_salted() {
        let first = hash_password("same password").unwrap();
        let second = hash_password("same password").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_short_password_rejected() {
        assert!(matches!(
            validate_password_strength("short"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(validate_password_strength("long enough password").is_ok());
    }

    #[test]
    fn test_otp_code_is_six_digits() {
        for _ in 0..20 {
            let code = generate_otp_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_reference_format() {
        let reference = generate_reference("SRV");
        assert!(reference.starts_with("SRV-"));
        assert_eq!(reference.split('-').count(), 3);
    }
}
