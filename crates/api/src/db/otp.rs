//! Short-lived OTP code storage.
//!
//! Codes live in `otp_codes` keyed by phone and purpose. A code is valid
//! until its expiry or first consumption, whichever comes first. Issuing a
//! new code invalidates any earlier unconsumed codes for the same phone and
//! purpose.

use chrono::{DateTime, Duration, Utc};
use sqlx::MySqlPool;

use super::RepositoryError;

/// What an OTP code authorizes. Stored as text in `otp_codes.purpose`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpPurpose {
    Login,
    Registration,
    PasswordReset,
}

impl OtpPurpose {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Registration => "registration",
            Self::PasswordReset => "password_reset",
        }
    }
}

/// How long an issued code stays valid.
pub const OTP_TTL_MINUTES: i64 = 5;

/// Repository for OTP codes.
#[derive(Debug, Clone)]
pub struct OtpRepository {
    pool: MySqlPool,
}

impl OtpRepository {
    #[must_use]
    pub const fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Store a freshly generated code, superseding earlier unconsumed codes
    /// for the same phone and purpose. Returns the expiry instant.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn issue(
        &self,
        phone: &str,
        code: &str,
        purpose: OtpPurpose,
    ) -> Result<DateTime<Utc>, RepositoryError> {
        let expires_at = Utc::now() + Duration::minutes(OTP_TTL_MINUTES);

        sqlx::query(
            "UPDATE otp_codes SET consumed = TRUE WHERE phone = ? AND purpose = ? AND consumed = FALSE",
        )
        .bind(phone)
        .bind(purpose.as_str())
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            INSERT INTO otp_codes (phone, code, purpose, expires_at, consumed)
            VALUES (?, ?, ?, ?, FALSE)
            ",
        )
        .bind(phone)
        .bind(code)
        .bind(purpose.as_str())
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(expires_at)
    }

    /// Consume a code if it matches, has not expired, and has not been used.
    /// Returns whether the code was valid.
    ///
    /// The consume runs as a single conditional UPDATE, so a code can be
    /// redeemed at most once even by concurrent verification attempts.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on database failure.
    pub async fn consume(
        &self,
        phone: &str,
        code: &str,
        purpose: OtpPurpose,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE otp_codes
            SET consumed = TRUE
            WHERE phone = ? AND code = ? AND purpose = ?
              AND consumed = FALSE AND expires_at > ?
            ",
        )
        .bind(phone)
        .bind(code)
        .bind(purpose.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
