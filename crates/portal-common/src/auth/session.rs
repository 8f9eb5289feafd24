//! Signed session tokens carried in the session cookie

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use portal_core::{AccessRole, Officer};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Session payload
///
/// The role here is informational. Authorization always re-reads the officer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Member id of the signed-in officer
    pub sub: String,
    pub name: String,
    pub role: AccessRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Session id, for log correlation
    pub sid: String,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    #[inline]
    pub fn member_id(&self) -> &str {
        &self.sub
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// A freshly signed session
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub claims: SessionClaims,
    pub max_age_seconds: i64,
}

#[derive(Clone)]
pub struct SessionTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl SessionTokenService {
    #[must_use]
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    #[inline]
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Sign a session for `officer`
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, officer: &Officer) -> Result<IssuedSession, AppError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: officer.member_id.clone(),
            name: officer.name.clone(),
            role: officer.access_role,
            image: officer.image.clone(),
            sid: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_seconds)).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to sign session: {e}")))?;

        Ok(IssuedSession {
            token,
            claims,
            max_age_seconds: self.ttl_seconds,
        })
    }

    /// Check the signature and expiry of a session token
    ///
    /// # Errors
    /// `SessionExpired` past its lifetime, `InvalidSession` for anything else
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AppError> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::SessionExpired,
                _ => AppError::InvalidSession,
            })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for SessionTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenService")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}
