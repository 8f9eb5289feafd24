//! Session cookie extractor
//!
//! Verifies the signed session cookie. The claims only identify the
//! officer; handlers re-check access against the store.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use portal_common::SessionClaims;

use crate::response::ApiError;
use crate::state::AppState;

/// Signed-in officer, as claimed by a valid session cookie
#[derive(Debug, Clone)]
pub struct SessionUser(pub SessionClaims);

impl SessionUser {
    pub fn member_id(&self) -> &str {
        self.0.member_id()
    }

    pub fn claims(&self) -> &SessionClaims {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(app_state.cookie_name())
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ApiError::MissingSession)?;

        let claims = app_state.session_tokens().verify(&token).map_err(|e| {
            tracing::warn!(error = %e, "Rejected session cookie");
            ApiError::App(e)
        })?;

        Ok(SessionUser(claims))
    }
}
