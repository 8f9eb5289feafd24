//! Authentication handlers
//!
//! Endpoints for sign-in, sign-out, password change, and the current session.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use portal_service::{
    AccessService, AuthService, ChangePasswordRequest, LoginRequest, MessageResponse,
    SessionResponse,
};

use crate::extractors::{SessionUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Sign in with name and password; sets the session cookie
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<SessionResponse>)> {
    let service = AuthService::new(state.service_context());
    let outcome = service.login(request).await?;

    let cookie = Cookie::build((state.cookie_name().to_string(), outcome.session.token))
        .http_only(true)
        .secure(state.config().app.env.is_production())
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(outcome.session.max_age_seconds));

    Ok((jar.add(cookie), Json(outcome.response)))
}

/// Clear the session cookie; succeeds without a session
///
/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(Cookie::build(state.cookie_name().to_string()).path("/"));
    (jar, Json(MessageResponse::ok("Logged out")))
}

/// Change an officer's password given the member id and current password;
/// no session is needed
///
/// POST /api/auth/change-password
pub async fn change_password(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let response = AuthService::new(state.service_context())
        .change_password(request)
        .await?;
    Ok(Json(response))
}

/// Current session, with the sections the officer may open
///
/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Json<SessionResponse>> {
    let officer = AccessService::new(state.service_context())
        .current_officer(session.claims())
        .await?;
    Ok(Json(AuthService::session_response(&officer)))
}
