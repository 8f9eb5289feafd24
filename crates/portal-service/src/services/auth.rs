//! Authentication service
//!
//! Handles sign-in, password changes, the session view and the first
//! administrator account.

use portal_common::{
    hash_password, verify_credential, BootstrapAdminConfig, IssuedSession, LegacyMatch,
};
use portal_core::entities::division::INFORMATION_AND_CREATIVE_MEDIA;
use portal_core::{DomainError, NewOfficer, Officer, Position};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    ChangePasswordRequest, LoginRequest, MessageResponse, SessionResponse, SessionUserResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// A successful sign-in: the signed session for the cookie and the body
/// returned to the client
#[derive(Debug)]
pub struct LoginOutcome {
    pub session: IssuedSession,
    pub response: SessionResponse,
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Sign in by display name.
    ///
    /// Names are not unique; the first match is used. A correct credential
    /// on a disabled account still fails.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginOutcome> {
        request.validate()?;
        let name = request.name.trim();

        let officer = self
            .ctx
            .officer_repo()
            .find_by_name(name)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: officer not found");
                DomainError::OfficerNotFound(name.to_string())
            })?;

        let valid = verify_credential(
            &request.password,
            &officer.credential,
            &officer.member_id,
            LegacyMatch::Hash,
        )?;

        if !valid {
            warn!(officer_id = officer.id, "Login failed: invalid credential");
            return Err(DomainError::InvalidCredential.into());
        }

        if !officer.is_active {
            warn!(officer_id = officer.id, "Login failed: account disabled");
            return Err(DomainError::AccountDisabled.into());
        }

        let session = self.ctx.session_tokens().issue(&officer)?;

        info!(officer_id = officer.id, role = %officer.access_role, sid = %session.claims.sid, "Officer signed in");

        Ok(LoginOutcome {
            session,
            response: Self::session_response(&officer),
        })
    }

    /// Replace the password of the officer with the request's member id.
    ///
    /// The old password is checked the same way as at sign-in, except that
    /// an unhashed legacy value is compared literally. Disabled officers may
    /// still change their password.
    #[instrument(skip(self, request), fields(member_id = %request.member_id.trim()))]
    pub async fn change_password(
        &self,
        request: ChangePasswordRequest,
    ) -> ServiceResult<MessageResponse> {
        request.validate()?;
        let member_id = request.member_id.trim();

        let officer = self
            .ctx
            .officer_repo()
            .find_by_member_id(member_id)
            .await?
            .ok_or_else(|| DomainError::OfficerNotFound(member_id.to_string()))?;

        let valid = verify_credential(
            &request.old_password,
            &officer.credential,
            &officer.member_id,
            LegacyMatch::Literal,
        )?;

        if !valid {
            warn!(officer_id = officer.id, "Password change failed: wrong current password");
            return Err(DomainError::InvalidCredential.into());
        }

        let hash = hash_password(&request.new_password)?;
        self.ctx.officer_repo().update_password(officer.id, &hash).await?;

        info!(officer_id = officer.id, "Password changed");

        Ok(MessageResponse::ok("Password updated successfully"))
    }

    /// Session payload and permitted sections of a signed-in officer
    pub fn session_response(officer: &Officer) -> SessionResponse {
        SessionResponse {
            success: true,
            user: SessionUserResponse::from(officer),
            must_change_password: officer.must_change_password,
            sections: officer.access_role.sections().names(),
        }
    }

    /// Create the first Web Master when no officer exists yet.
    ///
    /// Returns the created officer, or `None` when officers already exist.
    #[instrument(skip(self, config), fields(name = %config.name))]
    pub async fn bootstrap_admin(
        &self,
        config: &BootstrapAdminConfig,
    ) -> ServiceResult<Option<Officer>> {
        if self.ctx.officer_repo().count().await? > 0 {
            return Ok(None);
        }

        let position = Position::WebMaster;
        let division_name = position
            .forced_division()
            .unwrap_or(INFORMATION_AND_CREATIVE_MEDIA);
        let division = self
            .ctx
            .division_repo()
            .find_by_name(division_name)
            .await?
            .ok_or_else(|| DomainError::UnknownDivision(division_name.to_string()))?;

        let officer = self
            .ctx
            .officer_repo()
            .create(&NewOfficer {
                name: config.name.clone(),
                member_id: config.member_id.clone(),
                access_role: position.access_role(),
                position,
                division_id: division.id,
                password_hash: hash_password(&config.member_id)?,
                image: None,
                sort_order: 0,
            })
            .await?;

        info!(officer_id = officer.id, "Bootstrap administrator created");
        Ok(Some(officer))
    }
}
