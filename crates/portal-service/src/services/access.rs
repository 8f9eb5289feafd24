//! Access policy
//!
//! Authorization never trusts the role carried in the session: the officer
//! is reloaded on every admin request and its stored role is checked
//! against the capability table.

use portal_common::{AppError, SessionClaims};
use portal_core::{DomainError, Officer, Sections};
use tracing::{instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Access policy service
pub struct AccessService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccessService<'a> {
    /// Create a new AccessService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load the signed-in officer and require `section`
    #[instrument(skip(self, session), fields(member_id = %session.member_id(), sid = %session.sid))]
    pub async fn authorize(&self, session: &SessionClaims, section: Sections) -> ServiceResult<Officer> {
        let officer = self.current_officer(session).await?;

        if !officer.access_role.can_access(section) {
            warn!(
                role = %officer.access_role,
                section = ?section.names(),
                "Access restricted"
            );
            return Err(DomainError::AccessRestricted(section.names().join(", ")).into());
        }

        Ok(officer)
    }

    /// The active officer behind `session`
    pub async fn current_officer(&self, session: &SessionClaims) -> ServiceResult<Officer> {
        let officer = self
            .ctx
            .officer_repo()
            .find_by_member_id(session.member_id())
            .await?
            .ok_or_else(|| {
                warn!("Session refers to a missing officer");
                AppError::InvalidSession
            })?;

        if !officer.is_active {
            warn!(officer_id = officer.id, "Session refers to a disabled officer");
            return Err(DomainError::AccountDisabled.into());
        }

        Ok(officer)
    }
}
