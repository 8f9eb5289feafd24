//! Officer service
//!
//! Personnel management: creation with the uniqueness and seat rules,
//! activation, removal, the admin listing and the public directory.
//!
//! Seat checks run here first to name the current holder; the store's
//! unique indexes remain the authoritative guard against races.

use portal_common::hash_password;
use portal_core::entities::NEW_OFFICER_SORT_ORDER;
use portal_core::value_objects::OFFICERS_PER_PAGE;
use portal_core::{
    Division, DomainError, NewOfficer, Officer, PageRequest, Position, PublicView, UploadFolder,
};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    CreateOfficerRequest, DivisionDirectoryResponse, DivisionResponse, MutationResponse,
    OfficerResponse, PageResponse, PublicOfficerResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::upload::{ImageInput, UploadService};
use super::views;

const OFFICER_VIEWS: &[PublicView] = &[PublicView::Officers];

/// Officer service
pub struct OfficerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OfficerService<'a> {
    /// Create a new OfficerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add an officer.
    ///
    /// The access role is derived from the position, and positions tied to
    /// a board override the submitted division. The initial password is the
    /// member id, stored hashed, and must be changed at first sign-in.
    #[instrument(skip(self, request, image), fields(name = %request.name, position = %request.position))]
    pub async fn create(
        &self,
        request: CreateOfficerRequest,
        image: ImageInput,
    ) -> ServiceResult<MutationResponse> {
        request.validate()?;

        let name = request.name.trim().to_string();
        let member_id = request.member_id.trim().to_string();
        let position = Position::parse(&request.position);
        let division = self
            .resolve_division(position.forced_division().unwrap_or(request.division.trim()))
            .await?;

        if self
            .ctx
            .officer_repo()
            .find_by_member_id(&member_id)
            .await?
            .is_some()
        {
            warn!(member_id = %member_id, "Member id already registered");
            return Err(DomainError::MemberIdTaken(member_id).into());
        }

        self.ensure_seat_free(&position, division.id, &division.name)
            .await?;

        let uploads = UploadService::new(self.ctx);
        let stored = uploads.store_image(UploadFolder::Officers, image).await?;

        let new_officer = NewOfficer {
            name,
            member_id: member_id.clone(),
            access_role: position.access_role(),
            position,
            division_id: division.id,
            password_hash: hash_password(&member_id)?,
            image: stored.path.clone(),
            sort_order: NEW_OFFICER_SORT_ORDER,
        };

        let officer = match self.ctx.officer_repo().create(&new_officer).await {
            Ok(officer) => officer,
            Err(e) => {
                uploads.discard(&stored).await;
                return Err(e.into());
            }
        };

        views::invalidate(self.ctx, OFFICER_VIEWS).await;
        info!(officer_id = officer.id, role = %officer.access_role, "Officer created");

        Ok(MutationResponse::ok("Officer added successfully")
            .with_id(officer.id)
            .with_warning(stored.warning))
    }

    /// Remove an officer, then its stored photo
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MutationResponse> {
        let officer = self
            .ctx
            .officer_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::OfficerNotFound(id.to_string()))?;

        self.ctx.officer_repo().delete(id).await?;

        if let Some(image) = officer.image.as_deref() {
            UploadService::new(self.ctx).remove_best_effort(image).await;
        }

        views::invalidate(self.ctx, OFFICER_VIEWS).await;
        info!(officer_id = id, "Officer deleted");

        Ok(MutationResponse::ok("Officer deleted successfully").with_id(id))
    }

    /// Enable or disable an officer. Re-enabling requires the seat to be free.
    #[instrument(skip(self))]
    pub async fn set_active(&self, id: i64, active: bool) -> ServiceResult<MutationResponse> {
        let officer = self
            .ctx
            .officer_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::OfficerNotFound(id.to_string()))?;

        if active && !officer.is_active {
            self.ensure_seat_free(&officer.position, officer.division_id, &officer.division_name)
                .await?;
        }

        self.ctx.officer_repo().set_active(id, active).await?;

        views::invalidate(self.ctx, OFFICER_VIEWS).await;
        info!(officer_id = id, active, "Officer status changed");

        let message = if active {
            "Officer activated"
        } else {
            "Officer deactivated"
        };
        Ok(MutationResponse::ok(message).with_id(id))
    }

    /// Admin personnel listing, filtered by a case-insensitive name substring
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str, page: u32) -> ServiceResult<PageResponse<OfficerResponse>> {
        let page = self
            .ctx
            .officer_repo()
            .search(query.trim(), PageRequest::new(page, OFFICERS_PER_PAGE))
            .await?;

        Ok(PageResponse::from_page(page, OfficerResponse::from))
    }

    pub async fn get(&self, id: i64) -> ServiceResult<OfficerResponse> {
        self.ctx
            .officer_repo()
            .find_by_id(id)
            .await?
            .map(OfficerResponse::from)
            .ok_or_else(|| DomainError::OfficerNotFound(id.to_string()).into())
    }

    /// Public directory: active officers grouped by division, in division
    /// order; divisions without officers are omitted
    #[instrument(skip(self))]
    pub async fn directory(&self) -> ServiceResult<Vec<DivisionDirectoryResponse>> {
        views::cached(self.ctx, PublicView::Officers, "directory", || self.load_directory()).await
    }

    async fn load_directory(&self) -> ServiceResult<Vec<DivisionDirectoryResponse>> {
        let divisions = self.ctx.division_repo().list().await?;
        let officers = self.ctx.officer_repo().list_active().await?;

        Ok(group_by_division(divisions, &officers))
    }

    pub async fn divisions(&self) -> ServiceResult<Vec<DivisionResponse>> {
        let divisions = self.ctx.division_repo().list().await?;
        Ok(divisions.into_iter().map(DivisionResponse::from).collect())
    }

    async fn resolve_division(&self, name: &str) -> ServiceResult<Division> {
        self.ctx
            .division_repo()
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::UnknownDivision(name.to_string()).into())
    }

    /// Fail when an active officer already holds the seat `position` needs
    async fn ensure_seat_free(
        &self,
        position: &Position,
        division_id: i64,
        division_name: &str,
    ) -> ServiceResult<()> {
        if position.is_singleton() {
            if let Some(holder) = self
                .ctx
                .officer_repo()
                .find_active_holder(position, None)
                .await?
            {
                warn!(position = %position, holder_id = holder.id, "Position already held");
                return Err(DomainError::PositionOccupied {
                    position: position.to_string(),
                    holder: holder.name,
                }
                .into());
            }
        } else if position.is_division_head() {
            if let Some(holder) = self
                .ctx
                .officer_repo()
                .find_active_holder(position, Some(division_id))
                .await?
            {
                warn!(division = %division_name, holder_id = holder.id, "Division already has a head");
                return Err(DomainError::DivisionHeadOccupied {
                    division: division_name.to_string(),
                    holder: holder.name,
                }
                .into());
            }
        }
        Ok(())
    }
}

fn group_by_division(divisions: Vec<Division>, officers: &[Officer]) -> Vec<DivisionDirectoryResponse> {
    divisions
        .into_iter()
        .filter_map(|division| {
            let members: Vec<PublicOfficerResponse> = officers
                .iter()
                .filter(|officer| officer.division_id == division.id)
                .map(PublicOfficerResponse::from)
                .collect();

            (!members.is_empty()).then(|| DivisionDirectoryResponse {
                division: division.name,
                is_board: division.is_board,
                officers: members,
            })
        })
        .collect()
}
