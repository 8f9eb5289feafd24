//! Officer and division model → entity mappers

use portal_core::{AccessRole, Credential, Division, DomainError, Officer, Position};

use crate::models::{DivisionModel, OfficerModel};

impl TryFrom<OfficerModel> for Officer {
    type Error = DomainError;

    fn try_from(model: OfficerModel) -> Result<Self, Self::Error> {
        let access_role: AccessRole = model.access_role.parse().map_err(|e| {
            DomainError::DatabaseError(format!("officer {}: {e}", model.id))
        })?;

        Ok(Officer {
            id: model.id,
            name: model.name,
            member_id: model.member_id,
            position: Position::parse(&model.position),
            division_id: model.division_id,
            division_name: model.division_name,
            access_role,
            credential: Credential {
                secret: model.password,
                is_hashed: model.credential_is_hashed,
            },
            must_change_password: model.must_change_password,
            image: model.image,
            is_active: model.is_active,
            sort_order: model.sort_order,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<DivisionModel> for Division {
    fn from(model: DivisionModel) -> Self {
        Division {
            id: model.id,
            name: model.name,
            is_board: model.is_board,
            sort_order: model.sort_order,
        }
    }
}

/// Convert a batch of officer rows, failing on the first unreadable row
pub fn officers_from_models(models: Vec<OfficerModel>) -> Result<Vec<Officer>, DomainError> {
    models.into_iter().map(Officer::try_from).collect()
}
