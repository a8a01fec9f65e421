//! Authenticated request context.
//!
//! [`AuthUser`] is an Axum extractor resolving the session's user ID against the database on
//! every request. Handlers receive it as an argument and check roles through
//! [`AuthUser::require_any`], so a role change or account deletion applies to the very next
//! request the affected user makes.

use axum::{extract::FromRequestParts, http::request::Parts};
use entity::sea_orm_active_enums::Role;
use tower_sessions::Session;

use crate::server::{
    controller::util::get_user::get_user_from_session,
    error::{auth::AuthError, Error},
    model::app::AppState,
};

/// Shelter employees allowed to manage pets, applications and foster records.
pub const STAFF_ROLES: &[Role] = &[Role::Staff, Role::Admin];
/// Roles allowed to write medical records.
pub const MEDICAL_ROLES: &[Role] = &[Role::Staff, Role::Vet, Role::Admin];
/// Roles allowed to read the dashboard report.
pub const REPORT_ROLES: &[Role] = &[Role::Staff, Role::Admin, Role::Vet];
/// Roles allowed to see the medical summary of the dashboard report.
pub const MEDICAL_SUMMARY_ROLES: &[Role] = &[Role::Vet, Role::Admin];
/// Roles allowed to take volunteer tasks.
pub const VOLUNTEER_ROLES: &[Role] = &[Role::Volunteer, Role::Staff, Role::Admin];
pub const ADMIN_ROLES: &[Role] = &[Role::Admin];

/// The user making the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i32,
    pub username: String,
    pub role: Role,
}

impl AuthUser {
    pub fn is_any(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }

    pub fn is_staff(&self) -> bool {
        self.is_any(STAFF_ROLES)
    }

    /// Fails with 403 unless the user holds one of `roles`.
    pub fn require_any(&self, roles: &'static [Role]) -> Result<(), Error> {
        if self.is_any(roles) {
            return Ok(());
        }

        Err(AuthError::InsufficientRole {
            user_id: self.id,
            role: self.role,
            required: roles,
        }
        .into())
    }
}

impl From<&entity::users::Model> for AuthUser {
    fn from(user: &entity::users::Model) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| {
                Error::InternalError(format!("Session layer is not installed: {}", message))
            })?;

        get_user_from_session(state, &session).await
    }
}
