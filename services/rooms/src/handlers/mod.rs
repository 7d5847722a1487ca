pub mod room;
pub mod room_type;

use hotel_auth_types::identity::Identity;
use hotel_domain::user::UserRole;

use crate::error::RoomsServiceError;

/// Roles allowed to create and edit the catalogue.
pub const STAFF_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Staff];

/// Roles allowed to delete from the catalogue.
pub const ADMIN_ROLES: &[UserRole] = &[UserRole::Admin];

pub fn authorize(identity: &Identity, roles: &[UserRole]) -> Result<(), RoomsServiceError> {
    if identity.has_any_role(roles) {
        Ok(())
    } else {
        tracing::debug!(user_id = %identity.user_id, role = %identity.role, "role not permitted");
        Err(RoomsServiceError::Forbidden)
    }
}
