pub mod destinations;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};

use crate::models::auth::AuthenticatedUser;

/// Returns `true` when `role` is among `roles`.
pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|r| r == role)
}

/// Fails with [`ServiceError::Forbidden`] unless the user holds `role`.
pub fn ensure_role(user: &AuthenticatedUser, role: &str) -> ServiceResult<()> {
    if check_role(role, &user.roles) {
        Ok(())
    } else {
        log::debug!("User {} lacks the {role} role", user.sub);
        Err(ServiceError::Forbidden)
    }
}
