use tracing::warn;

use crate::app::ports::HttpClientPort;
use crate::constants::{ADMIN_ME_PATH, SUPERADMIN_ROLE};
use crate::error::{AdminError, Result};
use crate::types::{AdminMeResponse, AdminProfile};

pub fn is_superadmin(profile: &AdminProfile) -> bool {
    profile
        .role
        .as_deref()
        .map(|r| r.trim().eq_ignore_ascii_case(SUPERADMIN_ROLE))
        .unwrap_or(false)
}

/// Superadmins always pass; everyone else needs the capability flag.
pub fn can_access_unified_search(profile: &AdminProfile) -> bool {
    is_superadmin(profile) || profile.permissions.can_access_unified_search
}

/// Reads the signed-in admin. `None` when the endpoint fails or answers malformed.
pub async fn fetch_current_admin(http: &dyn HttpClientPort) -> Option<AdminProfile> {
    let body = match http.get_json(ADMIN_ME_PATH).await {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, "Could not load current admin");
            return None;
        }
    };
    match serde_json::from_value::<AdminMeResponse>(body) {
        Ok(AdminMeResponse { success: Some(true), admin: Some(admin) }) => Some(admin),
        Ok(_) => {
            warn!("Current admin response missing success flag or admin");
            None
        }
        Err(e) => {
            warn!(error = %e, "Current admin response could not be decoded");
            None
        }
    }
}

/// Gate for the unified search view. No profile means no access.
pub async fn ensure_unified_search_access(http: &dyn HttpClientPort) -> Result<AdminProfile> {
    match fetch_current_admin(http).await {
        Some(profile) if can_access_unified_search(&profile) => Ok(profile),
        Some(_) => Err(AdminError::AccessDenied(
            "unified search is not enabled for this admin".to_string(),
        )),
        None => Err(AdminError::AccessDenied("could not verify admin permissions".to_string())),
    }
}
