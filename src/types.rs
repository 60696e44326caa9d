use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw entity as returned by the admin API. Shapes differ per entity group and are
/// only read, never validated beyond the envelope checks below.
pub type RawEntity = Value;

/// `{ success, data: [...] }` envelope of the list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiListResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl ApiListResponse {
    /// Entities when the envelope is well formed: `success == true` and `data` is an array.
    pub fn into_entities(self) -> Option<Vec<RawEntity>> {
        if self.success != Some(true) {
            return None;
        }
        match self.data {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        }
    }
}

/// `{ success, admin: { ... } }` envelope of `/api/admin/me`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminMeResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub admin: Option<AdminProfile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdminProfile {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub permissions: AdminPermissions,
}

/// Capability flags. Only the unified search flag is consumed here; the rest are kept
/// so that `whoami` can show them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminPermissions {
    #[serde(default)]
    pub can_access_unified_search: bool,
    #[serde(flatten)]
    pub other: serde_json::Map<String, Value>,
}
