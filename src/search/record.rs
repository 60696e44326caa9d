use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    INSTITUTIONS_PATH, INSTITUTION_DETAIL_ROUTE, OFFICIALS_PATH, OFFICIAL_DETAIL_ROUTE,
    PLAYERS_PATH, PLAYER_DETAIL_ROUTE,
};

/// Provenance of a unified record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityGroup {
    Player,
    Institution,
    Official,
}

impl EntityGroup {
    pub const ALL: [EntityGroup; 3] =
        [EntityGroup::Player, EntityGroup::Institution, EntityGroup::Official];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityGroup::Player => "Player",
            EntityGroup::Institution => "Institution",
            EntityGroup::Official => "Official",
        }
    }

    /// List endpoint on the admin API
    pub fn endpoint(&self) -> &'static str {
        match self {
            EntityGroup::Player => PLAYERS_PATH,
            EntityGroup::Institution => INSTITUTIONS_PATH,
            EntityGroup::Official => OFFICIALS_PATH,
        }
    }

    /// Back-office detail route for a record of this group
    pub fn detail_route(&self, id: &str) -> String {
        let template = match self {
            EntityGroup::Player => PLAYER_DETAIL_ROUTE,
            EntityGroup::Institution => INSTITUTION_DETAIL_ROUTE,
            EntityGroup::Official => OFFICIAL_DETAIL_ROUTE,
        };
        template.replace("{id}", id)
    }

    /// Filename prefix for CSV exports of this group
    pub fn export_prefix(&self) -> &'static str {
        match self {
            EntityGroup::Player => "players",
            EntityGroup::Institution => "institutions",
            EntityGroup::Official => "technical-officials",
        }
    }
}

impl fmt::Display for EntityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "player" | "players" => Ok(EntityGroup::Player),
            "institution" | "institutions" => Ok(EntityGroup::Institution),
            "official" | "officials" | "technical-official" | "technical-officials" => {
                Ok(EntityGroup::Official)
            }
            other => Err(format!("unknown entity group '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Approved => "Approved",
            Status::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "approved" => Ok(Status::Approved),
            "rejected" => Ok(Status::Rejected),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

/// The one place where an absent or unrecognised status becomes `Pending`.
pub fn status_of(raw: Option<&str>) -> Status {
    raw.and_then(|s| s.parse().ok()).unwrap_or_default()
}

/// Parses an API timestamp. RFC 3339 first, then a bare `YYYY-MM-DD`.
pub fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Normalised view of a player, institution or technical official.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedRecord {
    pub id: String,
    pub group: EntityGroup,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub phone_alt: Option<String>,
    pub aadhar_number: Option<String>,
    pub reg_no: Option<String>,
    pub transaction_id: Option<String>,
    pub id_label: String,
    pub status: Status,
    pub created_at: Option<DateTime<Utc>>,
}

impl UnifiedRecord {
    /// Back-office page for this record
    pub fn detail_route(&self) -> String {
        self.group.detail_route(&self.id)
    }

    /// Values the free-text query is matched against
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.name.as_deref(),
            self.email.as_deref(),
            self.phone.as_deref(),
            self.phone_alt.as_deref(),
            self.aadhar_number.as_deref(),
            self.reg_no.as_deref(),
            self.transaction_id.as_deref(),
            Some(self.id_label.as_str()),
            Some(self.id.as_str()),
        ]
        .into_iter()
        .flatten()
    }
}
