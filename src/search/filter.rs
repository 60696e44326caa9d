use std::collections::BTreeMap;
use std::str::FromStr;

use crate::search::record::{EntityGroup, Status, UnifiedRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupFilter {
    #[default]
    All,
    Only(EntityGroup),
}

impl FromStr for GroupFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(GroupFilter::All)
        } else {
            s.parse().map(GroupFilter::Only)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

/// Client-side filter over the merged record list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub query: String,
    pub status: StatusFilter,
    pub group: GroupFilter,
}

impl SearchFilter {
    pub fn new(query: impl Into<String>, status: StatusFilter, group: GroupFilter) -> Self {
        Self { query: query.into(), status, group }
    }

    pub fn matches(&self, record: &UnifiedRecord) -> bool {
        if let GroupFilter::Only(group) = self.group {
            if record.group != group {
                return false;
            }
        }
        if let StatusFilter::Only(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        record.searchable_fields().any(|field| field.to_lowercase().contains(&needle))
    }

    /// Filtered copy; the input slice is never touched.
    pub fn apply(&self, records: &[UnifiedRecord]) -> Vec<UnifiedRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Pending/Approved/Rejected counts per group over a record view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub counts: BTreeMap<EntityGroup, [usize; 3]>,
}

impl StatusSummary {
    pub fn from_records(records: &[UnifiedRecord]) -> Self {
        let mut counts: BTreeMap<EntityGroup, [usize; 3]> = BTreeMap::new();
        for record in records {
            let slot = match record.status {
                Status::Pending => 0,
                Status::Approved => 1,
                Status::Rejected => 2,
            };
            counts.entry(record.group).or_default()[slot] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, group: EntityGroup, status: Status) -> usize {
        let slot = match status {
            Status::Pending => 0,
            Status::Approved => 1,
            Status::Rejected => 2,
        };
        self.counts.get(&group).map(|c| c[slot]).unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().flat_map(|c| c.iter()).sum()
    }
}
