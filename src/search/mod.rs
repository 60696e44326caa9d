//! Unified record model: per-group normalization, merge ordering and filtering.

pub mod filter;
pub mod normalizers;
pub mod record;

pub use filter::{GroupFilter, SearchFilter, StatusFilter, StatusSummary};
pub use normalizers::NormalizationRegistry;
pub use record::{status_of, EntityGroup, Status, UnifiedRecord};

/// Newest first; records without a timestamp come after every dated record.
pub fn sort_newest_first(records: &mut [UnifiedRecord]) {
    // `None < Some(_)`, so reversing puts undated records last
    records.sort_by_key(|r| std::cmp::Reverse(r.created_at));
}
