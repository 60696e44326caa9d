// Base trait and utilities for group-specific normalizers
pub mod base;

pub mod institution;
pub mod official;
pub mod player;
pub mod registry;

pub use base::{GroupNormalizer, NormalizerUtils};
pub use institution::InstitutionNormalizer;
pub use official::OfficialNormalizer;
pub use player::PlayerNormalizer;
pub use registry::NormalizationRegistry;
