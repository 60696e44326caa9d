use std::collections::HashMap;

use super::{GroupNormalizer, InstitutionNormalizer, OfficialNormalizer, PlayerNormalizer};
use crate::error::{AdminError, Result};
use crate::search::record::{EntityGroup, UnifiedRecord};
use crate::types::RawEntity;

/// Dispatch table from entity group to its normalizer
pub struct NormalizationRegistry {
    normalizers: HashMap<EntityGroup, Box<dyn GroupNormalizer>>,
}

impl Default for NormalizationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizationRegistry {
    /// Registry with the built-in player, institution and official normalizers
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(PlayerNormalizer));
        registry.register(Box::new(InstitutionNormalizer));
        registry.register(Box::new(OfficialNormalizer));
        registry
    }

    pub fn empty() -> Self {
        Self { normalizers: HashMap::new() }
    }

    /// Register a normalizer under the group it reports
    pub fn register(&mut self, normalizer: Box<dyn GroupNormalizer>) {
        self.normalizers.insert(normalizer.group(), normalizer);
    }

    pub fn get_normalizer(&self, group: EntityGroup) -> Option<&dyn GroupNormalizer> {
        self.normalizers.get(&group).map(|n| n.as_ref())
    }

    pub fn normalize(&self, group: EntityGroup, data: &RawEntity) -> Result<UnifiedRecord> {
        let normalizer = self
            .get_normalizer(group)
            .ok_or_else(|| {
                AdminError::Aggregate(format!("No normalizer registered for {}", group))
            })?;
        normalizer.normalize(data)
    }

    pub fn normalize_all(
        &self,
        group: EntityGroup,
        entities: &[RawEntity],
    ) -> Result<Vec<UnifiedRecord>> {
        entities.iter().map(|data| self.normalize(group, data)).collect()
    }
}
