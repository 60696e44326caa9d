use serde_json::Value;

use super::base::{GroupNormalizer, NormalizerUtils};
use crate::constants::{INSTITUTION_ID_PREFIX, INSTITUTION_ID_SUFFIX_LEN};
use crate::search::record::EntityGroup;

/// Normalizer for affiliated institutions (schools, clubs)
pub struct InstitutionNormalizer;

impl GroupNormalizer for InstitutionNormalizer {
    fn group(&self) -> EntityGroup {
        EntityGroup::Institution
    }

    fn id_label(&self, id: &str, data: &Value) -> String {
        NormalizerUtils::first_string(data, &["regNo"]).unwrap_or_else(|| {
            format!(
                "{}{}",
                INSTITUTION_ID_PREFIX,
                NormalizerUtils::upper_suffix(id, INSTITUTION_ID_SUFFIX_LEN)
            )
        })
    }

    fn name_keys(&self) -> &'static [&'static str] {
        &["instituteName", "institutionName", "name"]
    }
}
