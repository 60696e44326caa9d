use serde_json::Value;

use super::base::{GroupNormalizer, NormalizerUtils};
use crate::constants::{OFFICIAL_ID_PREFIX, OFFICIAL_ID_SUFFIX_LEN};
use crate::search::record::EntityGroup;

/// Normalizer for technical officials
pub struct OfficialNormalizer;

impl GroupNormalizer for OfficialNormalizer {
    fn group(&self) -> EntityGroup {
        EntityGroup::Official
    }

    fn id_label(&self, id: &str, _data: &Value) -> String {
        let suffix = NormalizerUtils::upper_suffix(id, OFFICIAL_ID_SUFFIX_LEN);
        format!("{}{}", OFFICIAL_ID_PREFIX, suffix)
    }

    fn name_keys(&self) -> &'static [&'static str] {
        &["candidateName", "fullName", "name"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn label_is_always_derived_from_id() {
        let record = OfficialNormalizer
            .normalize(&json!({
                "_id": "66b2c3d4e5f6",
                "candidateName": "M. Das",
                "idNo": "ignored"
            }))
            .unwrap();
        assert_eq!(record.id_label, "DDKA-2026-E5F6");
        assert_eq!(record.name.as_deref(), Some("M. Das"));
    }
}
