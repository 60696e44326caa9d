use serde_json::Value;

use super::base::{GroupNormalizer, NormalizerUtils};
use crate::constants::{PLAYER_ID_PREFIX, PLAYER_TXN_SUFFIX_LEN};
use crate::search::record::EntityGroup;

/// Normalizer for registered players
pub struct PlayerNormalizer;

impl GroupNormalizer for PlayerNormalizer {
    fn group(&self) -> EntityGroup {
        EntityGroup::Player
    }

    // idNo wins; otherwise the payment reference identifies the registration
    fn id_label(&self, _id: &str, data: &Value) -> String {
        if let Some(id_no) = NormalizerUtils::first_string(data, &["idNo"]) {
            return id_no;
        }
        match NormalizerUtils::first_string(data, &["transactionId"]) {
            Some(txn) => format!(
                "{}{}",
                PLAYER_ID_PREFIX,
                NormalizerUtils::upper_suffix(&txn, PLAYER_TXN_SUFFIX_LEN)
            ),
            None => String::new(),
        }
    }

    fn name_keys(&self) -> &'static [&'static str] {
        &["fullName", "name", "playerName"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::record::Status;
    use serde_json::json;

    #[test]
    fn id_no_wins_over_transaction() {
        let record = PlayerNormalizer
            .normalize(&json!({"_id": "p1", "idNo": "DDKA-0042", "transactionId": "abc123456789"}))
            .unwrap();
        assert_eq!(record.id_label, "DDKA-0042");
    }

    #[test]
    fn falls_back_to_transaction_suffix() {
        let record = PlayerNormalizer
            .normalize(&json!({"_id": "p1", "transactionId": "abc123456xyz"}))
            .unwrap();
        assert_eq!(record.id_label, "DDKA-456XYZ");
    }

    #[test]
    fn empty_label_without_either() {
        let record = PlayerNormalizer
            .normalize(&json!({"_id": "p1", "fullName": "Ravi Kumar", "transactionId": ""}))
            .unwrap();
        assert_eq!(record.id_label, "");
        assert_eq!(record.name.as_deref(), Some("Ravi Kumar"));
        assert_eq!(record.status, Status::Pending);
        assert!(record.created_at.is_none());
    }

    #[test]
    fn reads_contact_fields() {
        let record = PlayerNormalizer
            .normalize(&json!({
                "_id": "p2",
                "fullName": "Asha",
                "email": "asha@example.com",
                "phone": "9000000001",
                "alternatePhone": "9000000002",
                "aadharNumber": "1234 5678 9012",
                "status": "Approved",
                "createdAt": "2025-02-01T08:00:00Z"
            }))
            .unwrap();
        assert_eq!(record.phone.as_deref(), Some("9000000001"));
        assert_eq!(record.phone_alt.as_deref(), Some("9000000002"));
        assert_eq!(record.aadhar_number.as_deref(), Some("1234 5678 9012"));
        assert_eq!(record.status, Status::Approved);
        assert!(record.created_at.is_some());
    }

    #[test]
    fn non_object_is_an_error() {
        assert!(PlayerNormalizer.normalize(&json!("p1")).is_err());
    }
}
