use serde_json::Value;

use crate::error::{AdminError, Result};
use crate::search::record::{parse_created_at, status_of, EntityGroup, UnifiedRecord};

/// Maps one raw entity of a group into the unified shape
pub trait GroupNormalizer: Send + Sync {
    fn group(&self) -> EntityGroup;

    /// Group-specific human readable identifier
    fn id_label(&self, id: &str, data: &Value) -> String;

    /// Aliases tried, in order, for the display name
    fn name_keys(&self) -> &'static [&'static str] {
        &["fullName", "name"]
    }

    fn normalize(&self, data: &Value) -> Result<UnifiedRecord> {
        NormalizerUtils::build_record(self, data)
    }
}

/// Shared field extraction for the group normalizers
pub struct NormalizerUtils;

impl NormalizerUtils {
    const PHONE_KEYS: &'static [&'static str] =
        &["phone", "mobile", "phoneNumber", "contactNumber"];
    const PHONE_ALT_KEYS: &'static [&'static str] =
        &["phoneAlt", "alternatePhone", "altPhone", "alternateContact"];
    const AADHAR_KEYS: &'static [&'static str] = &["aadharNumber", "aadhaarNumber", "aadhar"];

    /// First key holding a non-empty scalar, rendered as a string
    pub fn first_string(data: &Value, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| Self::scalar_string(data.get(key)?))
    }

    fn scalar_string(value: &Value) -> Option<String> {
        let text = match value {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Last `n` characters, upper-cased. Shorter input is used whole.
    pub fn upper_suffix(value: &str, n: usize) -> String {
        let count = value.chars().count();
        value.chars().skip(count.saturating_sub(n)).collect::<String>().to_uppercase()
    }

    pub fn extract_id(data: &Value) -> Option<String> {
        Self::first_string(data, &["_id", "id"])
    }

    fn build_record<N: GroupNormalizer + ?Sized>(
        normalizer: &N,
        data: &Value,
    ) -> Result<UnifiedRecord> {
        let group = normalizer.group();
        if !data.is_object() {
            return Err(AdminError::Aggregate(format!(
                "{} entry is not an object: {}",
                group, data
            )));
        }
        let id = Self::extract_id(data).unwrap_or_default();
        let id_label = normalizer.id_label(&id, data);
        let status = status_of(data.get("status").and_then(|v| v.as_str()));
        let created_at = data.get("createdAt").and_then(|v| v.as_str()).and_then(parse_created_at);

        Ok(UnifiedRecord {
            group,
            name: Self::first_string(data, normalizer.name_keys()),
            email: Self::first_string(data, &["email"]),
            phone: Self::first_string(data, Self::PHONE_KEYS),
            phone_alt: Self::first_string(data, Self::PHONE_ALT_KEYS),
            aadhar_number: Self::first_string(data, Self::AADHAR_KEYS),
            reg_no: Self::first_string(data, &["regNo", "registrationNumber"]),
            transaction_id: Self::first_string(data, &["transactionId"]),
            id_label,
            status,
            created_at,
            id,
        })
    }
}
