// Content fingerprints for resolved course records (served as the HTTP ETag).

use crate::domain::course::CourseRecord;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

// Domain separation so a record digest never collides with other hashed payloads.
const RECORD_DOMAIN: &[u8] = b"COURSEREC";

/// Sorts a JSON object's keys recursively for canonical serialization.
fn sort_json_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted_map: BTreeMap<String, Value> = map
                .iter()
                .map(|(k, v)| (k.clone(), sort_json_value(v)))
                .collect();
            Value::Object(sorted_map.into_iter().collect())
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sort_json_value).collect()),
        _ => value.clone(),
    }
}

/// Hex SHA-256 of a JSON value's canonical (key-sorted) serialization.
pub fn fingerprint_value(value: &Value) -> String {
    let canonical_string = sort_json_value(value).to_string();

    let mut hasher = Sha256::new();
    hasher.update(RECORD_DOMAIN);
    hasher.update(canonical_string.as_bytes());
    hex::encode(hasher.finalize())
}

/// Fingerprint of a course record. Equal records always share a fingerprint.
pub fn fingerprint(record: &CourseRecord) -> Result<String, serde_json::Error> {
    Ok(fingerprint_value(&serde_json::to_value(record)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_order_does_not_change_fingerprint() {
        let a = json!({ "title": "A", "id": "1", "nested": { "y": 1, "x": 2 } });
        let b = json!({ "nested": { "x": 2, "y": 1 }, "id": "1", "title": "A" });
        assert_eq!(fingerprint_value(&a), fingerprint_value(&b));
        assert_eq!(fingerprint_value(&a).len(), 64);
    }

    #[test]
    fn different_records_differ() {
        let a = CourseRecord {
            id: Some("1".into()),
            title: "A".into(),
            ..Default::default()
        };
        let b = CourseRecord {
            title: "B".into(),
            ..a.clone()
        };
        assert_ne!(fingerprint(&a).unwrap(), fingerprint(&b).unwrap());
        assert_eq!(fingerprint(&a).unwrap(), fingerprint(&a.clone()).unwrap());
    }
}
