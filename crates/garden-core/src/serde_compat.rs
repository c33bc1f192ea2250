//! JSON boundary with the storage and rendering collaborators.
//!
//! Records come from a document store that may emit integer ids and loosely
//! formatted timestamps; both are normalised on the way in. Layouts go out
//! as plain JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::layout::GardenLayout;
use crate::memory::MemoryRecord;
use crate::time::parse_timestamp;

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(serde_json::Number),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireTimestamp {
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Accept `"42"` or `42` as an id.
pub fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match WireId::deserialize(deserializer)? {
        WireId::Text(s) => s,
        WireId::Number(n) => n.to_string(),
    })
}

/// Parse a timestamp leniently: null, non-strings and unparsable strings all
/// become `None`.
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<WireTimestamp>::deserialize(deserializer)? {
        Some(WireTimestamp::Text(s)) => parse_timestamp(&s),
        _ => None,
    })
}

/// Import a JSON array of memory records.
pub fn import_records(json: &str) -> Result<Vec<MemoryRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Export a layout as pretty-printed JSON.
pub fn export_layout(layout: &GardenLayout) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::Emotion;
    use crate::layout::LayoutGenerator;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_numeric_and_string_ids() {
        let records = import_records(
            r#"[
                {"id": 7, "created_at": "2026-01-01T00:00:00Z"},
                {"id": "abc", "created_at": "2026-01-01T00:00:00Z"}
            ]"#,
        )
        .unwrap();
        assert_eq!(records[0].id, "7");
        assert_eq!(records[1].id, "abc");
    }

    #[test]
    fn test_malformed_timestamps_become_none() {
        let records = import_records(
            r#"[
                {"id": 1, "created_at": "not a date", "unlock_at": 12345},
                {"id": 2, "created_at": null},
                {"id": 3}
            ]"#,
        )
        .unwrap();
        for r in &records {
            assert_eq!(r.created_at, None);
            assert_eq!(r.unlock_at, None);
        }
    }

    #[test]
    fn test_optional_fields() {
        let records = import_records(
            r#"[{"id": 1, "emotion": "sad", "title": "Rainy day",
                 "created_at": "2026-01-01 08:30:00", "unlock_at": "2027-01-01"}]"#,
        )
        .unwrap();
        let r = &records[0];
        assert_eq!(r.resolved_emotion(), Emotion::Sad);
        assert_eq!(r.title.as_deref(), Some("Rainy day"));
        assert_eq!(
            r.created_at,
            Some(Utc.with_ymd_and_hms(2026, 1, 1, 8, 30, 0).unwrap())
        );
        assert_eq!(
            r.unlock_at,
            Some(Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_missing_id_is_an_error() {
        assert!(import_records(r#"[{"emotion": "sad"}]"#).is_err());
    }

    #[test]
    fn test_export_layout_shape() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let records = vec![MemoryRecord::new("m1", now).with_emotion("calm")];
        let mut rng = SmallRng::seed_from_u64(42);
        let layout = LayoutGenerator::default().generate(&records, now, &mut rng);

        let json = export_layout(&layout).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let flower = &value["flowers"][0];
        assert_eq!(flower["memory"]["id"], "m1");
        assert_eq!(flower["state"], "bud");
        assert_eq!(flower["cluster"], "calm");
        assert!(flower["x"].is_number());
        assert!(value["slots"].is_array());
        assert_eq!(value["requested_slots"], 20);
        if let Some(slot) = value["slots"].as_array().and_then(|s| s.first()) {
            assert_eq!(slot["ready_to_plant"], true);
        }
    }
}
