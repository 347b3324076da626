//! Export/import file format.
//!
//! The wire shape matches the original export files, so backups taken with
//! older builds keep importing: `{ favorites, history, autoPlayAudio }`.

use chrono::NaiveDate;
use kelime_types::TranslationItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("invalid backup file: {0}")]
    Invalid(String),
}

/// All three keys are required; a file missing any of them (or with a
/// non-boolean `autoPlayAudio`) is rejected wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub favorites: Vec<TranslationItem>,
    pub history: Vec<TranslationItem>,
    pub auto_play_audio: bool,
}

impl Backup {
    pub fn to_json(&self) -> Result<String, BackupError> {
        serde_json::to_string_pretty(self).map_err(|e| BackupError::Invalid(e.to_string()))
    }

    pub fn from_json(data: &str) -> Result<Self, BackupError> {
        serde_json::from_str(data).map_err(|e| BackupError::Invalid(e.to_string()))
    }

    pub fn file_name(date: NaiveDate) -> String {
        format!("translator_backup_{}.json", date.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> TranslationItem {
        TranslationItem {
            id: id.to_string(),
            from_text: "elma".to_string(),
            to_text: "apple".to_string(),
            source_lang: "tr".to_string(),
            target_lang: "en".to_string(),
            pronunciation: String::new(),
            meanings: Vec::new(),
        }
    }

    #[test]
    fn round_trips_with_camel_case_keys() {
        let backup = Backup {
            favorites: vec![item("1")],
            history: vec![item("2")],
            auto_play_audio: true,
        };

        let json = backup.to_json().unwrap();
        assert!(json.contains("\"autoPlayAudio\""));
        assert!(json.contains("\"fromText\""));

        let parsed = Backup::from_json(&json).unwrap();
        assert_eq!(parsed.favorites.len(), 1);
        assert_eq!(parsed.history[0].id, "2");
        assert!(parsed.auto_play_audio);
    }

    #[test]
    fn missing_keys_are_rejected() {
        assert!(Backup::from_json(r#"{ "favorites": [] }"#).is_err());
        assert!(Backup::from_json(r#"{ "favorites": [], "history": [] }"#).is_err());
        assert!(
            Backup::from_json(r#"{ "favorites": [], "history": [], "autoPlayAudio": "yes" }"#)
                .is_err()
        );
    }

    #[test]
    fn accepts_items_without_optional_fields() {
        // Items from older exports may lack pronunciation/meanings.
        let json = r#"{
            "favorites": [{
                "id": "2024-01-01T00:00:00.000Z",
                "fromText": "elma",
                "toText": "apple",
                "sourceLang": "tr",
                "targetLang": "en"
            }],
            "history": [],
            "autoPlayAudio": false
        }"#;

        let parsed = Backup::from_json(json).unwrap();
        assert_eq!(parsed.favorites[0].from_text, "elma");
        assert!(parsed.favorites[0].meanings.is_empty());
    }

    #[test]
    fn file_name_embeds_the_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        assert_eq!(Backup::file_name(date), "translator_backup_2026-08-27.json");
    }
}
