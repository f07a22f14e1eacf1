use crate::{Language, Priority, Status};
use serde::{Deserialize, Serialize};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Read-only view of an incident, suitable for external reporting.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IncidentSummary {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    pub created_at: String,
    pub estimated_hours: u32,
    pub specialized_technician: String,
    #[serde(default)]
    pub language: Language,
}

impl IncidentSummary {
    /// Key/value pairs in display order, with tag values in the summary's language.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("status", self.status.label(self.language).to_string()),
            ("priority", self.priority.label(self.language).to_string()),
            ("created_at", self.created_at.clone()),
            ("estimated_hours", self.estimated_hours.to_string()),
            ("specialized_technician", self.specialized_technician.clone()),
        ]
    }

    pub fn to_json(&self) -> Result<String, crate::HelpdeskError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(language: Language) -> IncidentSummary {
        IncidentSummary {
            title: "Printer jam".to_string(),
            description: "Paper stuck".to_string(),
            status: Status::Open,
            priority: Priority::High,
            created_at: "2024-01-02 03:04:05".to_string(),
            estimated_hours: 4,
            specialized_technician: "Hardware Technician".to_string(),
            language,
        }
    }

    #[test]
    fn test_fields_order() {
        let keys: Vec<_> = sample(Language::English)
            .fields()
            .into_iter()
            .map(|(k, _)| k)
            .collect();

        assert_eq!(
            keys,
            vec![
                "title",
                "description",
                "status",
                "priority",
                "created_at",
                "estimated_hours",
                "specialized_technician",
            ]
        );
    }

    #[test]
    fn test_fields_localized() {
        let fields = sample(Language::Spanish).fields();
        assert_eq!(fields[2], ("status", "abierta".to_string()));
        assert_eq!(fields[3], ("priority", "alta".to_string()));
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&sample(Language::English).to_json().unwrap()).unwrap();

        assert_eq!(json["status"], "open");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["estimated_hours"], 4);
        assert_eq!(json["language"], "english");
    }

    #[test]
    fn test_spanish_summary_round_trips() {
        let original = sample(Language::Spanish);
        let restored: IncidentSummary = serde_json::from_str(&original.to_json().unwrap()).unwrap();

        assert_eq!(restored, original);
        assert_eq!(restored.fields(), original.fields());
        assert_eq!(restored.fields()[2], ("status", "abierta".to_string()));
    }

    #[test]
    fn test_missing_language_defaults_to_english() {
        let json = r#"{
            "title": "Printer jam",
            "description": "Paper stuck",
            "status": "open",
            "priority": "high",
            "created_at": "2024-01-02 03:04:05",
            "estimated_hours": 4,
            "specialized_technician": "Hardware Technician"
        }"#;
        let summary: IncidentSummary = serde_json::from_str(json).unwrap();

        assert_eq!(summary, sample(Language::English));
    }
}
