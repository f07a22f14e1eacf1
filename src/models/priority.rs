use crate::Language;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Low, Language::English) => "low",
            (Self::Medium, Language::English) => "medium",
            (Self::High, Language::English) => "high",
            (Self::Critical, Language::English) => "critical",
            (Self::Low, Language::Spanish) => "baja",
            (Self::Medium, Language::Spanish) => "media",
            (Self::High, Language::Spanish) => "alta",
            (Self::Critical, Language::Spanish) => "critica",
        }
    }

    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Critical)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Language::English))
    }
}
