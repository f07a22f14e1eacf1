use crate::Language;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of an incident.
///
/// Incidents are always created `Open`; nothing in this crate moves them
/// to another state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Open,
    InProgress,
    Closed,
}

impl Status {
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Open, Language::English) => "open",
            (Self::InProgress, Language::English) => "in_progress",
            (Self::Closed, Language::English) => "closed",
            (Self::Open, Language::Spanish) => "abierta",
            (Self::InProgress, Language::Spanish) => "en_progreso",
            (Self::Closed, Language::Spanish) => "cerrada",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Language::English))
    }
}
