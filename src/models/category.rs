use crate::{HelpdeskError, Language, Priority};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a reported incident.
///
/// The category alone decides the default priority, the estimated
/// resolution time and the kind of technician an incident is routed to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hardware,
    Software,
    Network,
    Security,
}

impl Category {
    /// All categories in their canonical registration order.
    pub const ALL: [Category; 4] = [
        Category::Hardware,
        Category::Software,
        Category::Network,
        Category::Security,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Hardware => "hardware",
            Self::Software => "software",
            Self::Network => "network",
            Self::Security => "security",
        }
    }

    /// Tag as displayed in the given language. Parsing accepts both forms.
    pub fn tag_in(&self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Network, Language::Spanish) => "red",
            (Self::Security, Language::Spanish) => "seguridad",
            _ => self.tag(),
        }
    }

    pub fn default_priority(&self) -> Priority {
        match self {
            Self::Hardware => Priority::High,
            Self::Software => Priority::Medium,
            Self::Network | Self::Security => Priority::Critical,
        }
    }

    /// Estimated resolution time in hours.
    pub fn estimated_hours(&self) -> u32 {
        match self {
            Self::Hardware => 4,
            Self::Software => 2,
            Self::Network => 3,
            Self::Security => 6,
        }
    }

    pub fn specialized_technician(&self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Hardware, Language::English) => "Hardware Technician",
            (Self::Hardware, Language::Spanish) => "Técnico de Hardware",
            (Self::Software, Language::English) => "Software Developer/Technician",
            (Self::Software, Language::Spanish) => "Desarrollador/Técnico de Software",
            (Self::Network, Language::English) => "Network Administrator",
            (Self::Network, Language::Spanish) => "Administrador de Redes",
            (Self::Security, Language::English) => "Security Specialist",
            (Self::Security, Language::Spanish) => "Especialista en Seguridad",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl TryFrom<&str> for Category {
    type Error = HelpdeskError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "hardware" => Ok(Self::Hardware),
            "software" => Ok(Self::Software),
            "network" | "red" => Ok(Self::Network),
            "security" | "seguridad" => Ok(Self::Security),
            _ => Err(HelpdeskError::unsupported(value)),
        }
    }
}

impl FromStr for Category {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
