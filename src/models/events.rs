use std::fmt;

/// Informational events emitted while an incident is being processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncidentEvent {
    Processing { title: String },

    Assigned { technician: String },

    Estimated { hours: u32 },
}

impl fmt::Display for IncidentEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Processing { title } => write!(f, "Processing incident: {}", title),
            Self::Assigned { technician } => write!(f, "Assigning to: {}", technician),
            Self::Estimated { hours } => write!(f, "Estimated time: {} hours", hours),
        }
    }
}
