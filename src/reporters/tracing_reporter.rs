use crate::{IncidentEvent, ports::IncidentReporter};

/// Forwards events to the `tracing` subscriber as `info` records.
#[derive(Debug, Clone, Default)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl IncidentReporter for TracingReporter {
    fn report(&self, event: &IncidentEvent) {
        match event {
            IncidentEvent::Processing { title } => {
                tracing::info!(title = %title, "{}", event)
            }
            IncidentEvent::Assigned { technician } => {
                tracing::info!(technician = %technician, "{}", event)
            }
            IncidentEvent::Estimated { hours } => {
                tracing::info!(hours = *hours, "{}", event)
            }
        }
    }
}
