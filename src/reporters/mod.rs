// src/reporters/mod.rs

mod console;
mod memory;
mod tracing_reporter;

pub use console::ConsoleReporter;
pub use memory::MemoryReporter;
pub use tracing_reporter::TracingReporter;

use crate::{IncidentEvent, ReporterKind, ports::IncidentReporter};

/// Discards every event.
#[derive(Debug, Clone, Default)]
pub struct SilentReporter;

impl IncidentReporter for SilentReporter {
    fn report(&self, _event: &IncidentEvent) {}
}

/// Builds the reporter selected in configuration.
pub fn from_kind(kind: ReporterKind) -> Box<dyn IncidentReporter> {
    match kind {
        ReporterKind::Console => Box::new(ConsoleReporter::new()),
        ReporterKind::Tracing => Box::new(TracingReporter::new()),
        ReporterKind::Silent => Box::new(SilentReporter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_accepts_events() {
        for kind in [ReporterKind::Console, ReporterKind::Tracing, ReporterKind::Silent] {
            let reporter = from_kind(kind);
            reporter.report(&IncidentEvent::Estimated { hours: 3 });
        }
    }

    #[test]
    fn test_event_lines() {
        assert_eq!(
            IncidentEvent::Assigned {
                technician: "Network Administrator".to_string()
            }
            .to_string(),
            "Assigning to: Network Administrator"
        );
    }
}
