use crate::{IncidentEvent, ports::IncidentReporter};
use std::io::Write;

/// Writes each event as a line on standard output.
#[derive(Debug, Clone, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl IncidentReporter for ConsoleReporter {
    fn report(&self, event: &IncidentEvent) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", event) {
            tracing::warn!("Failed to write incident event to stdout: {}", e);
        }
    }
}
