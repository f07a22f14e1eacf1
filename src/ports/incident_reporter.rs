use crate::IncidentEvent;
use std::sync::Arc;

/// Sink for the informational lines emitted while processing an incident.
///
/// Reporting is observational only and cannot fail the operation that
/// triggered it.
pub trait IncidentReporter: Send + Sync {
    fn report(&self, event: &IncidentEvent);
}

impl<R: IncidentReporter + ?Sized> IncidentReporter for Arc<R> {
    fn report(&self, event: &IncidentEvent) {
        (**self).report(event)
    }
}

impl<R: IncidentReporter + ?Sized> IncidentReporter for Box<R> {
    fn report(&self, event: &IncidentEvent) {
        (**self).report(event)
    }
}
