// src/ports/mod.rs

pub use incident_reporter::IncidentReporter;

pub mod incident_reporter;
