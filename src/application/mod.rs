pub mod incident_manager;

pub use incident_manager::IncidentManager;
