// src/factories/mod.rs

mod incident_factory;

pub use incident_factory::{
    IncidentConstructor, IncidentFactory, create_hardware, create_network, create_security,
    create_software,
};
