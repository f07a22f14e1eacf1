// src/factories/incident_factory.rs

use crate::{
    Category, HelpdeskError, Incident, IncidentEvent, IncidentSummary, Language,
    ports::IncidentReporter,
};
use std::fmt;

/// Signature shared by every per-category constructor.
pub type IncidentConstructor = fn(String, String, u64) -> Result<Incident, HelpdeskError>;

pub fn create_hardware(
    title: String,
    description: String,
    user_id: u64,
) -> Result<Incident, HelpdeskError> {
    Incident::new(Category::Hardware, title, description, user_id)
}

pub fn create_software(
    title: String,
    description: String,
    user_id: u64,
) -> Result<Incident, HelpdeskError> {
    Incident::new(Category::Software, title, description, user_id)
}

pub fn create_network(
    title: String,
    description: String,
    user_id: u64,
) -> Result<Incident, HelpdeskError> {
    Incident::new(Category::Network, title, description, user_id)
}

pub fn create_security(
    title: String,
    description: String,
    user_id: u64,
) -> Result<Incident, HelpdeskError> {
    Incident::new(Category::Security, title, description, user_id)
}

/// Factory bound to exactly one incident category.
///
/// The binding happens once in [`IncidentFactory::for_category`]; `create`
/// never branches on input.
#[derive(Clone, Copy)]
pub struct IncidentFactory {
    category: Category,
    constructor: IncidentConstructor,
}

impl IncidentFactory {
    pub fn for_category(category: Category) -> Self {
        let constructor: IncidentConstructor = match category {
            Category::Hardware => create_hardware,
            Category::Software => create_software,
            Category::Network => create_network,
            Category::Security => create_security,
        };

        Self {
            category,
            constructor,
        }
    }

    /// Returns the category this factory builds.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Creates a new incident of this factory's category.
    ///
    /// # Arguments
    /// * `title` - Incident title (must be non-empty)
    /// * `description` - Incident description (must be non-empty)
    /// * `user_id` - Reporting user (must be positive)
    ///
    /// # Returns
    /// * `Ok(Incident)` - Open incident with category defaults applied
    /// * `Err(HelpdeskError)` - Validation error
    pub fn create(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        user_id: u64,
    ) -> Result<Incident, HelpdeskError> {
        (self.constructor)(title.into(), description.into(), user_id)
    }

    /// Creates an incident, reports it and returns its summary.
    ///
    /// Three events are reported after a successful construction: the
    /// title, the assigned technician and the estimated hours. Nothing is
    /// reported when validation fails.
    ///
    /// # Arguments
    /// * `title` - Incident title
    /// * `description` - Incident description
    /// * `user_id` - Reporting user
    /// * `reporter` - Sink for the informational events
    /// * `language` - Language of the technician label
    pub fn process<R: IncidentReporter + ?Sized>(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        user_id: u64,
        reporter: &R,
        language: Language,
    ) -> Result<IncidentSummary, HelpdeskError> {
        let incident = self.create(title, description, user_id)?;

        tracing::debug!(
            id = %incident.id(),
            category = %self.category,
            user = incident.reported_by().get(),
            "Created incident"
        );

        reporter.report(&IncidentEvent::Processing {
            title: incident.title().to_string(),
        });
        reporter.report(&IncidentEvent::Assigned {
            technician: incident.specialized_technician_in(language).to_string(),
        });
        reporter.report(&IncidentEvent::Estimated {
            hours: incident.estimated_hours(),
        });

        Ok(incident.summary_in(language))
    }
}

impl fmt::Debug for IncidentFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncidentFactory")
            .field("category", &self.category)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Priority, Status, reporters::MemoryReporter};

    #[test]
    fn test_each_factory_builds_its_category() {
        for category in Category::ALL {
            let factory = IncidentFactory::for_category(category);
            let incident = factory.create("Title", "Description", 3).unwrap();

            assert_eq!(factory.category(), category);
            assert_eq!(incident.category(), category);
        }
    }

    #[test]
    fn test_constructor_functions() {
        let incident = create_network("Slow link".into(), "Whole floor".into(), 3).unwrap();
        assert_eq!(incident.priority(), Priority::Critical);
        assert_eq!(incident.estimated_hours(), 3);
        assert_eq!(incident.specialized_technician(), "Network Administrator");
    }

    #[test]
    fn test_process_reports_three_events() {
        let reporter = MemoryReporter::new();
        let factory = IncidentFactory::for_category(Category::Software);

        let summary = factory
            .process(
                "Excel crash",
                "Closes on large files",
                2,
                &reporter,
                Language::English,
            )
            .unwrap();

        assert_eq!(
            reporter.events(),
            vec![
                IncidentEvent::Processing {
                    title: "Excel crash".to_string()
                },
                IncidentEvent::Assigned {
                    technician: "Software Developer/Technician".to_string()
                },
                IncidentEvent::Estimated { hours: 2 },
            ]
        );
        assert_eq!(summary.status, Status::Open);
        assert_eq!(summary.priority, Priority::Medium);
    }

    #[test]
    fn test_process_invalid_input_reports_nothing() {
        let reporter = MemoryReporter::new();
        let factory = IncidentFactory::for_category(Category::Hardware);

        let result = factory.process("", "Paper stuck", 1, &reporter, Language::English);

        assert!(matches!(result, Err(HelpdeskError::ValidationError(_))));
        assert!(reporter.events().is_empty());
    }

    #[test]
    fn test_process_localized() {
        let reporter = MemoryReporter::new();
        let factory = IncidentFactory::for_category(Category::Security);

        let summary = factory
            .process("Phishing", "Suspicious email", 4, &reporter, Language::Spanish)
            .unwrap();

        assert_eq!(summary.specialized_technician, "Especialista en Seguridad");
        assert_eq!(
            reporter.lines()[1],
            "Assigning to: Especialista en Seguridad"
        );
    }
}
