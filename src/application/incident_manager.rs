use crate::{
    Category, HelpdeskConfig, HelpdeskError, IncidentSummary, Language,
    factories::IncidentFactory, ports::IncidentReporter,
};
use std::sync::Arc;

/// Routes incident creation requests to the factory bound to each category.
///
/// The category table is filled once when the manager is built and never
/// changes afterwards, so one instance can be shared and reused freely.
pub struct IncidentManager<R>
where
    R: IncidentReporter,
{
    factories: Vec<IncidentFactory>,
    reporter: Arc<R>,
    language: Language,
}

impl<R> IncidentManager<R>
where
    R: IncidentReporter,
{
    /// Creates a manager with every known category registered.
    pub fn new(reporter: R) -> Self {
        Self {
            factories: Category::ALL
                .into_iter()
                .map(IncidentFactory::for_category)
                .collect(),
            reporter: Arc::new(reporter),
            language: Language::default(),
        }
    }

    pub fn with_config(config: &HelpdeskConfig, reporter: R) -> Self {
        Self::new(reporter).with_language(config.language)
    }

    /// Creates a manager over an explicit set of factories, kept in the given order.
    pub fn with_factories(
        factories: Vec<IncidentFactory>,
        reporter: R,
    ) -> Result<Self, HelpdeskError> {
        for (i, factory) in factories.iter().enumerate() {
            if factories[..i]
                .iter()
                .any(|f| f.category() == factory.category())
            {
                return Err(HelpdeskError::validation(format!(
                    "Category `{}` registered more than once",
                    factory.category()
                )));
            }
        }

        Ok(Self {
            factories,
            reporter: Arc::new(reporter),
            language: Language::default(),
        })
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn create_incident(
        &self,
        category: Category,
        title: impl Into<String>,
        description: impl Into<String>,
        user_id: u64,
    ) -> Result<IncidentSummary, HelpdeskError> {
        let factory = self.factory_for(category)?;

        tracing::debug!(category = %category, "Dispatching incident creation");

        factory.process(
            title,
            description,
            user_id,
            self.reporter.as_ref(),
            self.language,
        )
    }

    /// Same as [`Self::create_incident`], with the category given as a tag.
    pub fn create_incident_from_tag(
        &self,
        tag: &str,
        title: impl Into<String>,
        description: impl Into<String>,
        user_id: u64,
    ) -> Result<IncidentSummary, HelpdeskError> {
        let category = Category::try_from(tag).inspect_err(|_| {
            tracing::warn!(tag = %tag, "Unknown incident category tag");
        })?;

        self.create_incident(category, title, description, user_id)
    }

    /// Tags of every registered category, in registration order.
    pub fn available_categories(&self) -> Vec<&'static str> {
        self.factories.iter().map(|f| f.category().tag()).collect()
    }

    /// Like [`Self::available_categories`], with tags in the given language.
    pub fn available_categories_in(&self, language: Language) -> Vec<&'static str> {
        self.factories
            .iter()
            .map(|f| f.category().tag_in(language))
            .collect()
    }

    pub fn supports(&self, category: Category) -> bool {
        self.factories.iter().any(|f| f.category() == category)
    }

    fn factory_for(&self, category: Category) -> Result<&IncidentFactory, HelpdeskError> {
        self.factories
            .iter()
            .find(|f| f.category() == category)
            .ok_or_else(|| {
                tracing::warn!(category = %category, "No factory registered for category");
                HelpdeskError::unsupported(category.tag())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Priority, Status, reporters::MemoryReporter};

    #[test]
    fn test_available_categories_in_registration_order() {
        let manager = IncidentManager::new(MemoryReporter::new());

        assert_eq!(
            manager.available_categories(),
            vec!["hardware", "software", "network", "security"]
        );
    }

    #[test]
    fn test_available_categories_localized() {
        let manager = IncidentManager::new(MemoryReporter::new()).with_language(Language::Spanish);

        assert_eq!(
            manager.available_categories_in(manager.language()),
            vec!["hardware", "software", "red", "seguridad"]
        );
        assert_eq!(
            manager.available_categories(),
            vec!["hardware", "software", "network", "security"]
        );
    }

    #[test]
    fn test_create_incident_matches_table() {
        let manager = IncidentManager::new(MemoryReporter::new());
        let expected = [
            (Category::Hardware, Priority::High, 4),
            (Category::Software, Priority::Medium, 2),
            (Category::Network, Priority::Critical, 3),
            (Category::Security, Priority::Critical, 6),
        ];

        for (category, priority, hours) in expected {
            let summary = manager
                .create_incident(category, "Title", "Description", 1)
                .unwrap();

            assert_eq!(summary.priority, priority);
            assert_eq!(summary.estimated_hours, hours);
            assert_eq!(summary.status, Status::Open);
        }

        assert_eq!(manager.reporter().events().len(), 12);
    }

    #[test]
    fn test_unregistered_category_reports_nothing() {
        let manager = IncidentManager::with_factories(
            vec![IncidentFactory::for_category(Category::Hardware)],
            MemoryReporter::new(),
        )
        .unwrap();

        let result = manager.create_incident(Category::Security, "Phishing", "Email", 4);

        assert!(matches!(result, Err(HelpdeskError::UnsupportedCategory(tag)) if tag == "security"));
        assert!(manager.reporter().events().is_empty());
        assert!(!manager.supports(Category::Security));
        assert!(manager.supports(Category::Hardware));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let result = IncidentManager::with_factories(
            vec![
                IncidentFactory::for_category(Category::Network),
                IncidentFactory::for_category(Category::Network),
            ],
            MemoryReporter::new(),
        );

        assert!(matches!(result, Err(HelpdeskError::ValidationError(_))));
    }

    #[test]
    fn test_create_from_tag() {
        let manager = IncidentManager::new(MemoryReporter::new());

        let summary = manager
            .create_incident_from_tag("red", "Slow internet", "Whole office", 3)
            .unwrap();
        assert_eq!(summary.specialized_technician, "Network Administrator");

        let result = manager.create_incident_from_tag("plumbing", "Leak", "Kitchen", 3);
        assert!(matches!(result, Err(HelpdeskError::UnsupportedCategory(_))));
        assert_eq!(manager.reporter().events().len(), 3);
    }

    #[test]
    fn test_with_config_language() {
        let config = HelpdeskConfig::default().with_language(Language::Spanish);
        let manager = IncidentManager::with_config(&config, MemoryReporter::new());

        let summary = manager
            .create_incident(Category::Hardware, "Printer jam", "Paper stuck", 1)
            .unwrap();

        assert_eq!(manager.language(), Language::Spanish);
        assert_eq!(summary.specialized_technician, "Técnico de Hardware");
    }
}
