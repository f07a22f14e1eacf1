use crate::{
    Category, HelpdeskError, IncidentSummary, Language, Priority, Status, TIMESTAMP_FORMAT,
};
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IncidentId(Uuid);

impl IncidentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for IncidentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for IncidentId {
    type Error = HelpdeskError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let uuid = Uuid::parse_str(value)
            .map_err(|e| HelpdeskError::validation(format!("Invalid incident ID: {}", e)))?;
        Ok(Self(uuid))
    }
}

/// Identifier of the user who reported an incident. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Result<Self, HelpdeskError> {
        if id == 0 {
            return Err(HelpdeskError::validation(
                "Reporting user ID must be a positive integer",
            ));
        }
        Ok(Self(id))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single reported issue.
///
/// Category, priority and status are fixed at construction and there are
/// no setters. Use a factory from [`crate::factories`] to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incident {
    id: IncidentId,
    title: String,
    description: String,
    reported_by: UserId,
    category: Category,
    priority: Priority,
    status: Status,
    created_at: DateTime<Utc>,
}

impl Incident {
    /// Builds an open incident of the given category.
    ///
    /// # Arguments
    /// * `category` - Category that decides priority, hours and technician
    /// * `title` - Short title (must be non-empty)
    /// * `description` - Free text description (must be non-empty)
    /// * `reported_by` - Positive identifier of the reporting user
    ///
    /// # Returns
    /// * `Ok(Incident)` - Fully initialized incident
    /// * `Err(HelpdeskError)` - Validation error, nothing is built
    pub fn new(
        category: Category,
        title: String,
        description: String,
        reported_by: u64,
    ) -> Result<Self, HelpdeskError> {
        if title.trim().is_empty() {
            return Err(HelpdeskError::validation(
                "Incident title cannot be empty or whitespace",
            ));
        }

        if description.trim().is_empty() {
            return Err(HelpdeskError::validation(
                "Incident description cannot be empty or whitespace",
            ));
        }

        let reported_by = UserId::new(reported_by)?;

        Ok(Self {
            id: IncidentId::new(),
            title,
            description,
            reported_by,
            category,
            priority: category.default_priority(),
            status: Status::Open,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> &IncidentId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn reported_by(&self) -> UserId {
        self.reported_by
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn estimated_hours(&self) -> u32 {
        self.category.estimated_hours()
    }

    pub fn specialized_technician(&self) -> &'static str {
        self.specialized_technician_in(Language::English)
    }

    pub fn specialized_technician_in(&self, language: Language) -> &'static str {
        self.category.specialized_technician(language)
    }

    pub fn summary(&self) -> IncidentSummary {
        self.summary_in(Language::English)
    }

    pub fn summary_in(&self, language: Language) -> IncidentSummary {
        IncidentSummary {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            priority: self.priority,
            created_at: self.created_at.format(TIMESTAMP_FORMAT).to_string(),
            estimated_hours: self.estimated_hours(),
            specialized_technician: self.specialized_technician_in(language).to_string(),
            language,
        }
    }
}
