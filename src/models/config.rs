use crate::HelpdeskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HelpdeskConfig {
    pub language: Language,
    pub reporter: ReporterKind,
    pub log_level: String,
}

impl Default for HelpdeskConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            reporter: ReporterKind::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Raw shape of the TOML file, before values are checked.
#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    language: Option<String>,
    reporter: Option<String>,
    log_level: Option<String>,
}

impl HelpdeskConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, HelpdeskError> {
        let file: ConfigFile = toml::from_str(content)?;

        let mut config = Self::default();
        if let Some(language) = file.language {
            config.language = Language::try_from(language.as_str())?;
        }
        if let Some(reporter) = file.reporter {
            config.reporter = ReporterKind::try_from(reporter.as_str())?;
        }
        if let Some(log_level) = file.log_level {
            config.log_level = log_level;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, HelpdeskError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_reporter(mut self, reporter: ReporterKind) -> Self {
        self.reporter = reporter;
        self
    }

    fn validate(&self) -> Result<(), HelpdeskError> {
        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(HelpdeskError::invalid_config(format!(
                "Unknown log level: '{}'",
                other
            ))),
        }
    }
}

/// Language used for technician labels and displayed tag values.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "english"),
            Self::Spanish => write!(f, "spanish"),
        }
    }
}

impl TryFrom<&str> for Language {
    type Error = HelpdeskError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "spanish" | "es" | "español" => Ok(Self::Spanish),
            _ => Err(HelpdeskError::invalid_config(format!(
                "Invalid language: '{}'. Use 'english' or 'spanish'",
                value
            ))),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = HelpdeskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Where `process` sends its informational lines.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ReporterKind {
    #[default]
    Console,
    Tracing,
    Silent,
}

impl fmt::Display for ReporterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => write!(f, "console"),
            Self::Tracing => write!(f, "tracing"),
            Self::Silent => write!(f, "silent"),
        }
    }
}

impl TryFrom<&str> for ReporterKind {
    type Error = HelpdeskError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "console" | "stdout" => Ok(Self::Console),
            "tracing" | "log" => Ok(Self::Tracing),
            "silent" | "none" => Ok(Self::Silent),
            _ => Err(HelpdeskError::invalid_config(format!(
                "Invalid reporter: '{}'. Use 'console', 'tracing', or 'silent'",
                value
            ))),
        }
    }
}

impl TryFrom<String> for ReporterKind {
    type Error = HelpdeskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}
