use crate::job::EntryRole;
use itertools::Itertools;
use std::fmt;
use thiserror::Error;

/// Errors raised by [`JobBuilder`](crate::builder::JobBuilder) while a job is being assembled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("An entry named '{0}' already exists in the job")]
    DuplicateName(String),

    #[error("Entry '{0}' is not part of this job")]
    UnknownEntry(String),

    #[error("Entry '{name}' is a {role} entry and cannot be used as the start entry")]
    InvalidRole { name: String, role: EntryRole },
}

/// A single structural problem found by the validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No start entry has been designated")]
    MissingStart,

    #[error("Expected exactly one start entry, found {}: {}", .names.len(), .names.iter().join(", "))]
    MultipleStartEntries { names: Vec<String> },

    #[error("Hop #{hop} references entry '{entry}', which does not exist")]
    UnknownHopEndpoint { hop: usize, entry: String },

    #[error("Entry name '{name}' is used by {count} entries")]
    DuplicateName { name: String, count: usize },
}

/// Every violation found in one validation pass, in the order the checks ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, error: &ValidationError) -> bool {
        self.0.contains(error)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Job failed validation with {} error(s): {}",
            self.0.len(),
            self.0.iter().join("; ")
        )
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Errors that can occur while writing or reading the job XML format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XmlError {
    #[error("Failed to write job XML: {0}")]
    Write(String),

    #[error("Malformed job XML: {0}")]
    Malformed(String),

    #[error("Expected a <{expected}> root element, found <{found}>")]
    UnexpectedRoot { expected: String, found: String },

    #[error("Element <{parent}> is missing its <{element}> child")]
    MissingElement { parent: String, element: String },

    #[error("Entry '{name}' has an unsupported type: '{type_code}'")]
    UnsupportedEntryType { name: String, type_code: String },

    #[error("Element <{element}> holds an invalid value: '{value}'")]
    InvalidValue { element: String, value: String },
}

impl XmlError {
    pub(crate) fn write(err: impl fmt::Display) -> Self {
        XmlError::Write(err.to_string())
    }

    pub(crate) fn malformed(err: impl fmt::Display) -> Self {
        XmlError::Malformed(err.to_string())
    }
}

/// Errors that can occur when converting a custom user format into a [`Job`](crate::job::Job).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobConversionError {
    #[error(transparent)]
    Build(#[from] BuildError),
}
