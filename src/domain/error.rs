use std::io;

use thiserror::Error;

/// Library-wide error type for ui5gen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Interactive prompt failed or was interrupted.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Template rendering failure for an embedded scaffold file.
    #[error("Failed to render template '{path}': {details}")]
    Template { path: String, details: String },

    /// Settings store exists but cannot be parsed.
    #[error("Malformed settings store '{path}': {details}")]
    MalformedSettings { path: String, details: String },

    /// Destination already holds a project with a completed setup marker.
    #[error("Project at '{0}' is already set up; refusing to overwrite it")]
    ProjectExists(String),

    /// Git command failed.
    #[error("Git command failed ({command}): {details}")]
    Git { command: String, details: String },

    /// A field survived resolution and prompting without a value. This is a
    /// logic defect, not bad user input, and aborts the generator.
    #[error("Internal error: field '{field}' is still unresolved after merging")]
    ConfigurationIncomplete { field: &'static str },
}

/// Why a flag-supplied value cannot be used without prompting.
///
/// Every variant is recovered locally by falling back to the interactive
/// prompt; none of them is ever surfaced as a fatal failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Value fails the field's validator or choice-set membership.
    #[error("invalid value '{value}'")]
    Validation { value: String },

    /// Alias key is not declared in the option catalog.
    #[error("unknown alias key '{key}'")]
    UnknownAlias { key: String },

    /// Value is individually valid but incompatible with an already
    /// resolved field.
    #[error("'{value}' is not permitted for the selected {other_field}")]
    ConstraintViolation { value: String, other_field: &'static str },
}
