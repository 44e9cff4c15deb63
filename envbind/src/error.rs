//! Error types for schema resolution

use crate::value::DeclaredType;

/// Errors raised while resolving a schema against the environment.
///
/// Every variant carries structured context rather than a bare message.
/// The type is `Clone` because missing-variable errors may be stored on a
/// resolved [`Config`](crate::Config) and re-raised on every access when
/// lazy checking is enabled.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BindError {
    /// The schema description is not a valid attribute collection
    /// (duplicate or non-identifier attribute names).
    #[error("schema '{schema}' is invalid: {message}")]
    InvalidSchema {
        /// Name of the offending schema
        schema: String,
        /// What made the schema invalid
        message: String,
    },

    /// A required attribute has no environment value and no default.
    #[error(
        "config '{schema}' expects a value of type {declared} in the \
         environment variable for attribute '{attribute}'"
    )]
    Missing {
        /// Name of the schema being resolved
        schema: String,
        /// Name of the unresolved attribute
        attribute: String,
        /// Declared type the environment value would have been converted to
        declared: DeclaredType,
    },

    /// An environment value is present but cannot be converted to the
    /// attribute's declared type. Never deferred: a malformed value is a
    /// configuration error regardless of lazy checking.
    #[error(
        "config '{schema}' expects a value of type {declared} for attribute \
         '{attribute}', but '{value}' could not be converted: {message}"
    )]
    Convert {
        /// Name of the schema being resolved
        schema: String,
        /// Name of the attribute whose value failed to convert
        attribute: String,
        /// The raw environment string
        value: String,
        /// Declared type conversion was attempted for
        declared: DeclaredType,
        /// Detail message from the converter
        message: String,
    },

    /// Access to an attribute name the schema never declared.
    #[error("config '{schema}' has no attribute named '{attribute}'")]
    UnknownAttribute {
        /// Name of the resolved schema
        schema: String,
        /// The undeclared attribute name
        attribute: String,
    },
}
