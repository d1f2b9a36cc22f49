use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum EnvstructError {
    #[error("{key} is required but was empty")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(envstruct::missing_required),
            help("set the {key} environment variable to a non-empty value")
        )
    )]
    MissingRequired { key: String },

    #[error("Invalid value for '{field}' from {key}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(envstruct::conversion)))]
    Conversion {
        field: &'static str,
        key: String,
        #[source]
        source: ConversionError,
    },

    #[error("Field '{field}' has type {type_name}, which cannot be read from the environment")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(envstruct::unsupported_type),
            help("disable strict mode or change the field's type")
        )
    )]
    UnsupportedType {
        field: &'static str,
        type_name: &'static str,
    },

    #[error("Failed to write report: {0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(envstruct::io)))]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(envstruct::json)))]
    Json(#[from] serde_json::Error),
}

/// Why a raw string could not become a field value.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum ConversionError {
    #[error("'{input}' is not a base-10 integer: {source}")]
    InvalidInteger {
        input: String,
        source: ParseIntError,
    },

    #[error("{value} does not fit in {target}")]
    OutOfRange { value: String, target: &'static str },

    #[error("'{input}' is not a duration: {source}")]
    InvalidDuration {
        input: String,
        source: humantime::DurationError,
    },

    #[error("'{input}' is not a URL: {source}")]
    InvalidUrl {
        input: String,
        source: url::ParseError,
    },

    #[error("Expected a {expected} value, got {found}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
