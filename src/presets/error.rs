//! Error types for preset catalogue construction

use thiserror::Error;

/// Problems found while building a preset catalogue
///
/// Only construction can fail; lookups on a built catalogue are infallible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    /// The fallback preset is absent
    #[error("Preset catalogue has no '{0}' preset")]
    MissingFallback(String),

    /// The fallback preset is disabled or has no columns
    #[error("Preset '{0}' must be enabled and have at least one column")]
    UnusableFallback(String),

    /// Two presets share an id
    #[error("Duplicate preset id '{0}'")]
    DuplicatePreset(String),

    /// A column line is not `key, label, path`
    #[error("Preset '{preset}' line {line}: expected `- key, label, path`, found {text:?}")]
    MalformedColumn {
        preset: String,
        line: usize,
        text: String,
    },

    /// `enabled:` is not a boolean
    #[error("Preset '{preset}' line {line}: invalid enabled value {value:?}")]
    InvalidEnabled {
        preset: String,
        line: usize,
        value: String,
    },

    /// `version:` is not an integer
    #[error("Line {line}: invalid catalogue version {value:?}")]
    InvalidVersion { line: usize, value: String },

    /// A preset attribute or column appeared before any `## <id>` heading
    #[error("Line {line}: {text:?} appears outside a preset section")]
    OutsidePreset { line: usize, text: String },
}
