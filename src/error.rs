//! Structured error types for the Folio layout engine.
//!
//! Layout itself has exactly two failure modes, both raised while a node tree
//! is being *built*: a bad parameter, or an attempt to give a node children it
//! cannot hold. "Content does not fit" is not an error at all; see
//! [`crate::layout::Next`].
//!
//! [`FolioError`] adds the failures of the JSON job path on top.

use thiserror::Error;

/// Construction-time failures of the content model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A node parameter is out of range (negative length, NaN, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A structural change the node kind does not support.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl LayoutError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        LayoutError::InvalidArgument(msg.into())
    }

    pub(crate) fn unsupported(msg: impl Into<String>) -> Self {
        LayoutError::UnsupportedOperation(msg.into())
    }
}

/// The unified error type returned by the job-level API.
#[derive(Debug, Error)]
pub enum FolioError {
    /// JSON input failed to parse as a valid Folio job.
    #[error("failed to parse job: {source}{}", format_hint(.hint))]
    Parse {
        source: serde_json::Error,
        hint: String,
    },
    /// The content tree or the configuration was rejected.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// The content can never be placed in the region the job offers.
    #[error(
        "region {region}: content needs at least {needed_width}x{needed_height} \
         device units but only {width}x{height} are available"
    )]
    NoProgress {
        region: usize,
        needed_width: i32,
        needed_height: i32,
        width: i32,
        height: i32,
    },
    /// Reading input or writing output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't describe a Folio job. Check node types, field names and that lengths are non-negative.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        FolioError::Parse { source: e, hint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_carries_hint() {
        let err: FolioError = serde_json::from_str::<serde_json::Value>("{\"a\": 1,}")
            .unwrap_err()
            .into();
        let msg = err.to_string();
        assert!(msg.starts_with("failed to parse job"));
        assert!(msg.contains("Hint: Check for trailing commas"));
    }

    #[test]
    fn layout_error_is_transparent() {
        let err = FolioError::from(LayoutError::invalid("padding must be non-negative"));
        assert_eq!(err.to_string(), "invalid argument: padding must be non-negative");
    }
}
