//! Unified error types for resume-report.
//!
//! The presentation layer (score classification and document building) is
//! infallible. Errors only come from the surrounding plumbing: loading a
//! report record, reading files and validating configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for resume-report operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ResumeReportError {
    /// Errors while loading an analysis record
    #[error("Failed to load analysis report: {context}")]
    Load {
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Match score {score} is outside 0..=100")]
    ScoreOutOfRange { score: i32 },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for resume-report operations
pub type Result<T> = std::result::Result<T, ResumeReportError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ResumeReportError {
    /// Create a load error with context
    pub fn load(context: impl Into<String>, source: LoadErrorKind) -> Self {
        Self::Load {
            context: context.into(),
            source,
        }
    }

    /// Create a load error for a missing field
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::load(
            "missing required field",
            LoadErrorKind::MissingField {
                field: field.into(),
            },
        )
    }

    /// Create a load error for a score rejected by the score policy
    pub fn score_out_of_range(score: i32) -> Self {
        Self::load("score policy", LoadErrorKind::ScoreOutOfRange { score })
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for ResumeReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ResumeReportError {
    fn from(err: serde_json::Error) -> Self {
        // serde reports absent fields as data errors; surface them as a distinct kind
        let message = err.to_string();
        if let Some(field) = missing_field_name(&message) {
            return Self::missing_field(field);
        }
        Self::load(
            "JSON deserialization",
            LoadErrorKind::InvalidJson(message),
        )
    }
}

/// Extract the field name from serde's "missing field `name`" message.
fn missing_field_name(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context, so a
/// chain of calls reads outermost first.
///
/// ```ignore
/// use resume_report::error::ErrorContext;
///
/// let content = std::fs::read_to_string(path)
///     .with_context(|| format!("reading {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ResumeReportError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: ResumeReportError, new_ctx: &str) -> ResumeReportError {
    match err {
        ResumeReportError::Load {
            context: existing,
            source,
        } => ResumeReportError::Load {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ResumeReportError::Io {
            path,
            message,
            source,
        } => ResumeReportError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        ResumeReportError::Config(msg) => ResumeReportError::Config(chain_context(new_ctx, &msg)),
        ResumeReportError::Validation(msg) => {
            ResumeReportError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ResumeReportError::missing_field("verdict");
        let display = err.to_string();
        assert!(
            display.contains("load") || display.contains("field"),
            "Error message should mention loading or the field: {}",
            display
        );

        let err = ResumeReportError::score_out_of_range(140);
        assert!(matches!(
            err,
            ResumeReportError::Load {
                source: LoadErrorKind::ScoreOutOfRange { score: 140 },
                ..
            }
        ));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ResumeReportError::io("/path/to/report.json", io_err);

        assert!(err.to_string().contains("/path/to/report.json"));
    }

    #[test]
    fn test_serde_missing_field_is_classified() {
        let err: ResumeReportError = serde_json::from_str::<serde_json::Value>("{")
            .map(|_| ())
            .map_err(ResumeReportError::from)
            .unwrap_err();
        assert!(matches!(
            err,
            ResumeReportError::Load {
                source: LoadErrorKind::InvalidJson(_),
                ..
            }
        ));

        assert_eq!(missing_field_name("missing field `summary` at line 1 column 2"), Some("summary"));
        assert_eq!(missing_field_name("expected value"), None);
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(ResumeReportError::load(
                "base",
                LoadErrorKind::InvalidJson("eof".to_string()),
            ))
        }

        fn outer() -> Result<()> {
            inner().context("middle layer").context("outer layer")
        }

        match outer() {
            Err(ResumeReportError::Load { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Load error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(ResumeReportError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("outer", "middle: inner"), "outer: middle: inner");
    }
}
