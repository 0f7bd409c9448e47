// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
///
/// Record-level validation problems are not errors; they travel as
/// diagnostics and never reach this type.
#[derive(Debug, Error)]
pub enum LineToolsError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<LineToolsError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

impl LineToolsError {
    /// Walk through `Context` layers and return the innermost error.
    pub fn root(&self) -> &LineToolsError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// True when the run stopped because the input path does not name a file.
    pub fn is_input_not_found(&self) -> bool {
        matches!(
            self.root(),
            Self::Infrastructure(InfrastructureError::InputNotFound { .. })
        )
    }
}

pub type Result<T> = std::result::Result<T, LineToolsError>;

/// Domain-layer specific errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("No {what} to summarize")]
    EmptyInput { what: &'static str },

    #[error("Unsupported radix {radix}: expected a value between 2 and 16")]
    InvalidRadix { radix: u32 },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("file not found -> {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to prepare results directory '{}': {source}", path.display())]
    ResultsDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Console output failed: {source}")]
    Console {
        #[source]
        source: std::io::Error,
    },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::Console { source: err }
    }
}

impl From<std::io::Error> for LineToolsError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<LineToolsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LineToolsError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LineToolsError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
