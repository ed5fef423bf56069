//! Error taxonomy shared by the resolver, the store and the orchestrator

use crate::rules::Violation;
use crate::scaffold::Step;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IgniteError {
    /// The project name does not match the identifier pattern
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: &'static str },

    /// A resolved configuration broke a compatibility rule
    #[error("Configuration error: {0}")]
    Validation(#[from] Violation),

    #[error("Could not read saved configuration {}", path.display())]
    CacheRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write saved configuration {}", path.display())]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Saved configuration {} is malformed", path.display())]
    CacheFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An external collaborator (generator, installer, file writer) failed
    #[error("{step} failed")]
    Upstream {
        step: Step,
        #[source]
        source: anyhow::Error,
    },

    /// The terminal could not be driven
    #[error("Prompt failed")]
    Prompt(#[source] std::io::Error),
}

impl IgniteError {
    /// Errors raised by the core's own invariants (as opposed to collaborators)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            IgniteError::InvalidProjectName { .. } | IgniteError::Validation(_)
        )
    }

    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            IgniteError::CacheRead { .. }
                | IgniteError::CacheWrite { .. }
                | IgniteError::CacheFormat { .. }
        )
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, IgniteError::Upstream { .. })
    }
}

pub type Result<T> = std::result::Result<T, IgniteError>;

/// Result of an interactive operation the user may abort
///
/// Cancellation is a normal terminal outcome, so it is carried as a value
/// rather than an error and the caller decides how to exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Completed(value) => Outcome::Completed(f(value)),
            Outcome::Cancelled => Outcome::Cancelled,
        }
    }

    pub fn completed(self) -> Option<T> {
        match self {
            Outcome::Completed(value) => Some(value),
            Outcome::Cancelled => None,
        }
    }
}
