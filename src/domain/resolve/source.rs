use crate::domain::course::CourseRecord;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

/// Why a single source could not answer. Both kinds are recovered the same way:
/// the coordinator falls through to the next source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Format error: {0}")]
    Format(String),
}

/// A fallible, asynchronous course lookup (remote API, document store).
///
/// Implementations make exactly one attempt per call; retry policy belongs to the caller.
#[async_trait]
pub trait CourseSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// `Ok(None)` is a miss. A blank identifier never yields a record.
    async fn fetch(&self, identifier: &str) -> Result<Option<CourseRecord>, SourceError>;
}

/// Where a resolved record came from, in priority order (highest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Remote,
    Secondary,
    Static,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SourceKind::Remote => "remote",
            SourceKind::Secondary => "secondary",
            SourceKind::Static => "static",
        };
        f.write_str(s)
    }
}

/// Stand-in for a source whose connection settings are absent.
///
/// Every lookup fails with a transport error so the chain falls through.
pub struct UnconfiguredSource {
    name: &'static str,
}

impl UnconfiguredSource {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

#[async_trait]
impl CourseSource for UnconfiguredSource {
    fn name(&self) -> &str {
        self.name
    }

    async fn fetch(&self, _identifier: &str) -> Result<Option<CourseRecord>, SourceError> {
        Err(SourceError::Transport(format!("{} is not configured", self.name)))
    }
}
