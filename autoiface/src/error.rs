//! Errors surfaced to the host.

/// Failure to register a source with the host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum OutputError {
    /// Two sources were registered under the same hint.
    #[error("a source with hint `{0}` was already added")]
    DuplicateHint(String),
}
