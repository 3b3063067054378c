//! Document generation errors.

use thiserror::Error;

use crimson_core::DomainError;

/// Errors surfaced by the template document builder.
///
/// All variants are fatal for the build call; there is no internal retry.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Template asset unreachable or unparsable.
    #[error("template load failed: {0}")]
    TemplateLoad(String),

    /// Order or supplier snapshot is missing required fields. Callers are
    /// expected to validate before invoking the builder.
    #[error("incomplete order data: {0}")]
    MissingData(#[from] DomainError),

    /// The mutated workbook could not be written back to bytes.
    #[error("artifact serialization failed: {0}")]
    Serialize(String),
}
