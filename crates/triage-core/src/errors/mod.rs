use thiserror::Error;

/// Why an input was rejected before any oracle call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("text is empty")]
    Empty,
    #[error("text is {chars} characters, at most {max} allowed")]
    TooLong { chars: usize, max: usize },
}

/// Failures surfaced by [`crate::engine::Engine::evaluate`].
///
/// A rejected request (`InvalidInput`) is distinguishable from a failed
/// batch (`OracleUnavailable`) and from a completed batch that merely
/// contains `Indeterminate` entries, which is not an error at all.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Detected before any oracle call; no partial work was performed.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// A category's oracle call failed at the transport level. Under the
    /// default fail-fast policy this aborts the remaining batch.
    #[error("oracle unavailable while screening '{category}'")]
    OracleUnavailable {
        category: String,
        #[source]
        source: anyhow::Error,
    },

    /// The caller aborted the batch between categories. Partial verdicts
    /// are discarded.
    #[error("batch cancelled")]
    Cancelled,
}

impl EngineError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EngineError::InvalidInput(_))
    }
}

/// Configuration defects in the category catalog, caught at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog has no categories")]
    Empty,
    #[error("duplicate category id '{0}'")]
    DuplicateId(String),
    #[error("category '{id}' must contain exactly one {{text}} placeholder, found {found}")]
    BadPlaceholder { id: String, found: usize },
}
