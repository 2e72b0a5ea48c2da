//! Service error types for redline-engine.

use thiserror::Error;

use crate::flatten::LocateError;
use crate::range_patch::RangePatchError;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by the plan and apply services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The document could not be retrieved.
    #[error("could not reach document: {0}")]
    Fetch(#[source] BoxError),

    /// The text producer failed.
    #[error("text generation failed: {0}")]
    Produce(#[source] BoxError),

    /// The live document could not be read or mutated.
    #[error("could not apply edit: {0}")]
    Mutation(#[source] BoxError),

    /// The document has no level-2 headings, so nothing can be verified.
    #[error("no sections found in document (expected headings starting with {marker:?})")]
    NoSections { marker: String },

    /// No controls were supplied and the document's first section is empty.
    #[error("could not find a controls block in the document's first section")]
    MissingControls,

    #[error(transparent)]
    Locate(#[from] LocateError),

    #[error(transparent)]
    RangePatch(#[from] RangePatchError),
}

impl ServiceError {
    pub(crate) fn fetch(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Fetch(Box::new(error))
    }

    pub(crate) fn produce(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Produce(Box::new(error))
    }

    pub(crate) fn mutation(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Mutation(Box::new(error))
    }
}
