//! Error types for sqlfrag

use thiserror::Error;

/// Result type alias for query construction
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while constructing a [`Query`](crate::Query).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// `Query::new` was called without any fragment
    #[error("at least one query fragment required")]
    EmptyQuery,

    /// A slot token `{index}` is missing from the remaining template text
    #[error("slot {{{index}}} not found in template: {template:?}")]
    MissingSlot { index: usize, template: String },

    /// Literal text contains a `{index}` token that a rebuild would treat as a slot
    #[error("literal text contains slot token {{{index}}}; positional form would not round-trip")]
    AmbiguousTemplate { index: usize },
}

impl QueryError {
    /// Create a missing slot error
    pub fn missing_slot(index: usize, template: impl Into<String>) -> Self {
        Self::MissingSlot {
            index,
            template: template.into(),
        }
    }

    /// Check if this is an empty query error
    pub fn is_empty_query(&self) -> bool {
        matches!(self, Self::EmptyQuery)
    }

    /// Check if this is an ambiguous template error
    pub fn is_ambiguous_template(&self) -> bool {
        matches!(self, Self::AmbiguousTemplate { .. })
    }

    /// Check if this is a missing slot error
    pub fn is_missing_slot(&self) -> bool {
        matches!(self, Self::MissingSlot { .. })
    }
}
